use objmap_core::Value;

/// State scoped to one top-level conversion.
///
/// Holds the root document handed to [`Formatter`](objmap_core::Formatter)s.
/// A fresh context is created for every top-level call and threaded through
/// the recursion, so formatters always see the root of the conversion that is
/// running.
#[derive(Debug, Clone, Copy)]
pub struct ConversionContext<'a> {
    root: &'a Value,
}

impl<'a> ConversionContext<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &'a Value {
        self.root
    }
}

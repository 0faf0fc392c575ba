//! Error types for the mapping engine.

use objmap_core::ParseError;

/// Errors produced by [`Mapper`](crate::Mapper).
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The input text could not be turned into a document.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A document that should map onto a type is not an object.
    #[error("cannot map {found} onto '{type_name}': expected an object")]
    NotAnObject {
        type_name: &'static str,
        found: &'static str,
    },
}

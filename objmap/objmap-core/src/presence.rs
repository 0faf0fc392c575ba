use crate::value::Value;

static NULL: Value = Value::Null;

/// Outcome of resolving a field against a document.
///
/// Keeps "key missing" apart from "key present with a null value": a supplied
/// `Value::Null` is still [`Presence::Supplied`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presence<'a> {
    /// The key exists in the document.
    Supplied(&'a Value),
    /// The key is missing and the field carries a default value.
    Defaulted(&'a Value),
    /// The key is missing and there is no default.
    Missing,
}

impl<'a> Presence<'a> {
    pub fn is_present(&self) -> bool {
        !matches!(self, Presence::Missing)
    }

    /// The resolved value, `None` when missing.
    pub fn value(&self) -> Option<&'a Value> {
        match *self {
            Presence::Supplied(value) | Presence::Defaulted(value) => Some(value),
            Presence::Missing => None,
        }
    }

    /// The resolved value, with a missing one read as null.
    pub fn value_or_null(&self) -> &'a Value {
        self.value().unwrap_or(&NULL)
    }

    /// The resolved value unless it is missing or null.
    pub fn non_null(&self) -> Option<&'a Value> {
        self.value().filter(|value| !value.is_null())
    }
}

//! Error types for the text-decoding boundary.

/// Error returned by [`TextDecoder`](crate::TextDecoder) implementations.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input text is not well-formed.
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    /// The input text is well-formed but its top level is not an object.
    #[error("expected an object at the document root, found {found}")]
    NotAnObject { found: &'static str },
}

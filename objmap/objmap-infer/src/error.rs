//! Error types for schema inference and emission.

use std::{fmt, io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum InferError {
    /// Inference starts from an object; the sample root was something else.
    #[error("sample document must be an object, found {found}")]
    NotAnObject { found: &'static str },

    /// Two keys of one object map to the same field.
    #[error("keys '{first}' and '{second}' of '{type_name}' both map to field '{field}'")]
    DuplicateField {
        type_name: String,
        field: String,
        first: String,
        second: String,
    },

    /// An artifact could not be written; its type and the types nested under
    /// it were not emitted.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An artifact could not be rendered; handled like a failed write.
    #[error("failed to render {file_name}")]
    Render {
        file_name: String,
        #[source]
        source: fmt::Error,
    },
}

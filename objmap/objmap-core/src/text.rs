//! Text-to-document decoding used at the `unmarshal` boundary.

use crate::{error::ParseError, value::Value};

/// Turns literal text into a generic document.
pub trait TextDecoder {
    /// Parse `text`; the returned document is always an object.
    fn parse(&self, text: &str) -> Result<Value, ParseError>;
}

/// JSON text decoder backed by `serde_json`, preserving member order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl TextDecoder for JsonDecoder {
    fn parse(&self, text: &str) -> Result<Value, ParseError> {
        parse_document(text)
    }
}

/// Parse JSON text into an object document.
pub fn parse_document(text: &str) -> Result<Value, ParseError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    match Value::from(json) {
        document @ Value::Object(_) => Ok(document),
        other => Err(ParseError::NotAnObject {
            found: other.kind_name(),
        }),
    }
}

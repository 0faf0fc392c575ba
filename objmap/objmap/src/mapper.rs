//! Public entry points of the mapping engine.

use objmap_core::{JsonDecoder, TextDecoder, Value};
use tracing::debug;

use crate::{
    context::ConversionContext,
    descriptor::Mapped,
    engine,
    error::MapError,
};

/// Maps documents onto [`Mapped`] types.
///
/// `D` turns text into documents for [`Mapper::unmarshal`]; JSON by default.
/// Every top-level call gets its own [`ConversionContext`], so formatters
/// observe the root of the call they run in.
#[derive(Debug, Clone, Default)]
pub struct Mapper<D = JsonDecoder> {
    decoder: D,
}

impl Mapper {
    pub fn new() -> Self {
        Self {
            decoder: JsonDecoder,
        }
    }
}

impl<D: TextDecoder> Mapper<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    /// Parse `text` with the configured decoder, then [`decode`](Self::decode) it.
    pub fn unmarshal<T: Mapped>(&self, text: &str) -> Result<T, MapError> {
        let document = self.decoder.parse(text)?;
        self.decode(&document)
    }

    /// Build a new `T` from `document`.
    pub fn decode<T: Mapped>(&self, document: &Value) -> Result<T, MapError> {
        debug!(type_name = T::TYPE_NAME, "decoding document");
        let ctx = ConversionContext::new(document);
        engine::try_convert(document, &ctx)
    }

    /// Assign the fields of an existing `instance` from `document`, in place.
    pub fn populate<T: Mapped>(&self, document: &Value, instance: &mut T) -> Result<(), MapError> {
        debug!(type_name = T::TYPE_NAME, "populating instance");
        let members = document
            .as_object()
            .ok_or_else(|| engine::not_an_object::<T>(document))?;
        let ctx = ConversionContext::new(document);
        engine::populate_object(members, instance, &ctx);
        Ok(())
    }
}

/// [`Mapper::decode`] with the default JSON mapper.
pub fn decode<T: Mapped>(document: &Value) -> Result<T, MapError> {
    Mapper::new().decode(document)
}

/// [`Mapper::populate`] with the default JSON mapper.
pub fn populate<T: Mapped>(document: &Value, instance: &mut T) -> Result<(), MapError> {
    Mapper::new().populate(document, instance)
}

/// [`Mapper::unmarshal`] with the default JSON mapper.
pub fn unmarshal<T: Mapped>(text: &str) -> Result<T, MapError> {
    Mapper::new().unmarshal(text)
}

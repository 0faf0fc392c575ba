//! Format-agnostic core types shared by the `objmap` mapping engine and the
//! schema-inference engine.
//!
//! This crate provides the document representation ([`Value`]), the presence
//! model ([`Presence`]), the type-categorization vocabulary
//! ([`ScalarKind`] / [`TypeCategory`]), declarative field metadata
//! ([`FieldMeta`]) and the [`Formatter`] capability.

mod category;
mod coerce;
mod error;
mod formatter;
mod meta;
mod presence;
mod text;
mod value;

pub use category::{ScalarKind, TypeCategory};
pub use coerce::coerce;
pub use error::ParseError;
pub use formatter::Formatter;
pub use meta::{FieldMeta, Meta, MetaKind};
pub use presence::Presence;
pub use text::{JsonDecoder, TextDecoder, parse_document};
pub use value::{Object, Value};

mod context;
mod descriptor;
mod engine;
mod error;
mod mapper;

pub use context::ConversionContext;
pub use descriptor::{FieldDescriptor, FromScalar, Mapped, TypeDescriptor};
pub use error::MapError;
pub use mapper::{Mapper, decode, populate, unmarshal};
pub use objmap_core as core;
pub use objmap_core::{Formatter, Object, ScalarKind, TypeCategory, Value};

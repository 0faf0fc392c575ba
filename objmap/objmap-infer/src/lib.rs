//! Schema inference for `objmap`.
//!
//! Inference runs in two passes:
//! 1. [`infer_types`] walks one sample document and builds an in-memory tree
//!    of [`GeneratedType`]s, one per nesting level.
//! 2. [`emit`] renders every type as Rust source ([`render_type`]) and writes
//!    it to a [`SourceStore`], together with a module index.
//!
//! [`infer`] runs both passes against a directory on disk.
//!
//! ```rust
//! use objmap_core::Value;
//! use objmap_infer::{InferOptions, infer_types};
//!
//! let sample = Value::from(serde_json::json!({ "user_id": 7, "tags": ["a", "b"] }));
//! let root = infer_types(&sample, &InferOptions::new("Sample", "generated")).unwrap();
//! assert_eq!(root.fields[0].name, "userId");
//! assert_eq!(root.fields[0].meta.alias(), Some("user_id"));
//! ```

mod emit;
mod error;
mod format;
mod model;
mod naming;
mod render;
mod traverse;

pub use emit::{EmitReport, FsStore, SourceStore, emit, infer, infer_into};
pub use error::InferError;
pub use format::format_generated_type;
pub use model::{GeneratedField, GeneratedType, InferOptions};
pub use naming::normalize_key;
pub use render::{render_module_index, render_type};
pub use traverse::infer_types;

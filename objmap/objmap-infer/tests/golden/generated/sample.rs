//! `Sample` in `generated`, inferred from a sample document.
//! Field metadata: alias, raw_collection.

use std::sync::OnceLock;

use objmap::{FieldDescriptor, Mapped, TypeDescriptor, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    /// objmap: alias = "user_id"
    user_id: i64,
    /// objmap: raw_collection
    tags: Vec<Value>,
}

impl Sample {
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn tags(&self) -> &[Value] {
        &self.tags
    }
}

impl Mapped for Sample {
    const TYPE_NAME: &'static str = "Sample";

    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<Sample>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::new()
                .field(FieldDescriptor::scalar("userId", |t: &mut Sample, v| t.user_id = v).alias("user_id"))
                .field(FieldDescriptor::raw_collection("tags", |t: &mut Sample, v| t.tags = v))
        })
    }
}

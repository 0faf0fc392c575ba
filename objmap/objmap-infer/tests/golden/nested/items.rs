//! `Items` in `nested`, inferred from a sample document.

use std::sync::OnceLock;

use objmap::{FieldDescriptor, Mapped, TypeDescriptor};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Items {
    a: i64,
}

impl Items {
    pub fn a(&self) -> i64 {
        self.a
    }
}

impl Mapped for Items {
    const TYPE_NAME: &'static str = "Items";

    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<Items>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::new()
                .field(FieldDescriptor::scalar("a", |t: &mut Items, v| t.a = v))
        })
    }
}

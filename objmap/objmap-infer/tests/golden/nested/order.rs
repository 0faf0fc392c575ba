//! `Order` in `nested`, inferred from a sample document.
//! Field metadata: nested_collection.

use std::sync::OnceLock;

use objmap::{FieldDescriptor, Mapped, TypeDescriptor};
use crate::nested::Owner;
use crate::nested::Items;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    id: i64,
    owner: Owner,
    /// objmap: nested_collection = "Items"
    items: Vec<Option<Items>>,
}

impl Order {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn items(&self) -> &[Option<Items>] {
        &self.items
    }
}

impl Mapped for Order {
    const TYPE_NAME: &'static str = "Order";

    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<Order>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::new()
                .field(FieldDescriptor::scalar("id", |t: &mut Order, v| t.id = v))
                .field(FieldDescriptor::object("owner", |t: &mut Order, v| t.owner = v))
                .field(FieldDescriptor::collection("items", |t: &mut Order, v| t.items = v))
        })
    }
}

//! Mapped types shared by the mapping engine tests.
#![allow(dead_code)]

use std::sync::OnceLock;

use objmap::{FieldDescriptor, Mapped, TypeDescriptor, Value};

#[derive(Debug, Default, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
}

impl Mapped for User {
    const TYPE_NAME: &'static str = "User";

    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<User>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::new()
                .field(FieldDescriptor::scalar("id", |t: &mut User, v| t.id = v))
                .field(FieldDescriptor::scalar("name", |t: &mut User, v| t.name = v))
        })
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Item {
    pub sku: String,
    pub qty: i64,
}

impl Mapped for Item {
    const TYPE_NAME: &'static str = "Item";

    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<Item>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::new()
                .field(FieldDescriptor::scalar("sku", |t: &mut Item, v| t.sku = v))
                .field(FieldDescriptor::scalar("qty", |t: &mut Item, v| t.qty = v))
        })
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Address {
    pub city: String,
    pub zip: String,
}

impl Mapped for Address {
    const TYPE_NAME: &'static str = "Address";

    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<Address>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::new()
                .field(FieldDescriptor::scalar("city", |t: &mut Address, v| t.city = v))
                .field(FieldDescriptor::scalar("zip", |t: &mut Address, v| t.zip = v))
        })
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Order {
    pub order_id: i64,
    pub status: String,
    pub total: f64,
    pub paid: bool,
    pub items: Vec<Option<Item>>,
    pub tags: Vec<Value>,
    pub shipping: Address,
    pub billing: Option<Address>,
    pub note: Option<String>,
}

impl Mapped for Order {
    const TYPE_NAME: &'static str = "Order";

    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<Order>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::new()
                .field(
                    FieldDescriptor::scalar("orderId", |t: &mut Order, v| t.order_id = v)
                        .alias("order-id"),
                )
                .field(
                    FieldDescriptor::scalar("status", |t: &mut Order, v| t.status = v)
                        .default_value("pending"),
                )
                .field(FieldDescriptor::scalar("total", |t: &mut Order, v| t.total = v))
                .field(FieldDescriptor::scalar("paid", |t: &mut Order, v| t.paid = v))
                .field(FieldDescriptor::collection("items", |t: &mut Order, v| t.items = v))
                .field(FieldDescriptor::raw_collection("tags", |t: &mut Order, v| t.tags = v))
                .field(FieldDescriptor::object("shipping", |t: &mut Order, v| t.shipping = v))
                .field(FieldDescriptor::optional_object("billing", |t: &mut Order, v| {
                    t.billing = v
                }))
                .field(FieldDescriptor::scalar("note", |t: &mut Order, v| t.note = v))
        })
    }
}

/// Self-referential type.
#[derive(Debug, Default, PartialEq)]
pub struct Node {
    pub name: String,
    pub children: Vec<Option<Node>>,
}

impl Mapped for Node {
    const TYPE_NAME: &'static str = "Node";

    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<Node>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::new()
                .field(FieldDescriptor::scalar("name", |t: &mut Node, v| t.name = v))
                .field(FieldDescriptor::collection("children", |t: &mut Node, v| {
                    t.children = v
                }))
        })
    }
}

pub fn document(value: serde_json::Value) -> Value {
    Value::from(value)
}

//! Types of `nested` inferred from a sample document.

mod items;
mod order;
mod owner;

pub use items::Items;
pub use order::Order;
pub use owner::Owner;

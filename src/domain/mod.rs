pub mod fields;
pub mod ids;
pub mod order;
pub mod order_item;
pub mod product;

pub use fields::{Email, ImageRef, Money};
pub use ids::*;
pub use order::*;
pub use order_item::*;
pub use product::*;

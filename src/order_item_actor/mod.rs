//! Order items: the join rows between orders and products.

mod dtos;
pub mod entity;
pub mod error;

pub use dtos::*;
pub use error::*;

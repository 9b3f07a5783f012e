//! Product rows: creation payloads, patches and field validation.

mod dtos;
pub mod entity;
pub mod error;

pub use dtos::*;
pub use error::*;

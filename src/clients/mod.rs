//! Entity clients.
//!
//! Each client wraps the [`ResourceClient`](crate::actor_framework::ResourceClient)
//! of its own table plus handles to the tables it relates to, and is where
//! referential integrity and cascade deletes live.

#[macro_use]
mod macros;

mod order_client;
mod order_item_client;
mod product_client;

use std::sync::Arc;

use tokio::sync::Mutex;

pub use order_client::OrderClient;
pub use order_item_client::OrderItemClient;
pub use product_client::ProductClient;

/// Serialises operations that touch more than one table.
pub type RelationLock = Arc<Mutex<()>>;

//! Catalog and order schema for a small online shop.
//!
//! Three tables (products, orders and the order items joining them), each
//! owned by a [`ResourceActor`](actor_framework::ResourceActor) and reached
//! through an entity client. Field constraints are enforced by the value
//! types in [`domain::fields`]; referential integrity and cascade deletes by
//! the [`clients`].
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use rust_decimal::Decimal;
//! use shop_catalog::app_system::{ShopConfig, ShopSystem};
//! use shop_catalog::order_actor::OrderCreate;
//! use shop_catalog::product_actor::ProductCreate;
//!
//! let system = ShopSystem::new(&ShopConfig::default());
//! let mug = system
//!     .product_client
//!     .create_product(ProductCreate::new("Mug", Decimal::new(999, 2), 10))
//!     .await?;
//! let order = system
//!     .order_client
//!     .create_order(OrderCreate::new("Alice", "a@x.com", "1 Main St"))
//!     .await?;
//! system.order_item_client.add_product(order, mug, 2).await?;
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod error;
pub mod order_actor;
pub mod order_item_actor;
pub mod product_actor;

#[cfg(test)]
mod mock_framework;

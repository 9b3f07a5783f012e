use serde::Serialize;

use crate::domain::{Order, OrderItem, Product};

/// The three tables as rows, in id order.
///
/// Serialises to `{"product": [...], "order": [...], "order_item": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopSnapshot {
    pub product: Vec<Product>,
    pub order: Vec<Order>,
    pub order_item: Vec<OrderItem>,
}

impl ShopSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

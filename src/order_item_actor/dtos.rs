use rust_decimal::Decimal;

use crate::domain::{OrderId, ProductId};

/// Payload for adding a product to an order.
#[derive(Debug, Clone)]
pub struct OrderItemCreate {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    /// Unit price at order time.
    pub price: Decimal,
}

/// Partial update. The owning order and product are fixed at creation.
#[derive(Debug, Clone, Default)]
pub struct OrderItemPatch {
    pub quantity: Option<u32>,
    pub price: Option<Decimal>,
}

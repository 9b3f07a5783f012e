use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::fields::Money;
use super::ids::{OrderId, OrderItemId, ProductId};
use super::product::Product;

/// One line of an order: how many units of a product, at what price.
///
/// `price` is a snapshot taken when the item was created and does not follow
/// later changes to the product's price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: Money,
}

impl OrderItem {
    /// `price × quantity` for this line.
    pub fn line_total(&self) -> Decimal {
        self.price.times(self.quantity)
    }

    /// Label of the form `"2 x Mug"`.
    ///
    /// The item only holds a product id, so the caller supplies the product.
    pub fn label<'a>(&'a self, product: &'a Product) -> OrderItemLabel<'a> {
        OrderItemLabel { item: self, product }
    }
}

pub struct OrderItemLabel<'a> {
    item: &'a OrderItem,
    product: &'a Product,
}

impl fmt::Display for OrderItemLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.item.quantity, self.product.name)
    }
}

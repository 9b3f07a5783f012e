use std::fmt;

use serde::Serialize;

use super::fields::{ImageRef, Money};
use super::ids::ProductId;

/// A sellable catalog item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Money,
    /// Stock on hand.
    pub quantity: u32,
    #[serde(rename = "image_ref")]
    pub image: Option<ImageRef>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Renders as the product name.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

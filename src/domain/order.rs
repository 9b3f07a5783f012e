use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::fields::{Email, Money};
use super::ids::OrderId;

/// Represents a customer order.
///
/// `total_price` is stored as supplied by the caller; it is not kept in
/// step with the order's items unless the caller recalculates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: Email,
    pub customer_phone: Option<String>,
    pub address: String,
    pub(crate) created_at: DateTime<Utc>,
    pub total_price: Money,
    /// Simulated payment data, not a real payment record.
    pub payment_details: String,
}

impl Order {
    /// Set once when the order is created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order {} by {}", self.id, self.customer_name)
    }
}

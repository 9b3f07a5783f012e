use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::fields::{self, Email, Money};
use crate::domain::{Order, OrderId};
use crate::error::ValidationError;
use super::dtos::{OrderCreate, OrderPatch};

const CUSTOMER_NAME_MAX_LEN: usize = 100;
const CUSTOMER_PHONE_MAX_LEN: usize = 20;

impl Entity for Order {
    type Id = OrderId;
    type CreatePayload = OrderCreate;
    type Patch = OrderPatch;

    const TABLE: &'static str = "order";

    fn id(&self) -> OrderId {
        self.id
    }

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// `created_at` is stamped here and is not part of [`OrderPatch`].
    fn from_create(id: OrderId, payload: OrderCreate) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            customer_name: fields::required_text("customer_name", payload.customer_name, Some(CUSTOMER_NAME_MAX_LEN))?,
            customer_email: Email::parse("customer_email", payload.customer_email)?,
            customer_phone: fields::optional_text("customer_phone", payload.customer_phone, Some(CUSTOMER_PHONE_MAX_LEN))?,
            address: fields::required_text("address", payload.address, None)?,
            created_at: Utc::now(),
            total_price: Money::new("total_price", payload.total_price)?,
            payment_details: payload.payment_details.trim().to_string(),
        })
    }

    fn on_update(&mut self, patch: OrderPatch) -> Result<(), ValidationError> {
        if let Some(name) = patch.customer_name {
            self.customer_name = fields::required_text("customer_name", name, Some(CUSTOMER_NAME_MAX_LEN))?;
        }
        if let Some(email) = patch.customer_email {
            self.customer_email = Email::parse("customer_email", email)?;
        }
        if let Some(phone) = patch.customer_phone {
            self.customer_phone = fields::optional_text("customer_phone", phone, Some(CUSTOMER_PHONE_MAX_LEN))?;
        }
        if let Some(address) = patch.address {
            self.address = fields::required_text("address", address, None)?;
        }
        if let Some(total_price) = patch.total_price {
            self.total_price = Money::new("total_price", total_price)?;
        }
        if let Some(details) = patch.payment_details {
            self.payment_details = details.trim().to_string();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn alice() -> OrderCreate {
        OrderCreate::new("Alice", "a@x.com", "1 Main St")
    }

    #[test]
    fn test_order_label_and_defaults() {
        let order = Order::from_create(OrderId(7), alice()).unwrap();
        assert_eq!(order.to_string(), "Order 7 by Alice");
        assert_eq!(order.total_price, Money::ZERO);
        assert_eq!(order.customer_phone, None);
        assert_eq!(order.payment_details, "");
    }

    #[test]
    fn test_order_rejects_invalid_fields() {
        let err = Order::from_create(OrderId(1), OrderCreate::new("Alice", "not-an-email", "1 Main St")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail { field: "customer_email" });

        let err = Order::from_create(OrderId(1), OrderCreate::new("Alice", "a@x.com", " ")).unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "address" });

        let err = Order::from_create(OrderId(1), alice().with_phone("1".repeat(21))).unwrap_err();
        assert_eq!(err.field(), "customer_phone");

        let err = Order::from_create(OrderId(1), alice().with_total_price(dec!(-5))).unwrap_err();
        assert_eq!(err, ValidationError::Negative { field: "total_price" });
    }

    #[test]
    fn test_update_keeps_created_at() {
        let mut order = Order::from_create(OrderId(1), alice().with_phone("555-0100")).unwrap();
        let created_at = order.created_at();

        order
            .on_update(OrderPatch {
                customer_name: Some("Alice Smith".into()),
                customer_phone: Some(None),
                total_price: Some(dec!(19.98)),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(order.created_at(), created_at);
        assert_eq!(order.customer_name, "Alice Smith");
        assert_eq!(order.customer_phone, None);
        assert_eq!(order.total_price.to_string(), "19.98");
    }
}

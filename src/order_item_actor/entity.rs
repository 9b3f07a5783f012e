use crate::actor_framework::Entity;
use crate::domain::fields::{self, Money};
use crate::domain::{OrderItem, OrderItemId};
use crate::error::ValidationError;
use super::dtos::{OrderItemCreate, OrderItemPatch};

impl Entity for OrderItem {
    type Id = OrderItemId;
    type CreatePayload = OrderItemCreate;
    type Patch = OrderItemPatch;

    const TABLE: &'static str = "order_item";

    fn id(&self) -> OrderItemId {
        self.id
    }

    /// Field checks only. Whether the referenced order and product exist is
    /// checked by `OrderItemClient` before the payload reaches the store.
    fn from_create(id: OrderItemId, payload: OrderItemCreate) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            order_id: payload.order_id,
            product_id: payload.product_id,
            quantity: fields::quantity("quantity", payload.quantity)?,
            price: Money::new("price", payload.price)?,
        })
    }

    fn on_update(&mut self, patch: OrderItemPatch) -> Result<(), ValidationError> {
        if let Some(quantity) = patch.quantity {
            self.quantity = fields::quantity("quantity", quantity)?;
        }
        if let Some(price) = patch.price {
            self.price = Money::new("price", price)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderId, Product, ProductId};
    use crate::product_actor::ProductCreate;
    use rust_decimal_macros::dec;

    fn payload(quantity: u32, price: rust_decimal::Decimal) -> OrderItemCreate {
        OrderItemCreate {
            order_id: OrderId(1),
            product_id: ProductId(1),
            quantity,
            price,
        }
    }

    #[test]
    fn test_item_label_and_line_total() {
        let mug = Product::from_create(ProductId(1), ProductCreate::new("Mug", dec!(9.99), 10)).unwrap();
        let item = OrderItem::from_create(OrderItemId(1), payload(2, dec!(9.99))).unwrap();

        assert_eq!(item.label(&mug).to_string(), "2 x Mug");
        assert_eq!(item.line_total(), dec!(19.98));
    }

    #[test]
    fn test_item_rejects_invalid_price() {
        let err = OrderItem::from_create(OrderItemId(1), payload(1, dec!(-9.99))).unwrap_err();
        assert_eq!(err, ValidationError::Negative { field: "price" });

        let err = OrderItem::from_create(OrderItemId(1), payload(1, dec!(0.001))).unwrap_err();
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn test_item_zero_quantity_is_allowed() {
        let item = OrderItem::from_create(OrderItemId(1), payload(0, dec!(1))).unwrap();
        assert_eq!(item.line_total(), dec!(0));
    }
}

use crate::actor_framework::Entity;
use crate::domain::fields::{self, ImageRef, Money};
use crate::domain::{Product, ProductId};
use crate::error::ValidationError;
use super::dtos::{ProductCreate, ProductPatch};

const NAME_MAX_LEN: usize = 100;

impl Entity for Product {
    type Id = ProductId;
    type CreatePayload = ProductCreate;
    type Patch = ProductPatch;

    const TABLE: &'static str = "product";

    fn id(&self) -> ProductId {
        self.id
    }

    /// Builds a product, checking every field of the payload.
    fn from_create(id: ProductId, payload: ProductCreate) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: fields::required_text("name", payload.name, Some(NAME_MAX_LEN))?,
            description: payload.description.trim().to_string(),
            price: Money::new("price", payload.price)?,
            quantity: fields::quantity("quantity", payload.quantity)?,
            image: payload.image.map(|path| ImageRef::new("image", path)).transpose()?,
        })
    }

    /// Updates any subset of the product's fields.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), ValidationError> {
        if let Some(name) = patch.name {
            self.name = fields::required_text("name", name, Some(NAME_MAX_LEN))?;
        }
        if let Some(description) = patch.description {
            self.description = description.trim().to_string();
        }
        if let Some(price) = patch.price {
            self.price = Money::new("price", price)?;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = fields::quantity("quantity", quantity)?;
        }
        if let Some(image) = patch.image {
            self.image = image.map(|path| ImageRef::new("image", path)).transpose()?;
        }
        Ok(())
    }
}

use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::clients::RelationLock;
use crate::domain::{OrderItem, OrderItemId, Product, ProductId};
use crate::product_actor::ProductError;

/// Client for interacting with the product table.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
    items: ResourceClient<OrderItem>,
    relations: RelationLock,
}

impl_basic_client!(ProductClient, Product, ProductId, ProductError, product, products);

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>, items: ResourceClient<OrderItem>, relations: RelationLock) -> Self {
        Self { inner, items, relations }
    }

    /// Deletes the product and every order item referencing it.
    ///
    /// Items go first, so if an actor fails midway the product may survive
    /// without its items but an item never outlives its product. Returns the
    /// ids of the removed order items.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<Vec<OrderItemId>, ProductError> {
        debug!("Sending request");
        let _guard = self.relations.lock().await;

        self.inner.get(id).await?.ok_or(ProductError::NotFound(id))?;
        let removed = self.items.delete_where(move |item: &OrderItem| item.product_id == id).await?;
        self.inner.delete(id).await.map_err(ProductError::for_id(id))?;

        info!(cascaded = removed.len(), "Product deleted");
        Ok(removed)
    }
}

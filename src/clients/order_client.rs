use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::clients::RelationLock;
use crate::domain::{Order, OrderId, OrderItem, OrderItemId, Product};
use crate::order_actor::{OrderError, OrderPatch};

/// Client for interacting with the order table.
///
/// Besides plain CRUD it answers questions about an order's items and the
/// products reached through them.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    items: ResourceClient<OrderItem>,
    products: ResourceClient<Product>,
    relations: RelationLock,
}

impl_basic_client!(OrderClient, Order, OrderId, OrderError, order, orders);

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        items: ResourceClient<OrderItem>,
        products: ResourceClient<Product>,
        relations: RelationLock,
    ) -> Self {
        Self {
            inner,
            items,
            products,
            relations,
        }
    }

    /// Deletes the order and every order item it owns.
    ///
    /// Items go first, so an item never outlives its order even if an actor
    /// fails midway. Returns the ids of the removed order items.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<Vec<OrderItemId>, OrderError> {
        debug!("Sending request");
        let _guard = self.relations.lock().await;

        self.require(id).await?;
        let removed = self.items.delete_where(move |item: &OrderItem| item.order_id == id).await?;
        self.inner.delete(id).await.map_err(OrderError::for_id(id))?;

        info!(cascaded = removed.len(), "Order deleted");
        Ok(removed)
    }

    /// Items of the order, ordered by item id.
    #[instrument(skip(self))]
    pub async fn order_items(&self, id: OrderId) -> Result<Vec<OrderItem>, OrderError> {
        debug!("Sending request");
        self.require(id).await?;
        Ok(self.items.list_where(move |item: &OrderItem| item.order_id == id).await?)
    }

    /// Distinct products reached through the order's items, ordered by
    /// product id.
    #[instrument(skip(self))]
    pub async fn order_products(&self, id: OrderId) -> Result<Vec<Product>, OrderError> {
        let product_ids: Vec<_> = self.order_items(id).await?.iter().map(|item| item.product_id).collect();
        Ok(self
            .products
            .list_where(move |product: &Product| product_ids.contains(&product.id))
            .await?)
    }

    /// Sum of `price × quantity` over the order's items.
    #[instrument(skip(self))]
    pub async fn items_total(&self, id: OrderId) -> Result<Decimal, OrderError> {
        let items = self.order_items(id).await?;
        Ok(items.iter().map(OrderItem::line_total).sum())
    }

    /// Whether the stored `total_price` equals [`items_total`](Self::items_total).
    #[instrument(skip(self))]
    pub async fn total_is_consistent(&self, id: OrderId) -> Result<bool, OrderError> {
        let order = self.require(id).await?;
        let total = self.items_total(id).await?;
        let consistent = order.total_price.amount() == total;
        if !consistent {
            warn!(stored = %order.total_price, items = %total, "Order total drifted from its items");
        }
        Ok(consistent)
    }

    /// Stores the items' sum as the order's `total_price`.
    #[instrument(skip(self))]
    pub async fn recalculate_total(&self, id: OrderId) -> Result<Order, OrderError> {
        let _guard = self.relations.lock().await;
        let total = self.items_total(id).await?;
        let patch = OrderPatch {
            total_price: Some(total),
            ..Default::default()
        };
        let order = self.inner.update(id, patch).await.map_err(OrderError::for_id(id))?;
        info!(total = %order.total_price, "Order total recalculated");
        Ok(order)
    }

    async fn require(&self, id: OrderId) -> Result<Order, OrderError> {
        self.inner.get(id).await?.ok_or(OrderError::NotFound(id))
    }
}

use tracing::{debug, error, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::clients::RelationLock;
use crate::domain::{Order, OrderId, OrderItem, OrderItemId, Product, ProductId};
use crate::order_item_actor::{OrderItemCreate, OrderItemError};

/// Client for interacting with the order item table.
///
/// Creation checks that the referenced order and product exist while holding
/// the relation lock, so neither can be deleted between the check and the
/// insert.
#[derive(Clone)]
pub struct OrderItemClient {
    inner: ResourceClient<OrderItem>,
    orders: ResourceClient<Order>,
    products: ResourceClient<Product>,
    relations: RelationLock,
}

impl_client_methods!(OrderItemClient, OrderItem, OrderItemId, OrderItemError, order_item, order_items);

impl OrderItemClient {
    pub fn new(
        inner: ResourceClient<OrderItem>,
        orders: ResourceClient<Order>,
        products: ResourceClient<Product>,
        relations: RelationLock,
    ) -> Self {
        Self {
            inner,
            orders,
            products,
            relations,
        }
    }

    #[instrument(skip(self))]
    pub async fn create_order_item(&self, payload: OrderItemCreate) -> Result<OrderItemId, OrderItemError> {
        info!("Processing create_order_item request");
        let _guard = self.relations.lock().await;

        // Step 1: Validate order
        self.require_order(payload.order_id).await?;
        // Step 2: Validate product
        self.require_product(payload.product_id).await?;

        // Step 3: Insert
        let id = self.inner.create(payload).await?;
        info!(order_item_id = %id, "Order item created");
        Ok(id)
    }

    /// Adds `quantity` units of a product to an order at the product's
    /// current price.
    #[instrument(skip(self))]
    pub async fn add_product(
        &self,
        order_id: OrderId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<OrderItemId, OrderItemError> {
        info!("Processing add_product request");
        let _guard = self.relations.lock().await;

        self.require_order(order_id).await?;
        let product = self.require_product(product_id).await?;

        let payload = OrderItemCreate {
            order_id,
            product_id,
            quantity,
            price: product.price.amount(),
        };
        let id = self.inner.create(payload).await?;
        info!(order_item_id = %id, price = %product.price, "Order item created");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn delete_order_item(&self, id: OrderItemId) -> Result<(), OrderItemError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(OrderItemError::for_id(id))
    }

    /// Items referencing the product, ordered by item id.
    #[instrument(skip(self))]
    pub async fn items_for_product(&self, product_id: ProductId) -> Result<Vec<OrderItem>, OrderItemError> {
        debug!("Sending request");
        Ok(self
            .inner
            .list_where(move |item: &OrderItem| item.product_id == product_id)
            .await?)
    }

    /// Human-readable label of the item, e.g. `"2 x Mug"`.
    #[instrument(skip(self))]
    pub async fn label(&self, id: OrderItemId) -> Result<String, OrderItemError> {
        let item = self.inner.get(id).await?.ok_or(OrderItemError::NotFound(id))?;
        let product = self.require_product(item.product_id).await?;
        Ok(item.label(&product).to_string())
    }

    async fn require_order(&self, id: OrderId) -> Result<Order, OrderItemError> {
        match self.orders.get(id).await? {
            Some(order) => Ok(order),
            None => {
                error!(order_id = %id, "Order not found");
                Err(OrderItemError::InvalidOrder(id))
            }
        }
    }

    async fn require_product(&self, id: ProductId) -> Result<Product, OrderItemError> {
        match self.products.get(id).await? {
            Some(product) => Ok(product),
            None => {
                error!(product_id = %id, "Product not found");
                Err(OrderItemError::InvalidProduct(id))
            }
        }
    }
}

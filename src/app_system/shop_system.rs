use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info};

use super::config::ShopConfig;
use super::error::SystemError;
use super::snapshot::ShopSnapshot;
use crate::actor_framework::ResourceActor;
use crate::clients::{OrderClient, OrderItemClient, ProductClient, RelationLock};
use crate::domain::{Order, OrderId, OrderItem, OrderItemId, Product, ProductId};

/// Id generator handing out 1, 2, 3, ...
fn sequence<I>(wrap: fn(u64) -> I) -> impl Fn() -> I + Send + Sync + 'static
where
    I: 'static,
{
    let counter = Arc::new(AtomicU64::new(1));
    move || wrap(counter.fetch_add(1, Ordering::SeqCst))
}

/// The running shop: one actor per table and the clients wired to them.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct ShopSystem {
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    pub order_item_client: OrderItemClient,
    relations: RelationLock,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Starts the table actors. Must be called inside a tokio runtime.
    pub fn new(config: &ShopConfig) -> Self {
        info!(actor_buffer = config.actor_buffer, "Starting shop system");

        let (product_actor, products) = ResourceActor::<Product>::new(config.actor_buffer, sequence(ProductId));
        let (order_actor, orders) = ResourceActor::<Order>::new(config.actor_buffer, sequence(OrderId));
        let (item_actor, items) = ResourceActor::<OrderItem>::new(config.actor_buffer, sequence(OrderItemId));

        let handles = vec![
            tokio::spawn(product_actor.run()),
            tokio::spawn(order_actor.run()),
            tokio::spawn(item_actor.run()),
        ];

        let relations: RelationLock = Arc::new(Mutex::new(()));
        let product_client = ProductClient::new(products.clone(), items.clone(), relations.clone());
        let order_client = OrderClient::new(orders.clone(), items.clone(), products.clone(), relations.clone());
        let order_item_client = OrderItemClient::new(items, orders, products, relations.clone());

        Self {
            product_client,
            order_client,
            order_item_client,
            relations,
            handles,
        }
    }

    /// Current contents of every table.
    ///
    /// Holds the relation lock while reading, so no cascade runs between the
    /// three reads.
    pub async fn snapshot(&self) -> Result<ShopSnapshot, SystemError> {
        let _guard = self.relations.lock().await;
        let product = self.product_client.list_products().await.map_err(|e| SystemError::Store(e.to_string()));
        let order = self.order_client.list_orders().await.map_err(|e| SystemError::Store(e.to_string()));
        let order_item = self
            .order_item_client
            .list_order_items()
            .await
            .map_err(|e| SystemError::Store(e.to_string()));
        Ok(ShopSnapshot {
            product: product?,
            order: order?,
            order_item: order_item?,
        })
    }

    /// Drops the clients and waits for the actors to drain.
    ///
    /// Clones of the clients held elsewhere keep their actors alive, so drop
    /// them first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        // Actors stop once every client holding their channel is dropped.
        drop(self.product_client);
        drop(self.order_client);
        drop(self.order_item_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::Shutdown(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

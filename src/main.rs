use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

use shop_catalog::app_system::{setup_tracing, ShopConfig, ShopSystem};
use shop_catalog::order_actor::OrderCreate;
use shop_catalog::product_actor::ProductCreate;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ShopConfig::from_env()?;
    setup_tracing(&config);

    info!("Starting shop catalog demo");

    let system = ShopSystem::new(&config);

    let mug = system
        .product_client
        .create_product(ProductCreate::new("Mug", Decimal::new(999, 2), 10).with_image("mug.png"))
        .await?;
    info!(product_id = %mug, "Product created successfully");

    let order = system
        .order_client
        .create_order(OrderCreate::new("Alice", "a@x.com", "1 Main St"))
        .await?;

    let span = tracing::info_span!("checkout", order_id = %order);
    let checkout = async {
        let item = system.order_item_client.add_product(order, mug, 2).await?;
        let label = system.order_item_client.label(item).await?;
        info!(%label, "Order item added");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await;
    if let Err(e) = checkout {
        error!(error = %e, "Checkout failed");
    }

    let order_row = system.order_client.recalculate_total(order).await?;
    info!(order = %order_row, total = %order_row.total_price, "Order total recalculated");

    let removed = system.product_client.delete_product(mug).await?;
    info!(removed = removed.len(), "Product deleted with its order items");

    println!("{}", system.snapshot().await?.to_json()?);

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}

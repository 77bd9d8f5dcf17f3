use crate::assistant::CartAssistant;
use crate::clients::{CartClient, OrderClient, ProductClient};
use crate::config::{ConfigError, StorefrontConfig};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The running storefront: catalog, cart and order actors plus the assistant wired on top.
///
/// # Architecture
///
/// - **Product actor**: the catalog and its stock counters
/// - **Cart actor**: one cart per user session; checks out through an injected `OrderClient`
/// - **Order actor**: places orders; reserves stock through an injected `ProductClient`
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::start(StorefrontConfig::from_env()?)?;
/// seed_catalog(&storefront.products).await?;
///
/// let reply = storefront
///     .assistant
///     .handle_call(&UserId::anonymous(), "getCart", json!({}))
///     .await;
///
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    pub products: ProductClient,
    pub carts: CartClient,
    pub orders: OrderClient,
    pub assistant: CartAssistant,
    pub config: StorefrontConfig,
    handles: Vec<JoinHandle<()>>,
}

impl Storefront {
    /// Spawns every actor and wires the dependencies. Must be called inside a tokio runtime.
    pub fn start(config: StorefrontConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let buffer = config.channel_buffer;

        let (product_actor, products) = crate::product_actor::new(buffer);
        let (cart_actor, carts) = crate::cart_actor::new(buffer);
        let (order_actor, orders) = crate::order_actor::new(buffer);

        let product_handle = tokio::spawn(product_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(orders.clone()));
        let order_handle = tokio::spawn(order_actor.run(products.clone()));

        let assistant = CartAssistant::new(products.clone(), carts.clone(), config.clone());
        info!(?config, "Storefront started");

        Ok(Self {
            products,
            carts,
            orders,
            assistant,
            config,
            handles: vec![cart_handle, order_handle, product_handle],
        })
    }

    /// Drops every client this storefront owns and waits for the actors to drain.
    ///
    /// Actors only stop once *all* clients are gone, so clones handed out earlier must be
    /// dropped first or this will wait for them. Actors stop in dependency order: carts hold
    /// an `OrderClient` and the order actor holds a `ProductClient`, so the catalog stops
    /// last.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down storefront...");
        drop(self.assistant);
        drop(self.orders);
        drop(self.carts);
        drop(self.products);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}

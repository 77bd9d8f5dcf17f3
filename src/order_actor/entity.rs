//! Entity trait implementation for the Order domain type.
//!
//! Placing an order is the only place stock is actually taken out of the catalog: the
//! create hook reserves every line through the injected [`ProductClient`] and puts back what
//! it already took if a later line fails.

use super::error::OrderError;
use crate::clients::ProductClient;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, ProductId};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::{error, info, warn};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderStatus;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ProductClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        Order::new(id, params.user_id, params.lines)
    }

    /// Reserves stock for every line, then marks the order confirmed.
    async fn on_create(&mut self, products: &ProductClient) -> Result<(), Self::Error> {
        let mut reserved: Vec<(ProductId, u32)> = Vec::with_capacity(self.lines.len());

        for line in &self.lines {
            if let Err(e) = products
                .reserve_stock(line.product_id.clone(), line.quantity)
                .await
            {
                warn!(order_id = %self.id, product_id = %line.product_id, error = %e, "Reservation failed, rolling back");
                for (product_id, quantity) in reserved {
                    if let Err(release) = products.release_stock(product_id.clone(), quantity).await {
                        error!(order_id = %self.id, %product_id, quantity, error = %release, "Rollback failed");
                    }
                }
                return Err(match e {
                    ProductError::InsufficientStock {
                        requested,
                        available,
                    } => OrderError::InsufficientStock {
                        product_id: line.product_id.to_string(),
                        requested,
                        available,
                    },
                    other => OrderError::Product(other),
                });
            }
            reserved.push((line.product_id.clone(), line.quantity));
        }

        self.status = OrderStatus::Confirmed;
        info!(order_id = %self.id, lines = self.lines.len(), total = %self.total, "Order confirmed");
        Ok(())
    }

    async fn on_update(&mut self, next: OrderStatus, _ctx: &ProductClient) -> Result<(), Self::Error> {
        if !self.status.can_advance_to(next) {
            return Err(OrderError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &ProductClient) -> Result<(), Self::Error> {
        match action {}
    }
}

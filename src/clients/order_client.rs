//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! Stock reservation happens in the Order actor's `on_create` hook; this client only assigns
//! order ids and turns cart snapshots into order payloads.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{CartSnapshot, Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    next_id: Arc<AtomicU64>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self {
            inner,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    fn next_order_id(&self) -> OrderId {
        OrderId::from(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Places an order for everything in `cart`.
    ///
    /// Fails with [`OrderError::EmptyCart`] for an empty cart and with
    /// [`OrderError::InsufficientStock`] when any line cannot be reserved; in both cases the
    /// catalog is left as it was.
    #[instrument(skip(self, cart), fields(user_id = %cart.user_id))]
    pub async fn place_order(&self, cart: &CartSnapshot) -> Result<Order, OrderError> {
        let params = OrderCreate::from(cart);
        debug!(?params, "place_order called");
        let id = self.next_order_id();
        info!(order_id = %id, "Sending place_order to actor");

        let id = self
            .inner
            .create(id, params)
            .await
            .map_err(Self::map_error)?;
        self.order(id).await
    }

    #[instrument(skip(self))]
    pub async fn order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Moves an order forward (`confirmed` → `shipped` → `delivered`).
    #[instrument(skip(self))]
    pub async fn advance_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        self.inner.update(id, status).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::{OrderLine, ProductId, UserId};
    use rust_decimal::Decimal;

    fn confirmed(id: OrderId) -> Order {
        let line = OrderLine {
            product_id: ProductId::parse("1").unwrap(),
            name: "Widget".into(),
            unit_price: Decimal::from(10),
            quantity: 2,
        };
        let mut order = Order::new(id, UserId::new("alice"), vec![line]).unwrap();
        order.status = OrderStatus::Confirmed;
        order
    }

    #[tokio::test]
    async fn test_order_ids_are_sequential() {
        let mut mock = MockClient::<Order>::new();
        for n in 1..=2u64 {
            mock.expect_create(OrderId::from(n))
                .return_ok(OrderId::from(n));
            mock.expect_get(OrderId::from(n))
                .return_ok(Some(confirmed(OrderId::from(n))));
        }
        let orders = OrderClient::new(mock.client());
        let mut cart = crate::model::Cart::new(UserId::new("alice"));
        let widget = crate::model::Product::new(
            ProductId::parse("1").unwrap(),
            "Widget",
            Decimal::from(10),
            5,
        );
        let snapshot = cart.add_item(widget, 2).unwrap();

        let first = orders.place_order(&snapshot).await.unwrap();
        let second = orders.clone().place_order(&snapshot).await.unwrap();
        assert_eq!(first.id.as_str(), "order_1");
        assert_eq!(second.id.as_str(), "order_2");
        assert_eq!(first.total, Decimal::from(20));
        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_errors_are_recovered() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create(OrderId::from(1))
            .return_err(FrameworkError::EntityError(Box::new(OrderError::EmptyCart)));
        let orders = OrderClient::new(mock.client());

        let empty = CartSnapshot::empty(UserId::new("alice"));
        assert_eq!(orders.place_order(&empty).await, Err(OrderError::EmptyCart));
        mock.verify();
    }
}

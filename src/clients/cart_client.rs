//! # Cart Client
//!
//! Session-facing API over the cart actor. A cart is opened lazily by the first add, so
//! callers never have to create one explicitly; reads and non-adding mutations on a cart
//! that was never opened answer with an empty snapshot instead of an error.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Cart, CartSnapshot, Order, Product, ProductId, UserId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<CartError>() {
            Ok(err) => err,
            Err(other) => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("unexpected action result {:?}", result))
}

fn into_snapshot(result: CartActionResult) -> Result<CartSnapshot, CartError> {
    match result {
        CartActionResult::Snapshot(snapshot) => Ok(snapshot),
        other => Err(unexpected(other)),
    }
}

impl CartClient {
    /// Starts a session cart for `user_id`. Opening an already open cart is fine.
    #[instrument(skip(self))]
    pub async fn open(&self, user_id: UserId) -> Result<(), CartError> {
        match self.inner.create(user_id, ()).await {
            Ok(_) | Err(FrameworkError::AlreadyExists(_)) => Ok(()),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Sends `action`, opening the cart first if it does not exist yet.
    async fn act_or_open(
        &self,
        user_id: UserId,
        action: CartAction,
    ) -> Result<CartSnapshot, CartError> {
        let result = match self
            .inner
            .perform_action(user_id.clone(), action.clone())
            .await
        {
            Err(FrameworkError::NotFound(_)) => {
                debug!(%user_id, "Opening cart");
                self.open(user_id.clone()).await?;
                self.inner.perform_action(user_id, action).await
            }
            other => other,
        };
        result.map_err(Self::map_error).and_then(into_snapshot)
    }

    /// Sends `action` to an existing cart. A missing cart has nothing to change.
    async fn act_if_open(
        &self,
        user_id: UserId,
        action: CartAction,
    ) -> Result<CartSnapshot, CartError> {
        match self.inner.perform_action(user_id.clone(), action).await {
            Err(FrameworkError::NotFound(_)) => Ok(CartSnapshot::empty(user_id)),
            other => other.map_err(Self::map_error).and_then(into_snapshot),
        }
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_item(
        &self,
        user_id: UserId,
        product: Product,
        quantity: i64,
    ) -> Result<CartSnapshot, CartError> {
        self.act_or_open(user_id, CartAction::AddItem { product, quantity })
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<CartSnapshot, CartError> {
        self.act_if_open(user_id, CartAction::RemoveItem(product_id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartSnapshot, CartError> {
        self.act_if_open(
            user_id,
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, user_id: UserId) -> Result<CartSnapshot, CartError> {
        self.act_if_open(user_id, CartAction::Clear).await
    }

    /// Places an order for everything in the cart and empties it.
    ///
    /// The cart actor does both in one turn: no other change to this cart can land in
    /// between, and on failure the cart is left as it was. A cart that was never opened
    /// fails with [`OrderError::EmptyCart`].
    #[instrument(skip(self))]
    pub async fn checkout(&self, user_id: UserId) -> Result<Order, CartError> {
        match self.inner.perform_action(user_id, CartAction::Checkout).await {
            Ok(CartActionResult::Ordered(order)) => Ok(order),
            Ok(other) => Err(unexpected(other)),
            Err(FrameworkError::NotFound(_)) => Err(OrderError::EmptyCart.into()),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_cart(&self, user_id: UserId) -> Result<CartSnapshot, CartError> {
        Ok(match self.get(user_id.clone()).await? {
            Some(cart) => cart.snapshot(),
            None => CartSnapshot::empty(user_id),
        })
    }

    /// Ends the session: the cart is dropped from the store. Discarding twice is fine.
    #[instrument(skip(self))]
    pub async fn discard(&self, user_id: UserId) -> Result<(), CartError> {
        match self.inner.delete(user_id).await {
            Ok(()) | Err(FrameworkError::NotFound(_)) => Ok(()),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use rust_decimal::Decimal;

    fn alice() -> UserId {
        UserId::new("alice")
    }

    fn widget() -> Product {
        Product::new(ProductId::parse("1").unwrap(), "Widget", Decimal::from(10), 5)
    }

    fn snapshot_with(quantity: u32) -> CartSnapshot {
        let mut cart = Cart::new(alice());
        cart.add_item(widget(), i64::from(quantity)).unwrap()
    }

    #[tokio::test]
    async fn test_first_add_opens_the_cart() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(alice())
            .return_err(FrameworkError::NotFound("alice".into()));
        mock.expect_create(alice()).return_ok(alice());
        mock.expect_action(alice())
            .return_ok(CartActionResult::Snapshot(snapshot_with(2)));
        let carts = CartClient::new(mock.client());

        let snap = carts.add_item(alice(), widget(), 2).await.unwrap();
        assert_eq!(snap.total, Decimal::from(20));
        mock.verify();
    }

    #[tokio::test]
    async fn test_concurrent_open_is_tolerated() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_create(alice())
            .return_err(FrameworkError::AlreadyExists("alice".into()));
        let carts = CartClient::new(mock.client());

        assert!(carts.open(alice()).await.is_ok());
        mock.verify();
    }

    #[tokio::test]
    async fn test_mutations_on_unopened_cart_are_noops() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(alice())
            .return_err(FrameworkError::NotFound("alice".into()));
        mock.expect_get(alice()).return_ok(None);
        mock.expect_delete(alice())
            .return_err(FrameworkError::NotFound("alice".into()));
        let carts = CartClient::new(mock.client());

        let snap = carts.clear(alice()).await.unwrap();
        assert_eq!(snap, CartSnapshot::empty(alice()));
        let snap = carts.get_cart(alice()).await.unwrap();
        assert!(snap.is_empty());
        assert!(carts.discard(alice()).await.is_ok());
        mock.verify();
    }

    #[tokio::test]
    async fn test_engine_errors_keep_their_type() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(alice())
            .return_err(FrameworkError::EntityError(Box::new(
                CartError::InvalidQuantity(0),
            )));
        let carts = CartClient::new(mock.client());

        let err = carts.add_item(alice(), widget(), 0).await.unwrap_err();
        assert_eq!(err, CartError::InvalidQuantity(0));
        mock.verify();
    }

    #[tokio::test]
    async fn test_checkout_of_unopened_cart_is_an_empty_cart() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(alice())
            .return_err(FrameworkError::NotFound("alice".into()));
        mock.expect_action(alice())
            .return_ok(CartActionResult::Snapshot(snapshot_with(1)));
        let carts = CartClient::new(mock.client());

        assert_eq!(
            carts.checkout(alice()).await,
            Err(CartError::Order(OrderError::EmptyCart))
        );
        let err = carts.checkout(alice()).await.unwrap_err();
        assert!(matches!(err, CartError::ActorCommunicationError(_)));
        mock.verify();
    }
}

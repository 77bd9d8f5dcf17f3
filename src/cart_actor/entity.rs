//! [`ActorEntity`] implementation for [`Cart`].
//!
//! Carts are keyed by the session's [`UserId`] and created empty. There is no update
//! payload: a cart only changes through [`CartAction`]s, which forward to the engine.
//!
//! Checkout runs inside the action handler with the injected [`OrderClient`]. No other
//! request reaches the cart while the order is placed, so nothing added meanwhile can be
//! cleared without being ordered, and a failed order leaves the cart as it was.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::clients::OrderClient;
use crate::framework::ActorEntity;
use crate::model::{Cart, UserId};
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::info;

#[async_trait]
impl ActorEntity for Cart {
    type Id = UserId;
    type Create = ();
    type Update = Infallible;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = OrderClient;
    type Error = CartError;

    fn from_create_params(id: UserId, _params: ()) -> Result<Self, Self::Error> {
        Ok(Cart::new(id))
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &OrderClient) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        orders: &OrderClient,
    ) -> Result<CartActionResult, Self::Error> {
        let snapshot = match action {
            CartAction::AddItem { product, quantity } => self.add_item(product, quantity)?,
            CartAction::RemoveItem(product_id) => self.remove_item(&product_id),
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => self.update_quantity(&product_id, quantity)?,
            CartAction::Clear => self.clear(),
            CartAction::Checkout => {
                let order = orders.place_order(&self.snapshot()).await?;
                self.clear();
                info!(user_id = %self.user_id(), order_id = %order.id, "Cart checked out");
                return Ok(CartActionResult::Ordered(order));
            }
        };
        Ok(CartActionResult::Snapshot(snapshot))
    }
}

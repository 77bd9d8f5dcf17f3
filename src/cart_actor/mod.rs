//! # Cart Actor
//!
//! Holds one [`Cart`](crate::model::Cart) per [`UserId`](crate::model::UserId). All carts
//! share a single actor task, so mutations on one cart are applied strictly one after the
//! other no matter how many tasks send them.
//!
//! Checkout runs inside that same turn: the actor places the order through its
//! [`OrderClient`](crate::clients::OrderClient) context and empties the cart only once the
//! order is confirmed, so no add can slip in between the two steps.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::Cart;

/// Creates a new cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CartClient::new(generic_client))
}

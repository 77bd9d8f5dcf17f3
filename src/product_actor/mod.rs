//! # Product Actor
//!
//! The catalog: a `ResourceActor<Product>` keyed by [`ProductId`](crate::model::ProductId).
//! Besides CRUD it owns the stock counters, changed only through [`ProductAction`]s.
//!
//! ```rust,ignore
//! let (actor, client) = product_actor::new(32);
//! tokio::spawn(actor.run(()));
//!
//! client.add_product(ProductId::parse("1")?, params).await?;
//! client.reserve_stock(ProductId::parse("1")?, 2).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::Product;

/// Creates a new catalog actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}

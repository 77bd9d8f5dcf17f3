//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! The rest of the crate never builds a `ResourceRequest` by hand; it goes through
//! [`ProductClient`], [`CartClient`] and [`OrderClient`].

pub mod actor_client;
pub mod cart_client;
pub mod order_client;
pub mod product_client;

pub use actor_client::*;
pub use cart_client::*;
pub use order_client::*;
pub use product_client::*;

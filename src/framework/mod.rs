//! Generic actor plumbing shared by the catalog, cart and order actors.
//!
//! - [`ActorEntity`]: what a resource must implement to live inside an actor
//! - [`ResourceActor`]: owns a store of entities and processes requests sequentially
//! - [`ResourceClient`]: cloneable async handle used to talk to an actor
//! - [`FrameworkError`]: errors at the actor boundary
//!
//! See [`mock`] for test doubles.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};

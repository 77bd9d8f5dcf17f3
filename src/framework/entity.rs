//! # ActorEntity Trait
//!
//! The contract every storefront resource (Product, Cart, Order) implements so that a
//! generic [`ResourceActor`](crate::framework::ResourceActor) can own it.
//!
//! Unlike a database-style store, ids are never minted by the actor: a cart is keyed by the
//! session's user id, a product by its catalog id, an order by the id the order client
//! assigns. The caller supplies the id with every `Create`.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any storefront resource must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so they may call other actors. The `Context` type is injected into every
/// hook at `run()` time (the order actor receives a `ProductClient` this way).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Caller-assigned key (e.g. `UserId` for carts, `ProductId` for products).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Payload used to build a new instance.
    type Create: Send + Sync + Debug;

    /// Payload used to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `ReserveStock`, `AddItem`).
    type Action: Send + Sync + Debug;

    /// Result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor. Use `()` if none.
    type Context: Send + Sync;

    /// Per-actor error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the entity from its id and payload. Called before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before the entity is stored. An error aborts the create.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

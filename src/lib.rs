//! # Storefront Cart
//!
//! A storefront back end built from resource actors: a product catalog, one shopping cart
//! per user session, checkout, and the typed command surface a conversational assistant
//! drives.
//!
//! ## Architecture Notes
//!
//! ### 1. The Cart Engine
//! [`model::Cart`] is a plain owned value: line items unique by product id and a total that
//! is recomputed after every mutation. It never checks stock and never talks to the catalog.
//!
//! ### 2. Single Writer per Cart
//! All carts live in one [`ResourceActor`](framework::ResourceActor) task that handles
//! requests one at a time, so concurrent mutations of the same cart never interleave.
//!
//! ### 3. Type-Safe Error Handling
//! Each actor defines its own error type (`ProductError`, `CartError`, `OrderError`). Errors
//! raised inside an actor cross the channel boxed in
//! [`FrameworkError`](framework::FrameworkError) and are downcast back by the clients.
//!
//! ### 4. Async Context Injection
//! Dependencies are injected at `run()` time: the order actor receives a
//! [`ProductClient`](clients::ProductClient) so checkout can reserve stock.
//!
//! ### 5. Observability
//! `tracing` everywhere; see [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic actor, client, messages and mocks
//! - [`model`]: products, carts, orders and their ids
//! - [`product_actor`], [`cart_actor`], [`order_actor`]: the `ActorEntity` implementations
//! - [`clients`]: typed wrappers over `ResourceClient`
//! - [`assistant`]: `CartCommand`, `CartAssistant::dispatch`, `ActionResponse`
//! - [`lifecycle`]: [`Storefront`](lifecycle::Storefront) start/shutdown, demo catalog, tracing
//! - [`config`]: [`StorefrontConfig`](config::StorefrontConfig)
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod assistant;
pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;

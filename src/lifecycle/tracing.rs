//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by `RUST_LOG`.
//! Module paths are hidden (`with_target(false)`); the framework tags every actor event with
//! an `entity_type` field (`Product`, `Cart`, `Order`) instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started`, `Shutdown` with the final store size
//! - **Entity operations**: `Created`, `Get`, `List`, `Updated`, `Deleted`, `Action ok` /
//!   `Action failed`
//! - **Assistant**: one `dispatch` span per command with an `action` field, ending in
//!   `Action done` or `Action failed`
//! - **Checkout**: reservation failures and rollbacks in the order actor
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! # payloads (command arguments, create params, cart actions)
//! RUST_LOG=debug cargo run
//!
//! # just the assistant layer
//! RUST_LOG=storefront_cart::assistant=debug cargo run
//! ```
//!
//! ## Checkout Trace
//!
//! With `RUST_LOG=info`:
//!
//! ```text
//! INFO dispatch:place_order: Sending place_order to actor action="checkout" order_id=order_1
//! INFO Action ok entity_type="Product" id=1
//! INFO Order confirmed order_id=order_1 lines=1 total=2599.98
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO Action ok entity_type="Cart" id=anonymous
//! INFO dispatch: Action done action="checkout" message=Order order_1 confirmed, total 2599.98
//! ```
//!
//! Actor events carry no request span: each actor runs in its own task.

/// Installs the global subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

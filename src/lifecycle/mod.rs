//! Starting, seeding, observing and stopping the storefront.

pub mod seed;
pub mod storefront;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use seed::{demo_catalog, seed_catalog};
pub use storefront::Storefront;

//! Error types for the assistant layer.
//!
//! Nothing here escapes [`CartAssistant::dispatch`](super::CartAssistant::dispatch): every
//! variant ends up as the `message` of a failed `ActionResponse`.

use crate::cart_actor::CartError;
use crate::model::InvalidProductId;
use crate::product_actor::ProductError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AssistantError {
    /// The call named an action that does not exist.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// The arguments did not fit the action's schema.
    #[error("Invalid arguments for {action}: {reason}")]
    InvalidArguments { action: String, reason: String },

    #[error(transparent)]
    InvalidProductId(#[from] InvalidProductId),

    /// The cart would hold more units than the catalog has.
    #[error("Only {stock} x {name} in stock")]
    StockExceeded { name: String, stock: u32 },

    /// `analyzeReviews` on a product nobody reviewed.
    #[error("No customer reviews for {name}")]
    NoReviews { name: String },

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Cart(#[from] CartError),
}

//! Error types for the cart actor.

use crate::order_actor::OrderError;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// `add_item` with a quantity ≤ 0, or one that would overflow the line's counter.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Price × quantity, or the sum of the lines, does not fit in a `Decimal`.
    #[error("Cart total out of range")]
    TotalOverflow,

    /// Checkout failed; the cart was left as it was.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}

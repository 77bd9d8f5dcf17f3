//! Error types for the catalog actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product is not in the catalog.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A product with this id is already in the catalog.
    #[error("Product already exists: {0}")]
    AlreadyExists(String),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// The product data failed validation (empty name, negative price, ...).
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// Zero units, or a release that would overflow the stock counter.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}

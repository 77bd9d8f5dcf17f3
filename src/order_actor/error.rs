//! Error types for the Order actor.

use crate::model::OrderStatus;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Checkout was attempted with no lines.
    #[error("Cannot place an order for an empty cart")]
    EmptyCart,

    /// A line asks for more units than the catalog holds.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: String,
        requested: u32,
        available: u32,
    },

    /// The lines add up to more than a `Decimal` can hold.
    #[error("Order total out of range")]
    TotalOverflow,

    /// Status changes only move forward.
    #[error("Cannot move order from {from} to {to}")]
    InvalidStatusTransition { from: OrderStatus, to: OrderStatus },

    /// Any other failure reported by the catalog.
    #[error(transparent)]
    Product(#[from] ProductError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

//! Cart mutations, one action per engine operation, plus checkout.

use crate::model::{CartSnapshot, Order, Product, ProductId};

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Adds `quantity` units of `product`, merging into an existing line.
    AddItem { product: Product, quantity: i64 },
    RemoveItem(ProductId),
    /// Sets a line's quantity; ≤ 0 removes it.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    Clear,
    /// Orders everything in the cart and empties it, in one turn of the actor.
    Checkout,
}

/// What a [`CartAction`] answers with.
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// The cart after the mutation.
    Snapshot(CartSnapshot),
    /// The order placed by `Checkout`.
    Ordered(Order),
}

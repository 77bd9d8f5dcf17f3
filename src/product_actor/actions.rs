//! Custom actions for the catalog actor.
//!
//! Stock is only touched through these actions; see `entity.rs` for how each one is applied
//! to a [`Product`](crate::model::Product).

/// Stock operations on a single product.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Reads the current stock level.
    CheckStock,
    /// Takes units out of stock. Fails without side effects if fewer are available.
    ReserveStock(u32),
    /// Puts previously reserved units back.
    ReleaseStock(u32),
}

/// Results from [`ProductAction`]s, one variant per action.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    CheckStock(u32),
    Reserved { remaining: u32 },
    Released { remaining: u32 },
}

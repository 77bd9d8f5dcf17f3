//! # Cart Engine
//!
//! [`Cart`] is the shopping cart of one session: line items unique by product id and a
//! `total` that is recomputed from scratch after every mutation. It never talks to the
//! catalog or checks stock; callers hand it the product data they want it to hold.
//!
//! | operation | absent product | quantity ≤ 0 |
//! |---|---|---|
//! | [`add_item`](Cart::add_item) | inserts a line | rejected, cart untouched |
//! | [`update_quantity`](Cart::update_quantity) | no-op | removes the line |
//! | [`remove_item`](Cart::remove_item) | no-op | n/a |

use crate::cart_actor::CartError;
use crate::model::{Product, ProductId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product and how many units of it are in the cart. `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product: Product,
    pub quantity: u32,
}

impl LineItem {
    /// `price × quantity`, or `None` when it does not fit in a `Decimal`.
    pub fn subtotal(&self) -> Option<Decimal> {
        line_total(self.product.price, self.quantity)
    }
}

fn line_total(price: Decimal, quantity: u32) -> Option<Decimal> {
    price.checked_mul(Decimal::from(quantity))
}

/// The cart of a single user session.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    user_id: UserId,
    items: Vec<LineItem>,
    total: Decimal,
}

impl Cart {
    /// An empty cart owned by `user_id`.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Line items in the order they were first added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn quantity_of(&self, product_id: &ProductId) -> Option<u32> {
        self.position(product_id).map(|idx| self.items[idx].quantity)
    }

    /// Adds `quantity` units of `product`.
    ///
    /// An existing line keeps its product data and has its quantity increased; otherwise a
    /// new line is appended. Fails with [`CartError::InvalidQuantity`] when `quantity` is
    /// not positive or the line would exceed `u32::MAX` units, and with
    /// [`CartError::TotalOverflow`] when the new total does not fit. The cart is untouched on
    /// failure.
    pub fn add_item(&mut self, product: Product, quantity: i64) -> Result<CartSnapshot, CartError> {
        let units = positive_units(quantity)?;

        match self.position(&product.id) {
            Some(idx) => {
                let line = &self.items[idx];
                let merged = line
                    .quantity
                    .checked_add(units)
                    .ok_or(CartError::InvalidQuantity(quantity))?;
                self.total = self.total_with(idx, line.product.price, merged)?;
                self.items[idx].quantity = merged;
            }
            None => {
                self.total = self.total_with(self.items.len(), product.price, units)?;
                self.items.push(LineItem {
                    product,
                    quantity: units,
                });
            }
        }

        Ok(self.snapshot())
    }

    /// Drops the line for `product_id`. Absent ids are a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) -> CartSnapshot {
        if let Some(idx) = self.position(product_id) {
            self.items.remove(idx);
            self.settle_total();
        }
        self.snapshot()
    }

    /// Sets the line for `product_id` to exactly `quantity` units.
    ///
    /// `quantity <= 0` removes the line. A product that is not in the cart is left out:
    /// this never creates a line. Quantities above `u32::MAX` are rejected, as is a
    /// quantity whose total does not fit.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<CartSnapshot, CartError> {
        if quantity <= 0 {
            return Ok(self.remove_item(product_id));
        }
        let units = positive_units(quantity)?;

        if let Some(idx) = self.position(product_id) {
            self.total = self.total_with(idx, self.items[idx].product.price, units)?;
            self.items[idx].quantity = units;
        }

        Ok(self.snapshot())
    }

    /// Empties the cart. Idempotent.
    pub fn clear(&mut self) -> CartSnapshot {
        self.items.clear();
        self.total = Decimal::ZERO;
        self.snapshot()
    }

    /// Read-only view of the current state.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.iter().map(SnapshotItem::from).collect(),
            total: self.total,
            user_id: self.user_id.clone(),
        }
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| &item.product.id == product_id)
    }

    /// Total of every line, with line `idx` counted as `quantity` units of `price`. An `idx`
    /// past the last line counts as one more line.
    fn total_with(&self, idx: usize, price: Decimal, quantity: u32) -> Result<Decimal, CartError> {
        let changed = line_total(price, quantity).ok_or(CartError::TotalOverflow)?;
        let others = self
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .try_fold(Decimal::ZERO, |acc, (_, item)| acc.checked_add(item.subtotal()?));
        others
            .and_then(|sum| sum.checked_add(changed))
            .ok_or(CartError::TotalOverflow)
    }

    /// Recomputes the total after lines were dropped. A subset of lines that once summed in
    /// range still does, so saturation is never observed for non-negative prices.
    fn settle_total(&mut self) {
        self.total = self.items.iter().fold(Decimal::ZERO, |acc, item| {
            acc.saturating_add(
                item.product
                    .price
                    .saturating_mul(Decimal::from(item.quantity)),
            )
        });
    }
}

fn positive_units(quantity: i64) -> Result<u32, CartError> {
    if quantity <= 0 {
        return Err(CartError::InvalidQuantity(quantity));
    }
    u32::try_from(quantity).map_err(|_| CartError::InvalidQuantity(quantity))
}

/// One line of a [`CartSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotItem {
    pub product_id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

impl From<&LineItem> for SnapshotItem {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product.id.clone(),
            name: item.product.name.clone(),
            price: item.product.price,
            quantity: item.quantity,
        }
    }
}

/// Immutable, serializable view of a cart:
/// `{ "items": [{productId, name, price, quantity}], "total": n, "userId": s }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<SnapshotItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub user_id: UserId,
}

impl CartSnapshot {
    /// Snapshot of a cart that was never opened.
    pub fn empty(user_id: UserId) -> Self {
        Self {
            items: Vec::new(),
            total: Decimal::ZERO,
            user_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn quantity_of(&self, product_id: &ProductId) -> Option<u32> {
        self.items
            .iter()
            .find(|item| &item.product_id == product_id)
            .map(|item| item.quantity)
    }

    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

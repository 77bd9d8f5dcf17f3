//! A placed order.
//!
//! # Actor Framework
//! Implements [`ActorEntity`](crate::framework::ActorEntity) in `order_actor::entity`. The
//! create hook reserves catalog stock for every line before the order is stored.

use crate::model::{CartSnapshot, ProductId, UserId};
use crate::order_actor::OrderError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of an order (`order_<n>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for OrderId {
    fn from(n: u64) -> Self {
        Self(format!("order_{}", n))
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order status. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub fn can_advance_to(self, next: OrderStatus) -> bool {
        next > self
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl OrderLine {
    /// `unit_price × quantity`, or `None` when it does not fit in a `Decimal`.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub lines: Vec<OrderLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// A pending order; the total is derived from `lines`.
    pub fn new(id: OrderId, user_id: UserId, lines: Vec<OrderLine>) -> Result<Self, OrderError> {
        let total = lines
            .iter()
            .try_fold(Decimal::ZERO, |acc, line| acc.checked_add(line.subtotal()?))
            .ok_or(OrderError::TotalOverflow)?;
        Ok(Self {
            id,
            user_id,
            lines,
            total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })
    }
}

/// Payload for placing an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub lines: Vec<OrderLine>,
}

impl From<&CartSnapshot> for OrderCreate {
    fn from(cart: &CartSnapshot) -> Self {
        Self {
            user_id: cart.user_id.clone(),
            lines: cart
                .items
                .iter()
                .map(|item| OrderLine {
                    product_id: item.product_id.clone(),
                    name: item.name.clone(),
                    unit_price: item.price,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cart, Product};

    #[test]
    fn status_only_advances() {
        assert!(OrderStatus::Pending.can_advance_to(OrderStatus::Confirmed));
        assert!(OrderStatus::Confirmed.can_advance_to(OrderStatus::Delivered));
        assert!(!OrderStatus::Shipped.can_advance_to(OrderStatus::Confirmed));
        assert!(!OrderStatus::Shipped.can_advance_to(OrderStatus::Shipped));
    }

    #[test]
    fn order_from_cart_snapshot() {
        let mut cart = Cart::new(UserId::new("alice"));
        let product = Product::new(ProductId::parse("1").unwrap(), "Widget", Decimal::new(250, 2), 9);
        let snapshot = cart.add_item(product, 4).unwrap();

        let params = OrderCreate::from(&snapshot);
        let order = Order::new(OrderId::from(7), params.user_id, params.lines).unwrap();
        assert_eq!(order.id.as_str(), "order_7");
        assert_eq!(order.total, Decimal::from(10));
        assert_eq!(order.status, OrderStatus::Pending);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["lines"][0]["productId"], "1");
        assert_eq!(json["lines"][0]["unitPrice"].as_f64(), Some(2.5));
    }

    #[test]
    fn order_total_overflow_is_an_error() {
        let line = |id: &str| OrderLine {
            product_id: ProductId::parse(id).unwrap(),
            name: "Huge".into(),
            unit_price: Decimal::MAX,
            quantity: 1,
        };
        assert!(Order::new(OrderId::from(1), UserId::anonymous(), vec![line("1")]).is_ok());
        assert_eq!(
            Order::new(OrderId::from(2), UserId::anonymous(), vec![line("1"), line("2")]),
            Err(OrderError::TotalOverflow)
        );
    }
}

//! Catalog data: products, their ids and customer reviews.
//!
//! # Actor Framework
//! [`Product`] implements [`ActorEntity`](crate::framework::ActorEntity) (see
//! `product_actor::entity`), so the catalog is a `ResourceActor<Product>` keyed by
//! [`ProductId`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

const MAX_PRODUCT_ID_LEN: usize = 64;

/// Rejected product identifier.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid product id {id:?}: {reason}")]
pub struct InvalidProductId {
    pub id: String,
    pub reason: &'static str,
}

/// Catalog identifier of a product.
///
/// Any non-empty string of at most 64 characters without whitespace or control characters.
/// Construction goes through [`ProductId::parse`], so a `ProductId` in hand is always
/// well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    pub fn parse(id: impl Into<String>) -> Result<Self, InvalidProductId> {
        let id = id.into();
        let reason = if id.is_empty() {
            Some("empty")
        } else if id.chars().count() > MAX_PRODUCT_ID_LEN {
            Some("longer than 64 characters")
        } else if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
            Some("contains whitespace or control characters")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(InvalidProductId { id, reason }),
            None => Ok(Self(id)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductId {
    type Error = InvalidProductId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub product_id: ProductId,
    /// 1 to 5 stars.
    pub rating: u8,
    pub comment: String,
    pub user_name: String,
    pub date: NaiveDate,
    pub helpful: u32,
}

/// A product in the catalog.
///
/// Immutable from the cart's point of view: a cart keeps the copy it was handed when the
/// line was first added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub image_url: String,
    pub stock: u32,
    pub features: Vec<String>,
    /// Average rating, 0.0 to 5.0.
    pub rating: f64,
    pub review_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_reviews: Option<Vec<Review>>,
}

impl Product {
    /// A product with only the fields the cart cares about; the rest are empty.
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self::from_create(id, ProductCreate::new(name, price, stock))
    }

    pub fn from_create(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            image_url: params.image_url,
            stock: params.stock,
            features: params.features,
            rating: params.rating,
            review_count: params.review_count,
            customer_reviews: params.customer_reviews,
        }
    }
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image_url: String,
    pub stock: u32,
    pub features: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    pub customer_reviews: Option<Vec<Review>>,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            category: String::new(),
            image_url: String::new(),
            stock,
            features: Vec::new(),
            rating: 0.0,
            review_count: 0,
            customer_reviews: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.customer_reviews = Some(reviews);
        self
    }
}

/// Catalog edit: a new price and/or a stock change. Applied all at once or not at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub stock: Option<StockChange>,
}

/// How a [`ProductUpdate`] changes the stock counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StockChange {
    /// Replace the level.
    Set(u32),
    /// Add (positive) or take away (negative) units. Never goes below zero.
    Adjust(i64),
}

/// Compact product view handed to the assistant (`listProducts`, search results,
/// recommendations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub stock: u32,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            stock: product.stock,
        }
    }
}

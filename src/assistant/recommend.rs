//! Products to suggest to a shopper.
//!
//! Two rankings live here. [`recommend`] fills the `recommendations` of a cart view: a
//! candidate shares a category with the cart (or with the focus category), is not already
//! in the cart and has stock left; best rated first, ties broken by id. [`suggest`] answers
//! an explicit request around one reference product, scored by [`RecommendationMode`].

use crate::model::{CartSnapshot, Product, ProductSummary};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Recommendations for `cart`. With `focus` set only that category is considered, otherwise
/// every category present in the cart.
pub fn recommend(
    catalog: &[Product],
    cart: &CartSnapshot,
    focus: Option<&str>,
    limit: usize,
) -> Vec<ProductSummary> {
    let in_cart = |product: &Product| cart.quantity_of(&product.id).is_some();

    let categories: BTreeSet<&str> = match focus {
        Some(category) => BTreeSet::from([category]),
        None => catalog
            .iter()
            .filter(|p| in_cart(*p))
            .map(|p| p.category.as_str())
            .collect(),
    };

    let mut candidates: Vec<&Product> = catalog
        .iter()
        .filter(|p| !p.category.is_empty() && categories.contains(p.category.as_str()))
        .filter(|p| !in_cart(*p) && p.stock > 0)
        .collect();
    candidates.sort_by(|a, b| b.rating.total_cmp(&a.rating).then_with(|| a.id.cmp(&b.id)));

    candidates
        .into_iter()
        .take(limit)
        .map(ProductSummary::from)
        .collect()
}

/// What kind of product [`suggest`] looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationMode {
    /// Same category, similar price, at least as well rated.
    #[serde(alias = "similaire")]
    Similar,
    /// Another category, well rated.
    #[serde(alias = "complementaire", alias = "complémentaire")]
    Complementary,
}

impl RecommendationMode {
    fn reason(self) -> &'static str {
        match self {
            RecommendationMode::Similar => "Similar product in the same category",
            RecommendationMode::Complementary => "Goes well with this product",
        }
    }
}

/// A suggested product with why and how strongly it was picked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    #[serde(flatten)]
    pub product: ProductSummary,
    pub reason: &'static str,
    /// 0.0 to 1.0.
    pub confidence: f64,
}

/// Scores below this many tenths are dropped.
const MIN_SCORE: u8 = 6;

/// Score in tenths of confidence.
fn score(candidate: &Product, reference: &Product, mode: RecommendationMode) -> u8 {
    let same_category = !reference.category.is_empty() && candidate.category == reference.category;
    match mode {
        RecommendationMode::Similar => {
            let mut score = 0;
            if same_category {
                score += 4;
            }
            if within_price_band(candidate.price, reference.price) {
                score += 3;
            }
            if candidate.rating >= reference.rating {
                score += 3;
            }
            score
        }
        RecommendationMode::Complementary => {
            let mut score = 0;
            if !same_category {
                score += 3;
            }
            if candidate.rating >= 4.0 {
                score += 3;
            }
            score
        }
    }
}

/// `price` differs from `reference` by less than 20% of `reference`.
fn within_price_band(price: Decimal, reference: Decimal) -> bool {
    let band = reference.checked_mul(Decimal::new(2, 1));
    let diff = price.checked_sub(reference);
    matches!((band, diff), (Some(band), Some(diff)) if diff.abs() < band)
}

/// Up to `limit` products to show next to `reference`, strongest first, ties broken by id.
/// The reference itself and sold-out products are never suggested.
pub fn suggest(
    catalog: &[Product],
    reference: &Product,
    mode: RecommendationMode,
    limit: usize,
) -> Vec<Suggestion> {
    let mut scored: Vec<(u8, &Product)> = catalog
        .iter()
        .filter(|p| p.id != reference.id && p.stock > 0)
        .map(|p| (score(p, reference, mode), p))
        .filter(|(score, _)| *score >= MIN_SCORE)
        .collect();
    scored.sort_by(|(a, p), (b, q)| b.cmp(a).then_with(|| p.id.cmp(&q.id)));

    scored
        .into_iter()
        .take(limit)
        .map(|(score, p)| Suggestion {
            product: ProductSummary::from(p),
            reason: mode.reason(),
            confidence: f64::from(score) / 10.0,
        })
        .collect()
}

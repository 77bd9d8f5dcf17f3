//! Summary of a product's customer reviews.

use crate::model::{Product, ProductId, Review};
use serde::Serialize;

/// How many of the most helpful reviews are quoted.
const TOP_COMMENTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAnalysis {
    pub product_id: ProductId,
    pub product_name: String,
    pub average_rating: f64,
    pub total_reviews: usize,
    /// Reviews rated 4 or 5.
    pub positive_count: usize,
    /// Reviews rated 1 or 2.
    pub negative_count: usize,
    /// Most helpful first; equally helpful reviews keep their original order.
    pub top_comments: Vec<Review>,
}

/// `None` when the product has no reviews to analyze.
pub fn analyze_reviews(product: &Product) -> Option<ReviewAnalysis> {
    let reviews = product.customer_reviews.as_deref().filter(|r| !r.is_empty())?;

    let rating_sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let mut top_comments = reviews.to_vec();
    top_comments.sort_by(|a, b| b.helpful.cmp(&a.helpful));
    top_comments.truncate(TOP_COMMENTS);

    Some(ReviewAnalysis {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        average_rating: f64::from(rating_sum) / reviews.len() as f64,
        total_reviews: reviews.len(),
        positive_count: reviews.iter().filter(|r| r.rating >= 4).count(),
        negative_count: reviews.iter().filter(|r| r.rating <= 2).count(),
        top_comments,
    })
}

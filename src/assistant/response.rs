//! What the assistant gets back from every action.

use super::recommend::Suggestion;
use super::reviews::ReviewAnalysis;
use crate::model::{CartSnapshot, Order, ProductSummary};
use serde::Serialize;

/// `{ "success": bool, "message": string, "data"?: ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>, data: ResponseData) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    pub fn cart(&self) -> Option<&CartView> {
        match &self.data {
            Some(ResponseData::Cart(view)) => Some(view),
            _ => None,
        }
    }

    pub fn products(&self) -> Option<&[ProductSummary]> {
        match &self.data {
            Some(ResponseData::Products(products)) => Some(products.as_slice()),
            _ => None,
        }
    }

    pub fn order(&self) -> Option<&Order> {
        match &self.data {
            Some(ResponseData::Order(order)) => Some(order),
            _ => None,
        }
    }

    pub fn product(&self) -> Option<&ProductSummary> {
        match &self.data {
            Some(ResponseData::Product(product)) => Some(product),
            _ => None,
        }
    }

    pub fn suggestions(&self) -> Option<&[Suggestion]> {
        match &self.data {
            Some(ResponseData::Suggestions(suggestions)) => Some(suggestions.as_slice()),
            _ => None,
        }
    }

    pub fn reviews(&self) -> Option<&ReviewAnalysis> {
        match &self.data {
            Some(ResponseData::Reviews(analysis)) => Some(analysis),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Cart(CartView),
    Products(Vec<ProductSummary>),
    Product(ProductSummary),
    Order(Order),
    Suggestions(Vec<Suggestion>),
    Reviews(ReviewAnalysis),
}

/// A cart snapshot with the products suggested alongside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    #[serde(flatten)]
    pub cart: CartSnapshot,
    pub recommendations: Vec<ProductSummary>,
}

//! [`ActorEntity`] implementation for [`Product`]: validation on create, price and stock
//! edits, and the stock actions.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, StockChange};
use async_trait::async_trait;
use rust_decimal::Decimal;

fn validate(params: &ProductCreate) -> Result<(), ProductError> {
    if params.name.trim().is_empty() {
        return Err(ProductError::InvalidProduct("name is empty".into()));
    }
    if params.price < Decimal::ZERO {
        return Err(ProductError::InvalidProduct(format!(
            "negative price {}",
            params.price
        )));
    }
    if !(0.0..=5.0).contains(&params.rating) {
        return Err(ProductError::InvalidProduct(format!(
            "rating {} outside 0..=5",
            params.rating
        )));
    }
    let bad_review = params
        .customer_reviews
        .iter()
        .flatten()
        .find(|review| !(1..=5).contains(&review.rating));
    if let Some(review) = bad_review {
        return Err(ProductError::InvalidProduct(format!(
            "review {} has rating {}",
            review.id, review.rating
        )));
    }
    Ok(())
}

fn adjusted_stock(stock: u32, delta: i64) -> Result<u32, ProductError> {
    let next = i64::from(stock)
        .checked_add(delta)
        .ok_or_else(|| ProductError::InvalidProduct(format!("stock change {} out of range", delta)))?;
    if next < 0 {
        return Err(ProductError::InsufficientStock {
            requested: u32::try_from(delta.unsigned_abs()).unwrap_or(u32::MAX),
            available: stock,
        });
    }
    u32::try_from(next)
        .map_err(|_| ProductError::InvalidProduct(format!("stock {} out of range", next)))
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        validate(&params)?;
        Ok(Product::from_create(id, params))
    }

    /// # Fields Updated
    /// - `price` (must not be negative)
    /// - `stock`, replaced or adjusted by a signed delta (must not go below zero)
    ///
    /// Both are checked before either is written.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        let price = match update.price {
            Some(price) if price < Decimal::ZERO => {
                return Err(ProductError::InvalidProduct(format!("negative price {}", price)));
            }
            Some(price) => price,
            None => self.price,
        };
        let stock = match update.stock {
            None => self.stock,
            Some(StockChange::Set(stock)) => stock,
            Some(StockChange::Adjust(delta)) => adjusted_stock(self.stock, delta)?,
        };
        self.price = price;
        self.stock = stock;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::ReserveStock(0) | ProductAction::ReleaseStock(0) => {
                Err(ProductError::InvalidQuantity(0))
            }
            ProductAction::ReserveStock(quantity) => {
                if self.stock < quantity {
                    return Err(ProductError::InsufficientStock {
                        requested: quantity,
                        available: self.stock,
                    });
                }
                self.stock -= quantity;
                Ok(ProductActionResult::Reserved {
                    remaining: self.stock,
                })
            }
            ProductAction::ReleaseStock(quantity) => {
                self.stock = self
                    .stock
                    .checked_add(quantity)
                    .ok_or(ProductError::InvalidQuantity(quantity))?;
                Ok(ProductActionResult::Released {
                    remaining: self.stock,
                })
            }
        }
    }
}

//! # Cart Assistant
//!
//! Executes [`CartCommand`]s against the catalog, cart and order actors and turns every
//! outcome into an [`ActionResponse`].
//!
//! Stock is never checked by the cart engine. When `enforce_stock` is on, this layer refuses
//! an `addToCart` or `updateCartItem` that would leave more units of a product in the cart
//! than the catalog holds. Checkout checks again by reserving the stock, inside the cart
//! actor's turn.

use super::command::CartCommand;
use super::error::AssistantError;
use super::recommend::{recommend, suggest, RecommendationMode};
use super::response::{ActionResponse, CartView, ResponseData};
use super::reviews::analyze_reviews;
use crate::clients::{CartClient, ProductClient};
use crate::config::StorefrontConfig;
use crate::model::{CartSnapshot, Product, ProductId, ProductSummary, UserId};
use serde_json::Value;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct CartAssistant {
    products: ProductClient,
    carts: CartClient,
    config: StorefrontConfig,
}

impl CartAssistant {
    pub fn new(products: ProductClient, carts: CartClient, config: StorefrontConfig) -> Self {
        Self {
            products,
            carts,
            config,
        }
    }

    /// Parses and runs one tool call.
    pub async fn handle_call(&self, user_id: &UserId, name: &str, arguments: Value) -> ActionResponse {
        match CartCommand::from_call(name, arguments) {
            Ok(command) => self.dispatch(user_id, command).await,
            Err(e) => {
                warn!(%user_id, action = name, error = %e, "Rejected call");
                ActionResponse::failure(e.to_string())
            }
        }
    }

    /// Runs `command` for `user_id`. Failures come back as `success: false` responses.
    #[instrument(skip(self, command), fields(action = command.name()))]
    pub async fn dispatch(&self, user_id: &UserId, command: CartCommand) -> ActionResponse {
        match self.execute(user_id, command).await {
            Ok(response) => {
                info!(message = %response.message, "Action done");
                response
            }
            Err(e) => {
                warn!(error = %e, "Action failed");
                ActionResponse::failure(e.to_string())
            }
        }
    }

    async fn execute(
        &self,
        user_id: &UserId,
        command: CartCommand,
    ) -> Result<ActionResponse, AssistantError> {
        match command {
            CartCommand::ListProducts => self.list_products().await,
            CartCommand::SearchProducts { query } => self.search_products(&query).await,
            CartCommand::AddToCart {
                product_id,
                quantity,
            } => self.add_to_cart(user_id, product_id, quantity).await,
            CartCommand::UpdateCartItem {
                product_id,
                quantity,
            } => self.update_cart_item(user_id, product_id, quantity).await,
            CartCommand::RemoveFromCart { product_id } => {
                self.remove_from_cart(user_id, product_id).await
            }
            CartCommand::GetCart => self.get_cart(user_id).await,
            CartCommand::ClearCart => {
                let snapshot = self.carts.clear(user_id.clone()).await?;
                Ok(ActionResponse::ok(
                    "Cart cleared",
                    self.view(snapshot, None).await?,
                ))
            }
            CartCommand::Checkout => self.checkout(user_id).await,
            CartCommand::UpdateStock {
                product_id,
                quantity,
            } => self.update_stock(product_id, quantity).await,
            CartCommand::AnalyzeReviews { product_id } => self.analyze_reviews(product_id).await,
            CartCommand::RecommendProducts { product_id, mode } => {
                self.recommend_products(product_id, mode).await
            }
        }
    }

    async fn list_products(&self) -> Result<ActionResponse, AssistantError> {
        let products = summaries(self.products.list_products().await?);
        Ok(ActionResponse::ok(
            format!("{} products available", products.len()),
            ResponseData::Products(products),
        ))
    }

    async fn search_products(&self, query: &str) -> Result<ActionResponse, AssistantError> {
        let found = summaries(self.products.search(query, self.config.search_limit).await?);
        let message = if found.is_empty() {
            format!("No products match \"{}\"", query)
        } else {
            format!("Found {} products matching \"{}\"", found.len(), query)
        };
        Ok(ActionResponse::ok(message, ResponseData::Products(found)))
    }

    async fn add_to_cart(
        &self,
        user_id: &UserId,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<ActionResponse, AssistantError> {
        let product = self.products.product(product_id.clone()).await?;
        if quantity > 0 && self.config.enforce_stock {
            let in_cart = self
                .carts
                .get_cart(user_id.clone())
                .await?
                .quantity_of(&product_id)
                .unwrap_or(0);
            check_stock(&product, i64::from(in_cart).saturating_add(quantity))?;
        }

        let message = format!("Added {} x {} to the cart", quantity, product.name);
        let category = product.category.clone();
        let snapshot = self
            .carts
            .add_item(user_id.clone(), product, quantity)
            .await?;
        Ok(ActionResponse::ok(
            message,
            self.view(snapshot, Some(&category)).await?,
        ))
    }

    async fn update_cart_item(
        &self,
        user_id: &UserId,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<ActionResponse, AssistantError> {
        let before = self.carts.get_cart(user_id.clone()).await?;
        if before.quantity_of(&product_id).is_none() {
            return Ok(not_in_cart(&product_id, before));
        }
        if quantity > 0 && self.config.enforce_stock {
            let product = self.products.product(product_id.clone()).await?;
            check_stock(&product, quantity)?;
        }

        let snapshot = self
            .carts
            .update_quantity(user_id.clone(), product_id, quantity)
            .await?;
        let message = if quantity > 0 {
            "Quantity updated"
        } else {
            "Product removed from the cart"
        };
        Ok(ActionResponse::ok(message, self.view(snapshot, None).await?))
    }

    async fn remove_from_cart(
        &self,
        user_id: &UserId,
        product_id: ProductId,
    ) -> Result<ActionResponse, AssistantError> {
        let before = self.carts.get_cart(user_id.clone()).await?;
        if before.quantity_of(&product_id).is_none() {
            return Ok(not_in_cart(&product_id, before));
        }
        let snapshot = self
            .carts
            .remove_item(user_id.clone(), product_id)
            .await?;
        Ok(ActionResponse::ok(
            "Product removed from the cart",
            self.view(snapshot, None).await?,
        ))
    }

    async fn get_cart(&self, user_id: &UserId) -> Result<ActionResponse, AssistantError> {
        let snapshot = self.carts.get_cart(user_id.clone()).await?;
        let message = if snapshot.is_empty() {
            "The cart is empty".to_string()
        } else {
            format!("Cart ({} items)", snapshot.unit_count())
        };
        Ok(ActionResponse::ok(message, self.view(snapshot, None).await?))
    }

    async fn checkout(&self, user_id: &UserId) -> Result<ActionResponse, AssistantError> {
        let order = self.carts.checkout(user_id.clone()).await?;
        Ok(ActionResponse::ok(
            format!("Order {} confirmed, total {}", order.id, order.total.round_dp(2)),
            ResponseData::Order(order),
        ))
    }

    async fn update_stock(
        &self,
        product_id: ProductId,
        delta: i64,
    ) -> Result<ActionResponse, AssistantError> {
        let product = self.products.adjust_stock(product_id, delta).await?;
        Ok(ActionResponse::ok(
            format!("Stock for {} is now {}", product.name, product.stock),
            ResponseData::Product(ProductSummary::from(&product)),
        ))
    }

    async fn analyze_reviews(&self, product_id: ProductId) -> Result<ActionResponse, AssistantError> {
        let product = self.products.product(product_id).await?;
        let analysis = analyze_reviews(&product)
            .ok_or_else(|| AssistantError::NoReviews { name: product.name.clone() })?;
        Ok(ActionResponse::ok(
            format!(
                "{} reviews for {}, average {:.1}",
                analysis.total_reviews, product.name, analysis.average_rating
            ),
            ResponseData::Reviews(analysis),
        ))
    }

    async fn recommend_products(
        &self,
        product_id: ProductId,
        mode: RecommendationMode,
    ) -> Result<ActionResponse, AssistantError> {
        let reference = self.products.product(product_id).await?;
        let catalog = self.products.list_products().await?;
        let found = suggest(&catalog, &reference, mode, self.config.recommendation_limit);
        Ok(ActionResponse::ok(
            format!("{} recommendations for {}", found.len(), reference.name),
            ResponseData::Suggestions(found),
        ))
    }

    async fn view(
        &self,
        snapshot: CartSnapshot,
        focus: Option<&str>,
    ) -> Result<ResponseData, AssistantError> {
        let catalog = self.products.list_products().await?;
        let recommendations =
            recommend(&catalog, &snapshot, focus, self.config.recommendation_limit);
        Ok(ResponseData::Cart(CartView {
            cart: snapshot,
            recommendations,
        }))
    }
}

fn summaries(products: Vec<Product>) -> Vec<ProductSummary> {
    products.iter().map(ProductSummary::from).collect()
}

/// Refuses a cart quantity above the product's stock.
fn check_stock(product: &Product, wanted: i64) -> Result<(), AssistantError> {
    if wanted > i64::from(product.stock) {
        return Err(AssistantError::StockExceeded {
            name: product.name.clone(),
            stock: product.stock,
        });
    }
    Ok(())
}

fn not_in_cart(product_id: &ProductId, snapshot: CartSnapshot) -> ActionResponse {
    ActionResponse::ok(
        format!("Product {} is not in the cart", product_id),
        ResponseData::Cart(CartView {
            cart: snapshot,
            recommendations: Vec::new(),
        }),
    )
}

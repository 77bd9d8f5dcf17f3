//! # Product Client
//!
//! High-level API over the catalog actor: adding and looking up products, listing and
//! searching the catalog, and the stock actions used at checkout.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, StockChange};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<ProductError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ProductError::NotFound(id),
            Err(FrameworkError::AlreadyExists(id)) => ProductError::AlreadyExists(id),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result {:?}", result))
}

impl ProductClient {
    #[instrument(skip(self, params))]
    pub async fn add_product(
        &self,
        id: ProductId,
        params: ProductCreate,
    ) -> Result<ProductId, ProductError> {
        debug!(?params, "add_product called");
        self.inner.create(id, params).await.map_err(Self::map_error)
    }

    /// Looks up a product, failing with `NotFound` when the catalog has no such id.
    #[instrument(skip(self))]
    pub async fn product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!(?update, "update_product called");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Adds `delta` units to the stock, or takes them away when negative.
    ///
    /// Fails with [`ProductError::InsufficientStock`] instead of going below zero.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, id: ProductId, delta: i64) -> Result<Product, ProductError> {
        self.update_product(
            id,
            ProductUpdate {
                price: None,
                stock: Some(StockChange::Adjust(delta)),
            },
        )
        .await
    }

    /// The whole catalog, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        let mut products = self.inner.list().await.map_err(Self::map_error)?;
        products.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(products)
    }

    /// Products whose name, description or category contains `query`, ignoring case.
    ///
    /// Results are ordered by id and cut off after `limit`.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<Product>, ProductError> {
        let needle = query.trim().to_lowercase();
        let matches = self
            .list_products()
            .await?
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .take(limit)
            .collect::<Vec<_>>();
        debug!(found = matches.len(), "search done");
        Ok(matches)
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Take `quantity` units out of stock. Returns what is left.
    ///
    /// Fails with [`ProductError::InsufficientStock`] and leaves the stock untouched when
    /// fewer units are available.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        debug!("Reserving {} units for product {}", quantity, id);
        match self
            .inner
            .perform_action(id, ProductAction::ReserveStock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::Reserved { remaining } => Ok(remaining),
            other => Err(unexpected(other)),
        }
    }

    /// Put `quantity` units back. Returns the new stock level.
    #[instrument(skip(self))]
    pub async fn release_stock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        debug!("Releasing {} units for product {}", quantity, id);
        match self
            .inner
            .perform_action(id, ProductAction::ReleaseStock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::Released { remaining } => Ok(remaining),
            other => Err(unexpected(other)),
        }
    }
}

//! Collection Service - Tracks which products the user owns

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use super::{ServiceError, ServiceResult};
use crate::application::ports::outbound::CollectionRepositoryPort;
use crate::domain::aggregates::Catalog;
use crate::domain::entities::Product;
use crate::domain::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionSummary {
    pub owned_product_ids: Vec<ProductId>,
    pub owned_count: usize,
    pub total_count: usize,
}

pub struct CollectionService {
    catalog: Arc<Catalog>,
    repository: Arc<dyn CollectionRepositoryPort>,
}

impl CollectionService {
    pub fn new(catalog: Arc<Catalog>, repository: Arc<dyn CollectionRepositoryPort>) -> Self {
        Self {
            catalog,
            repository,
        }
    }

    /// Owned product ids, restricted to products the catalog knows
    pub async fn owned_ids(&self) -> ServiceResult<Vec<ProductId>> {
        Ok(self
            .repository
            .owned_ids()
            .await?
            .into_iter()
            .filter(|id| self.catalog.contains(id))
            .collect())
    }

    pub async fn is_owned(&self, product_id: &ProductId) -> ServiceResult<bool> {
        Ok(self.owned_ids().await?.contains(product_id))
    }

    pub async fn owned_products(&self) -> ServiceResult<Vec<Product>> {
        let owned = self.owned_ids().await?;
        Ok(self
            .catalog
            .products()
            .iter()
            .filter(|p| owned.contains(&p.id))
            .cloned()
            .collect())
    }

    pub async fn summary(&self) -> ServiceResult<CollectionSummary> {
        let owned_product_ids = self.owned_ids().await?;
        Ok(CollectionSummary {
            owned_count: owned_product_ids.len(),
            total_count: self.catalog.len(),
            owned_product_ids,
        })
    }

    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add(&self, product_id: &ProductId) -> ServiceResult<()> {
        self.ensure_known(product_id)?;
        self.repository.add(product_id).await?;
        info!("Added product to collection");
        Ok(())
    }

    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove(&self, product_id: &ProductId) -> ServiceResult<()> {
        self.ensure_known(product_id)?;
        self.repository.remove(product_id).await?;
        info!("Removed product from collection");
        Ok(())
    }

    /// Flip ownership and return the new state
    pub async fn toggle(&self, product_id: &ProductId) -> ServiceResult<bool> {
        if self.is_owned(product_id).await? {
            self.remove(product_id).await?;
            Ok(false)
        } else {
            self.add(product_id).await?;
            Ok(true)
        }
    }

    fn ensure_known(&self, product_id: &ProductId) -> ServiceResult<()> {
        if self.catalog.contains(product_id) {
            Ok(())
        } else {
            Err(ServiceError::NotFound(format!("Product {}", product_id)))
        }
    }
}

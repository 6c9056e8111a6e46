use async_trait::async_trait;
use goldtiger_core::error::CoreError;
use goldtiger_core::seed::SeedPlan;
use goldtiger_core::types::DbId;

use crate::models::product::{CreateProduct, Product, UpdateProduct};
use crate::models::product_variant::{CreateProductVariant, ProductVariant};
use crate::repositories::{CatalogRepo, ProductRepo, ProductVariantRepo, SeedSummary};
use crate::store::CatalogStore;
use crate::{schema, DbPool, StoreError};

/// [`CatalogStore`] backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        schema::ensure_schema(&self.pool).await?;
        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(ProductRepo::list(&self.pool).await?)
    }

    async fn find_product(&self, id: DbId) -> Result<Option<Product>, StoreError> {
        Ok(ProductRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_product(&self, input: &CreateProduct) -> Result<Product, StoreError> {
        Ok(ProductRepo::create(&self.pool, input).await?)
    }

    async fn update_product(
        &self,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, StoreError> {
        Ok(ProductRepo::update(&self.pool, id, input).await?)
    }

    async fn list_variants_for_product(
        &self,
        product_id: DbId,
    ) -> Result<Vec<ProductVariant>, StoreError> {
        Ok(ProductVariantRepo::list_by_product(&self.pool, product_id).await?)
    }

    async fn create_variant(
        &self,
        product_id: DbId,
        input: &CreateProductVariant,
    ) -> Result<ProductVariant, StoreError> {
        if ProductRepo::find_by_id(&self.pool, product_id).await?.is_none() {
            return Err(CoreError::NotFound {
                entity: "Product",
                id: product_id,
            }
            .into());
        }
        Ok(ProductVariantRepo::create(&self.pool, product_id, input).await?)
    }

    async fn reload_catalog(&self, plan: &SeedPlan) -> Result<SeedSummary, StoreError> {
        Ok(CatalogRepo::reload(&self.pool, plan).await?)
    }
}

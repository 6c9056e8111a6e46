//! Store abstraction handed to the API layer.
//!
//! [`CatalogStore`] is the single seam between HTTP handlers and persistence.
//! Production uses [`PgCatalogStore`]; tests and demos can use
//! [`MemoryCatalogStore`], which enforces the same uniqueness and
//! foreign-key rules in process.

use async_trait::async_trait;
use goldtiger_core::seed::SeedPlan;
use goldtiger_core::types::DbId;

use crate::models::product::{CreateProduct, Product, UpdateProduct};
use crate::models::product_variant::{CreateProductVariant, ProductVariant};
use crate::repositories::SeedSummary;
use crate::StoreError;

mod memory;
mod postgres;

pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;

/// Typed access to products and their variants.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;

    /// Create any missing tables. Never destroys data.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// All products in store order (ascending id).
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    async fn find_product(&self, id: DbId) -> Result<Option<Product>, StoreError>;

    async fn create_product(&self, input: &CreateProduct) -> Result<Product, StoreError>;

    /// Apply a partial update. Returns `None` when the product does not exist.
    async fn update_product(
        &self,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, StoreError>;

    /// Variants belonging to `product_id`, ordered by id.
    async fn list_variants_for_product(
        &self,
        product_id: DbId,
    ) -> Result<Vec<ProductVariant>, StoreError>;

    /// Insert a variant under an existing product.
    ///
    /// Fails with `NotFound` for an unknown product and with a conflict for
    /// a duplicate SKU or (product, color, size).
    async fn create_variant(
        &self,
        product_id: DbId,
        input: &CreateProductVariant,
    ) -> Result<ProductVariant, StoreError>;

    /// Destroy the whole catalog and replace it with `plan` atomically.
    async fn reload_catalog(&self, plan: &SeedPlan) -> Result<SeedSummary, StoreError>;
}

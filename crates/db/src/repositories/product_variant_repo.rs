//! Repository for the `product_variants` table.

use goldtiger_core::text_list;
use goldtiger_core::types::DbId;
use sqlx::PgPool;

use crate::models::product_variant::{CreateProductVariant, ProductVariant};

/// Column list for `product_variants` queries.
pub(crate) const COLUMNS: &str = "id, product_id, color, size, stock, image_paths, sku";

/// Provides CRUD operations for product variants.
pub struct ProductVariantRepo;

impl ProductVariantRepo {
    /// Insert a new variant under `product_id`, returning the created row.
    ///
    /// A duplicate SKU or (product, color, size) violates a `uq_` constraint;
    /// a missing product violates the foreign key.
    pub async fn create(
        pool: &PgPool,
        product_id: DbId,
        input: &CreateProductVariant,
    ) -> Result<ProductVariant, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_variants (product_id, color, size, stock, image_paths, sku) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductVariant>(&query)
            .bind(product_id)
            .bind(&input.color)
            .bind(&input.size)
            .bind(input.stock.unwrap_or(0))
            .bind(input.image_paths.as_deref().map(text_list::encode))
            .bind(&input.sku)
            .fetch_one(pool)
            .await
    }

    /// List the variants of one product, ordered by ID.
    pub async fn list_by_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<ProductVariant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM product_variants WHERE product_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, ProductVariant>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }

    /// Find a variant by its SKU.
    pub async fn find_by_sku(
        pool: &PgPool,
        sku: &str,
    ) -> Result<Option<ProductVariant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_variants WHERE sku = $1");
        sqlx::query_as::<_, ProductVariant>(&query)
            .bind(sku)
            .fetch_optional(pool)
            .await
    }

    /// Count all variants.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM product_variants")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

//! Repository for the `products` table.

use goldtiger_core::text_list;
use goldtiger_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, UpdateProduct, DEFAULT_RATING};

/// Column list for `products` queries.
pub(crate) const COLUMNS: &str = "\
    id, name, category, price, description, features, \
    created_at, updated_at, is_featured, rating, review_count";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products \
                 (name, category, price, description, features, is_featured, rating, review_count) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.price)
            .bind(&input.description)
            .bind(input.features.as_deref().map(text_list::encode))
            .bind(input.is_featured.unwrap_or(false))
            .bind(input.rating.unwrap_or(DEFAULT_RATING))
            .bind(input.review_count.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Update a product. Only non-`None` fields in `input` are applied.
    ///
    /// `updated_at` is refreshed by the `trg_products_updated_at` trigger.
    /// Returns `None` if no product with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                 name = COALESCE($2, name), \
                 category = COALESCE($3, category), \
                 price = COALESCE($4, price), \
                 description = COALESCE($5, description), \
                 features = COALESCE($6, features), \
                 is_featured = COALESCE($7, is_featured), \
                 rating = COALESCE($8, rating), \
                 review_count = COALESCE($9, review_count) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.price)
            .bind(&input.description)
            .bind(input.features.as_deref().map(text_list::encode))
            .bind(input.is_featured)
            .bind(input.rating)
            .bind(input.review_count)
            .fetch_optional(pool)
            .await
    }

    /// Count all products.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

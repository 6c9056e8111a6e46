//! Whole-catalog reset used by the seeder.

use goldtiger_core::seed::SeedPlan;
use goldtiger_core::text_list;
use goldtiger_core::types::DbId;
use serde::Serialize;
use sqlx::PgPool;

use crate::schema;

/// Row counts written by a catalog reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub products: usize,
    pub variants: usize,
}

/// Drops, recreates, and repopulates the catalog tables.
pub struct CatalogRepo;

impl CatalogRepo {
    /// Replace the entire catalog with `plan`.
    ///
    /// Schema drop, schema creation, and every insert share one transaction,
    /// so a failure at any step leaves the previous catalog untouched.
    /// Product ids come back from `INSERT ... RETURNING` and are attached to
    /// that product's variants.
    pub async fn reload(pool: &PgPool, plan: &SeedPlan) -> Result<SeedSummary, sqlx::Error> {
        let mut tx = pool.begin().await?;

        tracing::info!("Dropping existing tables");
        schema::drop_schema(&mut *tx).await?;

        tracing::info!("Creating tables");
        schema::create_schema(&mut *tx).await?;

        tracing::info!(count = plan.product_count(), "Inserting products");
        let mut product_ids: Vec<DbId> = Vec::with_capacity(plan.entries.len());
        for entry in &plan.entries {
            let p = &entry.product;
            let (id,): (DbId,) = sqlx::query_as(
                "INSERT INTO products \
                     (name, category, price, description, features, is_featured, rating, review_count) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
                 RETURNING id",
            )
            .bind(&p.name)
            .bind(&p.category)
            .bind(p.price)
            .bind(&p.description)
            .bind(text_list::encode(&p.features))
            .bind(p.is_featured)
            .bind(p.rating)
            .bind(p.review_count)
            .fetch_one(&mut *tx)
            .await?;
            product_ids.push(id);
        }

        tracing::info!(count = plan.variant_count(), "Inserting product variants");
        for (entry, product_id) in plan.entries.iter().zip(&product_ids) {
            for v in &entry.variants {
                sqlx::query(
                    "INSERT INTO product_variants \
                         (product_id, color, size, stock, image_paths, sku) \
                     VALUES ($1, $2, $3, $4, $5, $6)",
                )
                .bind(*product_id)
                .bind(&v.color)
                .bind(&v.size)
                .bind(v.stock)
                .bind(text_list::encode(&v.image_paths))
                .bind(&v.sku)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        Ok(SeedSummary {
            products: plan.product_count(),
            variants: plan.variant_count(),
        })
    }
}

//! Persistence gateway for the product catalog.
//!
//! Repositories are zero-sized structs over `&PgPool`. Callers outside this
//! crate normally go through the [`store::CatalogStore`] trait so the
//! PostgreSQL backend can be swapped for [`store::MemoryCatalogStore`].

use goldtiger_core::error::CoreError;
use goldtiger_core::seed::SeedError;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod schema;
pub mod seeder;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Errors raised by a catalog store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain-level error (not found, validation, conflict, corrupt data).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The seed fixture could not be expanded into a plan.
    #[error(transparent)]
    Seed(#[from] SeedError),
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

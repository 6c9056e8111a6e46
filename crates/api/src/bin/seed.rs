//! Drop and repopulate the catalog with the demo fixture.
//!
//! Destroys every existing product and variant. Run once at setup time,
//! never against a database with real data.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use goldtiger_api::config::DatabaseConfig;
use goldtiger_db::seeder::seed_catalog;
use goldtiger_db::store::PgCatalogStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goldtiger_db=info,goldtiger_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_config = DatabaseConfig::from_env();
    let pool = goldtiger_db::create_pool(&db_config.url, db_config.max_connections)
        .await
        .context("Failed to connect to database")?;

    let store = PgCatalogStore::new(pool);
    let summary = seed_catalog(&store)
        .await
        .context("Database initialization failed")?;

    tracing::info!(
        products = summary.products,
        variants = summary.variants,
        "Database initialization completed successfully"
    );
    Ok(())
}

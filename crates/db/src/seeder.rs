//! One-shot population of the demo catalog.
//!
//! Destructive: the existing catalog is dropped before the fixture is
//! inserted. Never point this at a store holding real data, and do not run
//! it while the API is serving traffic.

use goldtiger_core::seed::{self, SeedPlan};

use crate::repositories::SeedSummary;
use crate::store::CatalogStore;
use crate::StoreError;

/// Reset `store` and fill it with the fixed demo catalog.
pub async fn seed_catalog(store: &dyn CatalogStore) -> Result<SeedSummary, StoreError> {
    let plan = seed::build_plan().inspect_err(|e| {
        tracing::error!(error = %e, "Seed fixture is out of sync with the color catalog");
    })?;
    apply_plan(store, &plan).await
}

/// Reset `store` and apply an already-built plan.
///
/// The store applies the plan atomically; on failure nothing is committed
/// and the error is logged and returned.
pub async fn apply_plan(
    store: &dyn CatalogStore,
    plan: &SeedPlan,
) -> Result<SeedSummary, StoreError> {
    tracing::info!(
        products = plan.product_count(),
        variants = plan.variant_count(),
        "Seeding catalog"
    );

    match store.reload_catalog(plan).await {
        Ok(summary) => {
            tracing::info!(
                products = summary.products,
                variants = summary.variants,
                "Catalog seeding completed"
            );
            Ok(summary)
        }
        Err(e) => {
            tracing::error!(error = %e, "Catalog seeding failed, transaction rolled back");
            Err(e)
        }
    }
}

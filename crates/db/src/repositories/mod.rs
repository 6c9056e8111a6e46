//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod catalog_repo;
pub mod product_repo;
pub mod product_variant_repo;

pub use catalog_repo::{CatalogRepo, SeedSummary};
pub use product_repo::ProductRepo;
pub use product_variant_repo::ProductVariantRepo;

//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Serialize` view with the derived fields clients see
//! - `Deserialize` create/update DTOs for the insert paths

pub mod product;
pub mod product_variant;

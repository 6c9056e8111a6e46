//! Domain rules for the Golden Tiger product catalog.
//!
//! Everything here is pure: pricing tiers, stock heuristics, the text-list
//! codec used for list-valued columns, product validation, and the fixed
//! seed fixture. Persistence lives in `goldtiger_db`.

pub mod error;
pub mod pricing;
pub mod seed;
pub mod stock;
pub mod text_list;
pub mod types;
pub mod validation;

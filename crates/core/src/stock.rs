//! Stock heuristics for product variants.

use crate::pricing::round2;

/// Variants with fewer units than this are flagged as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i32 = 5;

/// Assumed units sold per day when estimating stockout in the serialized view.
/// There is no real sales signal behind this number.
pub const ASSUMED_DAILY_SALES: f64 = 2.0;

pub const AVAILABILITY_IN_STOCK: &str = "In Stock";
pub const AVAILABILITY_OUT_OF_STOCK: &str = "Out of Stock";

/// `true` iff `stock` is strictly below `threshold`.
pub fn is_low_stock(stock: i32, threshold: i32) -> bool {
    stock < threshold
}

/// Days until `stock` runs out at `daily_sales` units per day, rounded to
/// two decimals.
///
/// A non-positive sales rate never stocks out and yields `f64::INFINITY`.
pub fn days_until_stockout(stock: i32, daily_sales: f64) -> f64 {
    if daily_sales <= 0.0 {
        return f64::INFINITY;
    }
    round2(f64::from(stock) / daily_sales)
}

/// Human-readable availability label.
pub fn availability_label(stock: i32) -> &'static str {
    if stock > 0 {
        AVAILABILITY_IN_STOCK
    } else {
        AVAILABILITY_OUT_OF_STOCK
    }
}

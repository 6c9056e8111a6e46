//! Price derivations shown alongside every product.
//!
//! Inputs are never range-checked: a negative or >100 discount percent
//! simply produces an inflated or negative price.

/// Quantity at which the steepest bulk tier starts.
pub const BULK_TIER_HIGH_QUANTITY: i64 = 10;

/// Multiplier for the steepest bulk tier (15% off).
pub const BULK_TIER_HIGH_RATE: f64 = 0.85;

/// Quantity at which the first bulk tier starts.
pub const BULK_TIER_LOW_QUANTITY: i64 = 5;

/// Multiplier for the first bulk tier (10% off).
pub const BULK_TIER_LOW_RATE: f64 = 0.9;

/// Discount percent applied to featured products in their serialized view.
pub const FEATURED_DISCOUNT_PERCENT: f64 = 10.0;

/// Round to two decimal places (cents).
///
/// Rounds the exact binary value; exact half-cent ties go to the even cent.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Price after taking `percent` off, rounded to cents.
///
/// ```
/// use goldtiger_core::pricing::apply_discount;
///
/// assert_eq!(apply_discount(200.0, 10.0), 180.0);
/// assert_eq!(apply_discount(200.0, 0.0), 200.0);
/// ```
pub fn apply_discount(price: f64, percent: f64) -> f64 {
    round2(price * (1.0 - percent / 100.0))
}

/// Total price for `quantity` units with tiered bulk pricing.
///
/// Boundaries belong to the steeper tier: exactly 10 units gets 15% off,
/// exactly 5 units gets 10% off.
pub fn bulk_price(price: f64, quantity: i64) -> f64 {
    let total = price * quantity as f64;
    if quantity >= BULK_TIER_HIGH_QUANTITY {
        round2(total * BULK_TIER_HIGH_RATE)
    } else if quantity >= BULK_TIER_LOW_QUANTITY {
        round2(total * BULK_TIER_LOW_RATE)
    } else {
        round2(total)
    }
}

//! Field checks for the administrative insert and update paths.
//!
//! Every argument is optional so the same checks serve both a full create
//! and a partial update. Rating and discount are intentionally unbounded.

use crate::error::CoreError;

/// Validate product fields that are present.
pub fn validate_product_fields(
    name: Option<&str>,
    category: Option<&str>,
    price: Option<f64>,
    review_count: Option<i32>,
) -> Result<(), CoreError> {
    if let Some(name) = name {
        require_non_empty("name", name)?;
    }
    if let Some(category) = category {
        require_non_empty("category", category)?;
    }
    if let Some(price) = price {
        if !price.is_finite() || price < 0.0 {
            return Err(CoreError::Validation(format!(
                "price must be a non-negative number, got {price}"
            )));
        }
    }
    if let Some(review_count) = review_count {
        if review_count < 0 {
            return Err(CoreError::Validation(format!(
                "review_count must be non-negative, got {review_count}"
            )));
        }
    }
    Ok(())
}

/// Validate the fields of a new product variant.
pub fn validate_variant_fields(
    color: &str,
    size: &str,
    sku: &str,
    stock: Option<i32>,
) -> Result<(), CoreError> {
    require_non_empty("color", color)?;
    require_non_empty("size", size)?;
    require_non_empty("sku", sku)?;
    if let Some(stock) = stock {
        if stock < 0 {
            return Err(CoreError::Validation(format!(
                "stock must be non-negative, got {stock}"
            )));
        }
    }
    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn complete_product_passes() {
        assert!(
            validate_product_fields(Some("Runner"), Some("running"), Some(0.0), Some(0)).is_ok()
        );
    }

    #[test]
    fn absent_fields_are_skipped() {
        assert!(validate_product_fields(None, None, None, None).is_ok());
    }

    #[test]
    fn blank_name_rejected() {
        assert_matches!(
            validate_product_fields(Some("   "), None, None, None),
            Err(CoreError::Validation(msg)) if msg.contains("name")
        );
    }

    #[test]
    fn negative_or_nan_price_rejected() {
        assert_matches!(
            validate_product_fields(None, None, Some(-0.01), None),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_product_fields(None, None, Some(f64::NAN), None),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn negative_review_count_rejected() {
        assert_matches!(
            validate_product_fields(None, None, None, Some(-1)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn variant_requires_sku_and_non_negative_stock() {
        assert!(validate_variant_fields("gold", "US 9", "GT9000", Some(0)).is_ok());
        assert_matches!(
            validate_variant_fields("gold", "US 9", "", None),
            Err(CoreError::Validation(msg)) if msg.contains("sku")
        );
        assert_matches!(
            validate_variant_fields("gold", "US 9", "GT9000", Some(-2)),
            Err(CoreError::Validation(_))
        );
    }
}

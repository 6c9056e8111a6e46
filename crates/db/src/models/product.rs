//! Product model, serialized view, and DTOs.

use goldtiger_core::error::CoreError;
use goldtiger_core::pricing::{self, FEATURED_DISCOUNT_PERCENT};
use goldtiger_core::text_list;
use goldtiger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::product_variant::ProductVariantView;

/// Rating given to products inserted without one.
pub const DEFAULT_RATING: f64 = 4.5;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `products` table.
///
/// `features` is stored as JSON text; use [`Product::to_view`] for the
/// decoded form.
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: Option<String>,
    pub features: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub is_featured: bool,
    pub rating: f64,
    pub review_count: i32,
}

impl Product {
    /// Price after a percentage discount, rounded to cents.
    pub fn apply_discount(&self, percent: f64) -> f64 {
        pricing::apply_discount(self.price, percent)
    }

    /// Total for `quantity` units with tiered bulk pricing.
    pub fn calculate_bulk_price(&self, quantity: i64) -> f64 {
        pricing::bulk_price(self.price, quantity)
    }

    /// Decode the stored feature list.
    pub fn feature_list(&self) -> Result<Vec<String>, CoreError> {
        text_list::decode(self.features.as_deref())
    }

    /// Build the client-facing representation with derived pricing fields.
    ///
    /// Fails only if the stored feature text is corrupt.
    pub fn to_view(&self) -> Result<ProductView, CoreError> {
        Ok(ProductView {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price,
            description: self.description.clone(),
            features: self.feature_list()?,
            created_at: self.created_at,
            updated_at: self.updated_at,
            is_featured: self.is_featured,
            rating: self.rating,
            review_count: self.review_count,
            discount_price: self
                .is_featured
                .then(|| self.apply_discount(FEATURED_DISCOUNT_PERCENT)),
            bulk_price_5: self.calculate_bulk_price(5),
            bulk_price_10: self.calculate_bulk_price(10),
        })
    }
}

// ---------------------------------------------------------------------------
// Views (response payloads)
// ---------------------------------------------------------------------------

/// Serialized product as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub is_featured: bool,
    pub rating: f64,
    pub review_count: i32,
    /// 10% off for featured products, `null` otherwise.
    pub discount_price: Option<f64>,
    pub bulk_price_5: f64,
    pub bulk_price_10: f64,
}

/// A product together with all of its variants.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: ProductView,
    pub variants: Vec<ProductVariantView>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for the administrative product insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    /// Defaults to `false` when omitted.
    pub is_featured: Option<bool>,
    /// Defaults to [`DEFAULT_RATING`] when omitted.
    pub rating: Option<f64>,
    /// Defaults to `0` when omitted.
    pub review_count: Option<i32>,
}

/// DTO for a partial product update. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_featured: Option<bool>,
    pub rating: Option<f64>,
    pub review_count: Option<i32>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn product(price: f64, is_featured: bool) -> Product {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Product {
            id: 7,
            name: "PHOENIX ASCENDANT PRO".into(),
            category: "basketball".into(),
            price,
            description: None,
            features: Some(r#"["Cushioning","Plate"]"#.into()),
            created_at: ts,
            updated_at: ts,
            is_featured,
            rating: DEFAULT_RATING,
            review_count: 0,
        }
    }

    #[test]
    fn featured_product_gets_ten_percent_discount() {
        let view = product(229.99, true).to_view().unwrap();
        assert_eq!(view.discount_price, Some(206.99));
    }

    #[test]
    fn featured_discount_rounds_half_cent_down() {
        let view = product(99.95, true).to_view().unwrap();
        assert_eq!(view.discount_price, Some(89.95));
    }

    #[test]
    fn bulk_tiers_round_half_cent_to_even() {
        assert_eq!(product(12.25, false).to_view().unwrap().bulk_price_5, 55.12);
        assert_eq!(product(19.95, false).to_view().unwrap().bulk_price_10, 169.57);
    }

    #[test]
    fn unfeatured_product_has_no_discount() {
        let view = product(189.99, false).to_view().unwrap();
        assert_eq!(view.discount_price, None);
    }

    #[test]
    fn view_carries_both_bulk_tiers() {
        let view = product(100.0, false).to_view().unwrap();
        assert_eq!(view.bulk_price_5, 450.0);
        assert_eq!(view.bulk_price_10, 850.0);
    }

    #[test]
    fn features_decode_in_order() {
        let view = product(100.0, false).to_view().unwrap();
        assert_eq!(view.features, vec!["Cushioning", "Plate"]);
    }

    #[test]
    fn missing_features_serialize_as_empty_list() {
        let mut p = product(100.0, false);
        p.features = None;
        let json = serde_json::to_value(p.to_view().unwrap()).unwrap();
        assert_eq!(json["features"], serde_json::json!([]));
        assert!(json["discount_price"].is_null());
    }

    #[test]
    fn timestamps_serialize_as_iso8601() {
        let json = serde_json::to_value(product(100.0, true).to_view().unwrap()).unwrap();
        assert_eq!(json["created_at"], "2024-03-01T12:00:00Z");
        assert_eq!(json["updated_at"], "2024-03-01T12:00:00Z");
    }

    #[test]
    fn view_has_exactly_the_public_fields() {
        let json = serde_json::to_value(product(100.0, true).to_view().unwrap()).unwrap();
        let mut keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "bulk_price_10",
                "bulk_price_5",
                "category",
                "created_at",
                "description",
                "discount_price",
                "features",
                "id",
                "is_featured",
                "name",
                "price",
                "rating",
                "review_count",
                "updated_at",
            ]
        );
    }

    #[test]
    fn corrupt_features_fail_the_view() {
        let mut p = product(100.0, false);
        p.features = Some("{oops".into());
        assert_matches!(p.to_view(), Err(CoreError::Internal(_)));
    }
}

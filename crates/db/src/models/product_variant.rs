//! Product variant model, serialized view, and DTOs.

use goldtiger_core::error::CoreError;
use goldtiger_core::stock::{self, ASSUMED_DAILY_SALES, DEFAULT_LOW_STOCK_THRESHOLD};
use goldtiger_core::text_list;
use goldtiger_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `product_variants` table.
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct ProductVariant {
    pub id: DbId,
    pub product_id: DbId,
    pub color: String,
    pub size: String,
    pub stock: i32,
    pub image_paths: Option<String>,
    pub sku: String,
}

impl ProductVariant {
    /// `true` when fewer than `threshold` units remain.
    pub fn is_low_stock(&self, threshold: i32) -> bool {
        stock::is_low_stock(self.stock, threshold)
    }

    /// Days of stock left at `daily_sales` units per day. Infinite when the
    /// sales rate is zero or negative.
    pub fn days_until_stockout(&self, daily_sales: f64) -> f64 {
        stock::days_until_stockout(self.stock, daily_sales)
    }

    pub fn image_path_list(&self) -> Result<Vec<String>, CoreError> {
        text_list::decode(self.image_paths.as_deref())
    }

    /// Build the client-facing representation with derived stock fields.
    pub fn to_view(&self) -> Result<ProductVariantView, CoreError> {
        Ok(ProductVariantView {
            id: self.id,
            product_id: self.product_id,
            color: self.color.clone(),
            size: self.size.clone(),
            stock: self.stock,
            image_paths: self.image_path_list()?,
            sku: self.sku.clone(),
            availability: stock::availability_label(self.stock),
            is_low_stock: self.is_low_stock(DEFAULT_LOW_STOCK_THRESHOLD),
            estimated_stockout_days: self.days_until_stockout(ASSUMED_DAILY_SALES),
        })
    }
}

/// Serialized variant as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ProductVariantView {
    pub id: DbId,
    pub product_id: DbId,
    pub color: String,
    pub size: String,
    pub stock: i32,
    pub image_paths: Vec<String>,
    pub sku: String,
    pub availability: &'static str,
    pub is_low_stock: bool,
    /// Serialized as `null` when infinite.
    pub estimated_stockout_days: f64,
}

/// DTO for inserting a variant under an existing product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductVariant {
    pub color: String,
    pub size: String,
    /// Defaults to `0` when omitted.
    pub stock: Option<i32>,
    pub image_paths: Option<Vec<String>>,
    pub sku: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(stock: i32) -> ProductVariant {
        ProductVariant {
            id: 1,
            product_id: 1,
            color: "gold".into(),
            size: "US 9".into(),
            stock,
            image_paths: Some(
                r#"["/src/assets/shoes/p/gold/img01.jpg","/src/assets/shoes/p/gold/img02.jpg"]"#
                    .into(),
            ),
            sku: "GT1000".into(),
        }
    }

    #[test]
    fn out_of_stock_variant_is_low_and_unavailable() {
        let view = variant(0).to_view().unwrap();
        assert_eq!(view.availability, "Out of Stock");
        assert!(view.is_low_stock);
        assert_eq!(view.estimated_stockout_days, 0.0);
    }

    #[test]
    fn seeded_stock_level_is_in_stock() {
        let view = variant(25).to_view().unwrap();
        assert_eq!(view.availability, "In Stock");
        assert!(!view.is_low_stock);
        assert_eq!(view.estimated_stockout_days, 12.5);
    }

    #[test]
    fn low_stock_threshold_defaults_to_five() {
        assert!(variant(4).to_view().unwrap().is_low_stock);
        assert!(!variant(5).to_view().unwrap().is_low_stock);
    }

    #[test]
    fn stockout_is_infinite_without_sales() {
        let v = variant(25);
        assert_eq!(v.days_until_stockout(0.0), f64::INFINITY);
        assert_eq!(v.days_until_stockout(-1.0), f64::INFINITY);
    }

    #[test]
    fn infinite_stockout_serializes_as_null() {
        let v = variant(25);
        let mut view = v.to_view().unwrap();
        view.estimated_stockout_days = v.days_until_stockout(0.0);
        assert!(view.estimated_stockout_days.is_infinite());
        let json = serde_json::to_value(view).unwrap();
        assert!(json["estimated_stockout_days"].is_null());
        assert_eq!(json["stock"], 25);
    }

    #[test]
    fn image_paths_decode_in_order() {
        let view = variant(3).to_view().unwrap();
        assert_eq!(view.image_paths.len(), 2);
        assert!(view.image_paths[0].ends_with("img01.jpg"));
        assert!(view.image_paths[1].ends_with("img02.jpg"));
    }

    #[test]
    fn view_serializes_expected_fields() {
        let json = serde_json::to_value(variant(2).to_view().unwrap()).unwrap();
        assert_eq!(json["sku"], "GT1000");
        assert_eq!(json["availability"], "In Stock");
        assert_eq!(json["is_low_stock"], true);
        assert_eq!(json["estimated_stockout_days"], 1.0);
        assert_eq!(json.as_object().unwrap().len(), 10);
    }
}

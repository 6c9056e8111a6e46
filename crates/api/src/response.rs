//! Response envelope types for API handlers.
//!
//! Each endpoint wraps its payload under a key named after the resource
//! (`{"products": [...]}`, `{"product": {...}}`), which is the shape the
//! storefront consumes.

use goldtiger_db::models::product::{ProductDetail, ProductView};
use goldtiger_db::models::product_variant::ProductVariantView;
use serde::Serialize;

/// `{ "products": [...] }`
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductView>,
}

/// `{ "product": {...} }` for create and update.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: ProductView,
}

/// `{ "product": {..., "variants": [...]} }`
#[derive(Debug, Serialize)]
pub struct ProductDetailResponse {
    pub product: ProductDetail,
}

/// `{ "variants": [...] }`
#[derive(Debug, Serialize)]
pub struct VariantsResponse {
    pub variants: Vec<ProductVariantView>,
}

/// `{ "variant": {...} }`
#[derive(Debug, Serialize)]
pub struct VariantResponse {
    pub variant: ProductVariantView,
}

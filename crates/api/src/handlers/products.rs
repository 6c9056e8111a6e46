//! Handlers for products and their variants.
//!
//! Listing and detail endpoints serialize through the model views, so every
//! response carries the derived pricing and stock fields.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use goldtiger_core::error::CoreError;
use goldtiger_core::types::DbId;
use goldtiger_core::validation::{validate_product_fields, validate_variant_fields};
use goldtiger_db::models::product::{CreateProduct, Product, ProductDetail, UpdateProduct};
use goldtiger_db::models::product_variant::{
    CreateProductVariant, ProductVariant, ProductVariantView,
};

use crate::error::AppResult;
use crate::response::{
    ProductDetailResponse, ProductResponse, ProductsResponse, VariantResponse, VariantsResponse,
};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn require_product(state: &AppState, id: DbId) -> AppResult<Product> {
    state
        .store
        .find_product(id)
        .await?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "Product",
                id,
            }
            .into()
        })
}

fn variant_views(variants: &[ProductVariant]) -> Result<Vec<ProductVariantView>, CoreError> {
    variants.iter().map(ProductVariant::to_view).collect()
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

/// GET /api/products
///
/// Every product in store order with derived pricing fields.
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<ProductsResponse>> {
    let products = state.store.list_products().await?;
    let products = products
        .iter()
        .map(Product::to_view)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(ProductsResponse { products }))
}

/// GET /api/products/{id}
///
/// One product with all of its variants.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProductDetailResponse>> {
    let product = require_product(&state, id).await?;
    let variants = state.store.list_variants_for_product(id).await?;

    Ok(Json(ProductDetailResponse {
        product: ProductDetail {
            product: product.to_view()?,
            variants: variant_views(&variants)?,
        },
    }))
}

/// POST /api/products
///
/// Administrative insert. Rating is not range-checked.
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    validate_product_fields(
        Some(input.name.as_str()),
        Some(input.category.as_str()),
        Some(input.price),
        input.review_count,
    )?;

    let product = state.store.create_product(&input).await?;

    tracing::info!(product_id = product.id, name = %product.name, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            product: product.to_view()?,
        }),
    ))
}

/// PUT /api/products/{id}
///
/// Partial update; omitted fields keep their current value.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<ProductResponse>> {
    validate_product_fields(
        input.name.as_deref(),
        input.category.as_deref(),
        input.price,
        input.review_count,
    )?;

    let product = state
        .store
        .update_product(id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Product",
            id,
        })?;

    tracing::info!(product_id = id, "Product updated");

    Ok(Json(ProductResponse {
        product: product.to_view()?,
    }))
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

/// GET /api/products/{id}/variants
pub async fn list_variants(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<VariantsResponse>> {
    require_product(&state, id).await?;
    let variants = state.store.list_variants_for_product(id).await?;

    Ok(Json(VariantsResponse {
        variants: variant_views(&variants)?,
    }))
}

/// POST /api/products/{id}/variants
///
/// Duplicate SKUs and duplicate (color, size) pairs are rejected with 409.
pub async fn create_variant(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateProductVariant>,
) -> AppResult<impl IntoResponse> {
    validate_variant_fields(&input.color, &input.size, &input.sku, input.stock)?;

    let variant = state.store.create_variant(id, &input).await?;

    tracing::info!(
        product_id = id,
        variant_id = variant.id,
        sku = %variant.sku,
        "Product variant created"
    );

    Ok((
        StatusCode::CREATED,
        Json(VariantResponse {
            variant: variant.to_view()?,
        }),
    ))
}

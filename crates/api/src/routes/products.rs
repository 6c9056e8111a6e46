use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted at `/api/products`.
///
/// ```text
/// GET, POST   /                   list_products, create_product
/// GET, PUT    /{id}               get_product, update_product
/// GET, POST   /{id}/variants      list_variants, create_variant
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/{id}",
            get(products::get_product).put(products::update_product),
        )
        .route(
            "/{id}/variants",
            get(products::list_variants).post(products::create_variant),
        )
}

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::products::handlers;
use crate::features::products::services::ProductService;

/// Create routes for the products feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route(
            "/api/produk",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/api/produk/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .with_state(service)
}

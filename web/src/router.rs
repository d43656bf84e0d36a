//! Router assembly for the catalog service.
//!
//! Composes the product handlers, health check, root index, JSON 404
//! fallback, and the middleware stack (trace, correlation IDs, CORS, panic
//! recovery) into a single Axum application.

use crate::handlers::{self, products};
use crate::middleware::{catch_panic_layer, correlation_id_layer};
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the application router with all routes and middleware.
///
/// # Routes
///
/// - `GET /` - endpoint index
/// - `GET /health` - liveness check
/// - `GET /api/products` - list products
/// - `POST /api/products` - create a product
/// - `GET /api/products/:id` - get a product
/// - `PATCH /api/products/:id` - partially update a product
/// - `DELETE /api/products/:id` - delete a product
///
/// Everything else falls through to a JSON 404.
///
/// # Example
///
/// ```ignore
/// let state = production_state();
/// let app = app(state, "http://localhost:3000".parse()?);
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:4000").await?;
/// axum::serve(listener, app).await?;
/// ```
#[must_use]
pub fn app(state: AppState, client_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(client_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health::health_check))
        .nest("/api", product_routes())
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(correlation_id_layer())
        .layer(cors)
        .layer(catch_panic_layer())
        .with_state(state)
}

/// Product resource routes, nested under `/api`.
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/:id",
            get(products::get_product)
                .patch(products::update_product)
                .delete(products::delete_product),
        )
}

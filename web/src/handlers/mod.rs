//! HTTP handlers for the catalog service.

pub mod health;
pub mod products;

use crate::error::AppError;
use axum::http::StatusCode;

/// Plain-text index of the available endpoints, served at `/`.
#[allow(clippy::unused_async)]
pub async fn index() -> &'static str {
    "Product catalog API. Available endpoints: \
     GET /api/products, POST /api/products, GET /api/products/:id, \
     PATCH /api/products/:id, DELETE /api/products/:id"
}

/// JSON 404 for routes no handler matches.
#[allow(clippy::unused_async)]
pub async fn not_found() -> AppError {
    AppError::new(StatusCode::NOT_FOUND, "Not found")
}

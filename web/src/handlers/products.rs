//! HTTP handlers for the product resource.
//!
//! Each handler translates one HTTP operation into a store call: reads go
//! through [`Store::state`](catalog_runtime::Store::state), mutations are
//! dispatched as a [`CatalogAction`] and the resulting event is mapped to a
//! status code and JSON body.
//!
//! Wire leniency lives here: `price` and `stock` accept a JSON number or a
//! numeric string (coerced before validation, never stored raw), and
//! unknown body fields are ignored.

use crate::error::AppError;
use crate::extractors::CorrelationId;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use catalog_core::{
    CatalogAction, CatalogError, CatalogEvent, Product, ProductDraft, ProductId, ProductPatch,
};
use serde::Deserialize;

/// A wire value that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum NumberInput {
    /// Already numeric.
    Number(f64),
    /// Needs parsing.
    Text(String),
}

impl NumberInput {
    fn as_f64(&self, field: &'static str) -> Result<f64, CatalogError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| CatalogError::validation(format!("{field} must be a number"))),
        }
    }

    fn as_u32(&self, field: &'static str) -> Result<u32, CatalogError> {
        let invalid =
            || CatalogError::validation(format!("{field} must be a non-negative integer"));
        match self {
            Self::Number(n) => {
                if n.fract() == 0.0 && *n >= 0.0 && *n <= f64::from(u32::MAX) {
                    // Range and integrality checked above
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let stock = *n as u32;
                    Ok(stock)
                } else {
                    Err(invalid())
                }
            }
            Self::Text(s) => s.trim().parse().map_err(|_| invalid()),
        }
    }
}

/// Request body for `POST /api/products`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    price: Option<NumberInput>,
    #[serde(default)]
    stock: Option<NumberInput>,
}

impl CreateProductRequest {
    /// Coerces and validates the body into a draft.
    fn into_draft(self) -> Result<ProductDraft, CatalogError> {
        let required = |field: &'static str| {
            move || CatalogError::validation(format!("{field} is required"))
        };

        let name = self.name.ok_or_else(required("name"))?;
        let category = self.category.ok_or_else(required("category"))?;
        let description = self.description.ok_or_else(required("description"))?;
        let price = self.price.ok_or_else(required("price"))?.as_f64("price")?;
        let stock = self.stock.ok_or_else(required("stock"))?.as_u32("stock")?;

        ProductDraft::new(&name, &category, &description, price, stock)
    }
}

/// Request body for `PATCH /api/products/:id`.
///
/// Any subset of the create fields; `null` counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    price: Option<NumberInput>,
    #[serde(default)]
    stock: Option<NumberInput>,
}

impl UpdateProductRequest {
    /// Coerces and validates the supplied fields into a patch.
    fn into_patch(self) -> Result<ProductPatch, CatalogError> {
        let price = self.price.map(|p| p.as_f64("price")).transpose()?;
        let stock = self.stock.map(|s| s.as_u32("stock")).transpose()?;

        ProductPatch::new(
            self.name.as_deref(),
            self.category.as_deref(),
            self.description.as_deref(),
            price,
            stock,
        )
    }
}

/// List all products.
///
/// # Endpoint
///
/// ```text
/// GET /api/products
/// ```
///
/// Returns the full collection in insertion order, 200.
pub async fn list_products(State(store): State<AppState>) -> Json<Vec<Product>> {
    let products = store.state(|s| s.products().to_vec()).await;
    Json(products)
}

/// Get one product by id.
///
/// # Endpoint
///
/// ```text
/// GET /api/products/:id
/// ```
///
/// # Errors
///
/// 404 if no product has the given id.
pub async fn get_product(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let id = ProductId::new(id);
    let product = store.state(|s| s.get(&id).cloned()).await;
    product
        .map(Json)
        .ok_or_else(|| AppError::not_found("Product", id))
}

/// Create a product.
///
/// # Endpoint
///
/// ```text
/// POST /api/products
/// Content-Type: application/json
///
/// {
///   "name": "Laptop",
///   "category": "Computers",
///   "description": "Slim ultrabook",
///   "price": 999.99,
///   "stock": 4
/// }
/// ```
///
/// Returns the created product with its generated id, 201.
///
/// # Errors
///
/// 400 if the body is malformed or any required field is missing or
/// invalid; the store is left untouched.
pub async fn create_product(
    State(store): State<AppState>,
    correlation_id: CorrelationId,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let Json(request) = body?;
    let draft = request.into_draft()?;

    tracing::info!(
        correlation_id = %correlation_id.0,
        name = %draft.name(),
        "Creating product"
    );

    match store.send(CatalogAction::Create { draft }).await? {
        CatalogEvent::Created { product } => Ok((StatusCode::CREATED, Json(product))),
        CatalogEvent::Updated { .. } | CatalogEvent::Deleted { .. } => {
            Err(AppError::internal("Unexpected catalog event"))
        }
    }
}

/// Partially update a product.
///
/// # Endpoint
///
/// ```text
/// PATCH /api/products/:id
/// Content-Type: application/json
///
/// { "stock": 3 }
/// ```
///
/// Only the supplied fields are overwritten; the response carries the full
/// updated record, 200.
///
/// # Errors
///
/// 404 for an unknown id; 400 for a malformed body, an invalid field, or a
/// body that supplies no field at all.
pub async fn update_product(
    State(store): State<AppState>,
    correlation_id: CorrelationId,
    Path(id): Path<String>,
    body: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<Product>, AppError> {
    let Json(request) = body?;
    let patch = request.into_patch()?;
    let id = ProductId::new(id);

    tracing::info!(correlation_id = %correlation_id.0, id = %id, "Updating product");

    match store.send(CatalogAction::Update { id, patch }).await? {
        CatalogEvent::Updated { product } => Ok(Json(product)),
        CatalogEvent::Created { .. } | CatalogEvent::Deleted { .. } => {
            Err(AppError::internal("Unexpected catalog event"))
        }
    }
}

/// Delete a product.
///
/// # Endpoint
///
/// ```text
/// DELETE /api/products/:id
/// ```
///
/// Removal is immediate and unrecoverable; the id is never reissued.
/// Returns 204 with no body.
///
/// # Errors
///
/// 404 for an unknown id.
pub async fn delete_product(
    State(store): State<AppState>,
    correlation_id: CorrelationId,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = ProductId::new(id);

    tracing::info!(correlation_id = %correlation_id.0, id = %id, "Deleting product");

    match store.send(CatalogAction::Delete { id }).await? {
        CatalogEvent::Deleted { .. } => Ok(StatusCode::NO_CONTENT),
        CatalogEvent::Created { .. } | CatalogEvent::Updated { .. } => {
            Err(AppError::internal("Unexpected catalog event"))
        }
    }
}

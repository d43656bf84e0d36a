//! Product catalog HTTP API server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin catalog-server
//! ```
//!
//! Configuration comes from the environment:
//!
//! - `CATALOG_ADDR` - socket address to bind (default `0.0.0.0:4000`)
//! - `CATALOG_CLIENT_ORIGIN` - allowed CORS origin
//!   (default `http://localhost:3000`)
//!
//! # Example Requests
//!
//! ```bash
//! # Create a product
//! curl -X POST http://localhost:4000/api/products \
//!   -H "Content-Type: application/json" \
//!   -d '{
//!     "name": "Laptop",
//!     "category": "Computers",
//!     "description": "Slim ultrabook",
//!     "price": 999.99,
//!     "stock": 4
//!   }'
//!
//! # List products
//! curl http://localhost:4000/api/products
//!
//! # Update stock
//! curl -X PATCH http://localhost:4000/api/products/<id> \
//!   -H "Content-Type: application/json" \
//!   -d '{"stock": 3}'
//! ```

use anyhow::Context;
use axum::http::HeaderValue;
use catalog_web::{production_state, router, ServerConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ServerConfig::from_env()?;
    let client_origin: HeaderValue = config
        .client_origin
        .parse()
        .with_context(|| format!("invalid client origin: {}", config.client_origin))?;

    // Create the store with the production clock and id generator
    let state = production_state();
    let app = router::app(state, client_origin);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    info!("Server listening on http://{}", config.addr);
    info!("Allowing browser requests from {}", config.client_origin);
    info!("API Endpoints:");
    info!("  GET    /api/products      - List products");
    info!("  POST   /api/products      - Create product");
    info!("  GET    /api/products/:id  - Get product");
    info!("  PATCH  /api/products/:id  - Update product");
    info!("  DELETE /api/products/:id  - Delete product");
    info!("  GET    /health            - Health check");

    axum::serve(listener, app).await?;

    Ok(())
}

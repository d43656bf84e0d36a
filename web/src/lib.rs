//! Axum resource API for the product catalog.
//!
//! This crate is the imperative shell around the catalog's functional core:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, JSON, CORS
//! │  - Request parsing and coercion         │  ← Correlation IDs
//! │  - Response serialization               │  ← Logging, panic recovery
//! ├─────────────────────────────────────────┤
//! │         Functional Core                 │
//! │  - Pure business logic (reducer)        │  ← Testable at memory speed
//! │  - State transformations                │  ← No I/O, no side effects
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract data** from path and JSON body, coercing wire types
//! 3. **Build Action** from the validated input
//! 4. **Dispatch** the action through the [`Store`](catalog_runtime::Store)
//! 5. **Map the outcome** to an HTTP status and JSON body
//!
//! Reads skip the action machinery and copy what they need out of state
//! under the read lock.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use config::ServerConfig;
pub use error::AppError;
pub use extractors::CorrelationId;
pub use middleware::{correlation_id_layer, CORRELATION_ID_HEADER};
pub use state::{production_state, AppState, CatalogStore};

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;

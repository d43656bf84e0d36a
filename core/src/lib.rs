//! # Catalog Core
//!
//! Domain types and business logic for the product catalog service.
//!
//! This crate is the functional core: it knows nothing about HTTP, locks,
//! or the async runtime. It provides:
//!
//! - **State**: [`CatalogState`], the authoritative ordered collection of
//!   products plus the record of every id ever issued
//! - **Action**: [`CatalogAction`], the commands a caller can dispatch
//! - **Reducer**: [`CatalogReducer`], a pure function
//!   `(State, Action, Environment) → Outcome`
//! - **Environment**: injected capabilities ([`Clock`], [`IdGenerator`])
//!   so time and id format are test-controllable
//!
//! ## Example
//!
//! ```
//! use catalog_core::{
//!     CatalogAction, CatalogEnvironment, CatalogEvent, CatalogReducer, CatalogState,
//!     ProductDraft, RandomIdGenerator, Reducer, SystemClock,
//! };
//! use std::sync::Arc;
//!
//! let env = CatalogEnvironment::new(Arc::new(SystemClock), Arc::new(RandomIdGenerator));
//! let reducer = CatalogReducer::new();
//! let mut state = CatalogState::new();
//!
//! let draft = ProductDraft::new("Laptop", "Computers", "Slim ultrabook", 999.0, 4)?;
//! let event = reducer.reduce(&mut state, CatalogAction::Create { draft }, &env)?;
//! assert!(matches!(event, CatalogEvent::Created { .. }));
//! assert_eq!(state.count(), 1);
//! # Ok::<(), catalog_core::CatalogError>(())
//! ```

pub mod environment;
pub mod error;
pub mod reducer;
pub mod types;

pub use environment::{CatalogEnvironment, Clock, IdGenerator, RandomIdGenerator, SystemClock};
pub use error::CatalogError;
pub use reducer::{CatalogReducer, Reducer};
pub use types::{
    CatalogAction, CatalogEvent, CatalogState, Product, ProductDraft, ProductId, ProductPatch,
};

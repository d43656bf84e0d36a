//! Application state for Axum handlers.
//!
//! The only shared state is the catalog store itself; handlers receive it
//! through Axum's `State` extractor and never hold copies of the
//! collection across requests.

use catalog_core::{CatalogAction, CatalogEnvironment, CatalogReducer, CatalogState};
use catalog_runtime::Store;
use std::sync::Arc;

/// The concrete store type this service dispatches through.
pub type CatalogStore = Store<CatalogState, CatalogAction, CatalogEnvironment, CatalogReducer>;

/// Application state shared across all HTTP handlers.
pub type AppState = Arc<CatalogStore>;

/// Build the shared state from an explicit environment.
///
/// Tests inject deterministic clocks and id generators here; the binary
/// uses [`production_state`].
#[must_use]
pub fn app_state(environment: CatalogEnvironment) -> AppState {
    Arc::new(Store::new(
        CatalogState::new(),
        CatalogReducer::new(),
        environment,
    ))
}

/// Shared state wired with the production clock and id generator.
#[must_use]
pub fn production_state() -> AppState {
    app_state(CatalogEnvironment::production())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fresh_state_is_empty() {
        let state = production_state();
        assert_eq!(state.state(CatalogState::count).await, 0);
    }

    #[test]
    fn test_state_is_clone() {
        // Axum requires the state type to be Clone
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}

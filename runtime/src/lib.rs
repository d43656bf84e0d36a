//! # Catalog Runtime
//!
//! The [`Store`] - runtime coordinator for a reducer.
//!
//! The Store owns state behind a `tokio::sync::RwLock` and routes every
//! action through the reducer while holding the write lock. That single
//! mutual-exclusion region is what upgrades the single-threaded reference
//! behavior to a multi-threaded host: concurrent `send()` calls serialize
//! at the reducer, so there are no lost updates and no duplicate ids.
//!
//! Reads go through [`Store::state`], which borrows the state to a closure
//! under the read lock; the lock never escapes to callers.
//!
//! ## Example
//!
//! ```
//! use catalog_core::{
//!     CatalogAction, CatalogEnvironment, CatalogReducer, CatalogState, ProductDraft,
//! };
//! use catalog_runtime::Store;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), catalog_core::CatalogError> {
//! let store = Store::new(
//!     CatalogState::new(),
//!     CatalogReducer::new(),
//!     CatalogEnvironment::production(),
//! );
//!
//! let draft = ProductDraft::new("Keyboard", "Peripherals", "Tenkeyless", 49.0, 12)?;
//! store.send(CatalogAction::Create { draft }).await?;
//!
//! let count = store.state(catalog_core::CatalogState::count).await;
//! assert_eq!(count, 1);
//! # Ok(())
//! # }
//! ```

use catalog_core::Reducer;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Runtime coordinator for a reducer.
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    S: Send + Sync + 'static,
    A: Send + 'static,
    E: Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
        }
    }

    /// Send an action to the store.
    ///
    /// Acquires the write lock on state, runs the reducer with
    /// `(state, action, environment)`, and returns the reducer's outcome.
    /// Multiple concurrent `send()` calls serialize at this lock; each
    /// mutation is a single atomic in-memory step.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> R::Output {
        metrics::counter!("store.actions.total").increment(1);

        let mut state = self.state.write().await;
        tracing::trace!("Acquired write lock on state");

        let start = std::time::Instant::now();
        let output = self.reducer.reduce(&mut state, action, &self.environment);
        metrics::histogram!("store.reducer.duration_seconds").record(start.elapsed().as_secs_f64());

        output
    }

    /// Read current state via a closure.
    ///
    /// Access state through a closure to ensure the lock is released
    /// promptly:
    ///
    /// ```ignore
    /// let product_count = store.state(|s| s.count()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }
}

//! Reducer trait and the catalog's business logic.
//!
//! A reducer is a pure function `(State, Action, Environment) → Output`.
//! All catalog mutations flow through [`CatalogReducer::reduce`]; the
//! runtime guarantees at most one execution at a time, which is what makes
//! "no lost updates, no duplicate ids" hold.

use crate::environment::CatalogEnvironment;
use crate::error::CatalogError;
use crate::types::{CatalogAction, CatalogEvent, CatalogState, ProductId};

/// The Reducer trait - core abstraction for business logic.
///
/// # Type Parameters
///
/// - `State`: the domain state the reducer operates on
/// - `Action`: the action type it processes
/// - `Environment`: the injected dependencies it needs
/// - `Output`: the outcome handed back to the dispatching caller
pub trait Reducer {
    /// The state type this reducer operates on.
    type State;

    /// The action type this reducer processes.
    type Action;

    /// The environment type with injected dependencies.
    type Environment;

    /// The outcome returned to the caller that dispatched the action.
    type Output;

    /// Reduce an action into state changes and an outcome.
    ///
    /// This is a pure function that validates the action, updates state in
    /// place, and returns what happened.
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Self::Output;
}

/// Reducer for the product catalog.
#[derive(Clone, Copy, Debug, Default)]
pub struct CatalogReducer;

impl CatalogReducer {
    /// Creates a new `CatalogReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Draws candidate ids until one that was never issued comes up.
    ///
    /// Ids retired by deletion stay in the issued set, so a deleted id can
    /// never be handed to a later product.
    fn next_id(state: &CatalogState, env: &CatalogEnvironment) -> ProductId {
        loop {
            let id = env.ids.generate();
            if !state.was_issued(&id) {
                return id;
            }
        }
    }
}

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Action = CatalogAction;
    type Environment = CatalogEnvironment;
    type Output = Result<CatalogEvent, CatalogError>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Self::Output {
        match action {
            CatalogAction::Create { draft } => {
                let id = Self::next_id(state, env);
                let product = draft.into_product(id, env.clock.now());
                state.insert(product.clone());
                Ok(CatalogEvent::Created { product })
            }

            CatalogAction::Update { id, patch } => {
                // Missing id wins over an empty patch.
                let Some(product) = state.get_mut(&id) else {
                    return Err(CatalogError::not_found(id));
                };
                if patch.is_empty() {
                    return Err(CatalogError::validation(
                        "update body must supply at least one field",
                    ));
                }
                product.apply_patch(&patch);
                product.updated_at = env.clock.now();
                Ok(CatalogEvent::Updated {
                    product: product.clone(),
                })
            }

            CatalogAction::Delete { id } => {
                if state.remove(&id) {
                    Ok(CatalogEvent::Deleted { id })
                } else {
                    Err(CatalogError::not_found(id))
                }
            }
        }
    }
}

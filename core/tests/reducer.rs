//! Reducer tests.
//!
//! These live as integration tests (not `#[cfg(test)]` unit tests) because
//! they depend on `catalog-testing`, which in turn depends on `catalog-core`.
//! Keeping them in-crate would link two incompatible copies of `catalog-core`.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can panic

use catalog_core::*;
use catalog_testing::mocks::{FixedClock, ScriptedIdGenerator, SequentialIdGenerator};
use catalog_testing::ReducerTest;
use std::sync::Arc;

fn test_env() -> CatalogEnvironment {
    CatalogEnvironment::new(
        Arc::new(FixedClock::default()),
        Arc::new(SequentialIdGenerator::new("p")),
    )
}

fn draft(name: &str) -> ProductDraft {
    ProductDraft::new(name, "Electronics", "A thing", 100.0, 5).unwrap()
}

/// Runs a sequence of actions against a fresh state, returning the
/// state and the last outcome.
fn run_actions(
    env: &CatalogEnvironment,
    actions: Vec<CatalogAction>,
) -> (CatalogState, Result<CatalogEvent, CatalogError>) {
    let reducer = CatalogReducer::new();
    let mut state = CatalogState::new();
    let mut last = Err(CatalogError::validation("no action ran"));
    for action in actions {
        last = reducer.reduce(&mut state, action, env);
    }
    (state, last)
}

#[test]
fn create_stores_trimmed_fields_and_assigns_id() {
    ReducerTest::new(CatalogReducer::new())
        .with_env(test_env())
        .given_state(CatalogState::new())
        .when_action(CatalogAction::Create {
            draft: ProductDraft::new("  Laptop ", "Electronics", " 14-inch ", 999.99, 3)
                .unwrap(),
        })
        .then_state(|state| {
            assert_eq!(state.count(), 1);
            let product = &state.products()[0];
            assert_eq!(product.id.as_str(), "p-1");
            assert_eq!(product.name, "Laptop");
            assert_eq!(product.description, "14-inch");
            assert_eq!(product.stock, 3);
            assert_eq!(product.created_at, product.updated_at);
        })
        .then_output(|output| {
            let event = output.as_ref().unwrap();
            assert!(matches!(event, CatalogEvent::Created { product } if product.name == "Laptop"));
        })
        .run();
}

#[test]
fn create_assigns_distinct_ids() {
    let env = test_env();
    let (state, _) = run_actions(
        &env,
        vec![
            CatalogAction::Create { draft: draft("A") },
            CatalogAction::Create { draft: draft("B") },
            CatalogAction::Create { draft: draft("C") },
        ],
    );

    assert_eq!(state.count(), 3);
    let ids: Vec<_> = state.products().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p-1", "p-2", "p-3"]);
}

#[test]
fn create_redraws_on_id_collision() {
    let env = CatalogEnvironment::new(
        Arc::new(FixedClock::default()),
        Arc::new(ScriptedIdGenerator::new(["dup", "dup", "other"])),
    );
    let (state, _) = run_actions(
        &env,
        vec![
            CatalogAction::Create { draft: draft("A") },
            CatalogAction::Create { draft: draft("B") },
        ],
    );

    let ids: Vec<_> = state.products().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["dup", "other"]);
}

#[test]
fn deleted_id_is_never_reassigned() {
    let env = CatalogEnvironment::new(
        Arc::new(FixedClock::default()),
        Arc::new(ScriptedIdGenerator::new(["first", "first", "second"])),
    );
    let (state, last) = run_actions(
        &env,
        vec![
            CatalogAction::Create { draft: draft("A") },
            CatalogAction::Delete {
                id: ProductId::new("first"),
            },
            // Generator offers "first" again; the reducer must skip it.
            CatalogAction::Create { draft: draft("B") },
        ],
    );

    let event = last.unwrap();
    assert!(matches!(
        event,
        CatalogEvent::Created { product } if product.id.as_str() == "second"
    ));
    assert!(state.was_issued(&ProductId::new("first")));
    assert!(!state.exists(&ProductId::new("first")));
}

#[test]
fn update_overwrites_only_supplied_fields() {
    let env = test_env();
    let (state, last) = run_actions(
        &env,
        vec![
            CatalogAction::Create { draft: draft("A") },
            CatalogAction::Update {
                id: ProductId::new("p-1"),
                patch: ProductPatch::new(None, None, None, None, Some(2)).unwrap(),
            },
        ],
    );

    let event = last.unwrap();
    let CatalogEvent::Updated { product } = event else {
        panic!("expected Updated");
    };
    assert_eq!(product.stock, 2);
    assert_eq!(product.name, "A");
    assert_eq!(product.category, "Electronics");
    assert!((product.price - 100.0).abs() < f64::EPSILON);
    assert_eq!(state.get(&ProductId::new("p-1")).unwrap().stock, 2);
}

#[test]
fn update_missing_id_is_not_found() {
    ReducerTest::new(CatalogReducer::new())
        .with_env(test_env())
        .given_state(CatalogState::new())
        .when_action(CatalogAction::Update {
            id: ProductId::new("missing"),
            patch: ProductPatch::new(None, None, None, None, Some(2)).unwrap(),
        })
        .then_output(|output| {
            assert!(matches!(output, Err(CatalogError::NotFound(_))));
        })
        .run();
}

#[test]
fn update_with_empty_patch_is_rejected_and_state_untouched() {
    let env = test_env();
    let (state, last) = run_actions(
        &env,
        vec![
            CatalogAction::Create { draft: draft("A") },
            CatalogAction::Update {
                id: ProductId::new("p-1"),
                patch: ProductPatch::default(),
            },
        ],
    );

    assert!(matches!(last, Err(CatalogError::Validation(_))));
    let product = state.get(&ProductId::new("p-1")).unwrap();
    assert_eq!(product.name, "A");
    assert_eq!(product.stock, 5);
}

#[test]
fn missing_id_wins_over_empty_patch() {
    ReducerTest::new(CatalogReducer::new())
        .with_env(test_env())
        .given_state(CatalogState::new())
        .when_action(CatalogAction::Update {
            id: ProductId::new("missing"),
            patch: ProductPatch::default(),
        })
        .then_output(|output| {
            assert!(matches!(output, Err(CatalogError::NotFound(_))));
        })
        .run();
}

#[test]
fn delete_removes_and_reports_missing() {
    let env = test_env();
    let (state, last) = run_actions(
        &env,
        vec![
            CatalogAction::Create { draft: draft("A") },
            CatalogAction::Delete {
                id: ProductId::new("p-1"),
            },
        ],
    );
    assert_eq!(
        last.unwrap(),
        CatalogEvent::Deleted {
            id: ProductId::new("p-1")
        }
    );
    assert!(state.is_empty());

    let (_, last) = run_actions(
        &env,
        vec![CatalogAction::Delete {
            id: ProductId::new("never-existed"),
        }],
    );
    assert!(matches!(last, Err(CatalogError::NotFound(_))));
}

#[test]
fn count_tracks_creates_minus_deletes() {
    let env = test_env();
    let (state, _) = run_actions(
        &env,
        vec![
            CatalogAction::Create { draft: draft("A") },
            CatalogAction::Create { draft: draft("B") },
            CatalogAction::Create { draft: draft("C") },
            CatalogAction::Delete {
                id: ProductId::new("p-2"),
            },
        ],
    );

    assert_eq!(state.count(), 2);
    let names: Vec<_> = state.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["A", "C"]);
}

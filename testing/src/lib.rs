//! Testing utilities for the product catalog.
//!
//! Provides the [`ReducerTest`] Given-When-Then harness and deterministic
//! environment mocks so reducer behavior can be pinned down without real
//! time or randomness.

pub mod mocks;

pub use mocks::{FixedClock, ScriptedIdGenerator, SequentialIdGenerator};
pub use reducer_test::ReducerTest;

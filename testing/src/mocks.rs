//! Deterministic environment implementations for tests.

use catalog_core::{Clock, IdGenerator, ProductId};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Clock pinned to a single instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock stuck at the given instant.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// The instant this clock reports.
    #[must_use]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl Default for FixedClock {
    /// Pinned to 2024-01-01T00:00:00Z.
    #[allow(clippy::unwrap_used)] // Constant timestamp is always valid
    fn default() -> Self {
        Self::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Generator producing `<prefix>-1`, `<prefix>-2`, ... in order.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator with the given id prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> ProductId {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        ProductId::new(format!("{}-{n}", self.prefix))
    }
}

/// Generator that replays a scripted sequence of ids, then falls back to
/// sequential `gen-N` codes.
///
/// Scripting the same code twice is how tests provoke the reducer's
/// collision re-draw and never-reuse paths.
#[derive(Debug)]
pub struct ScriptedIdGenerator {
    scripted: Mutex<VecDeque<String>>,
    fallback: SequentialIdGenerator,
}

impl ScriptedIdGenerator {
    /// Creates a generator that yields the given codes first.
    #[must_use]
    pub fn new<I, T>(codes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            scripted: Mutex::new(codes.into_iter().map(Into::into).collect()),
            fallback: SequentialIdGenerator::new("gen"),
        }
    }
}

impl IdGenerator for ScriptedIdGenerator {
    fn generate(&self) -> ProductId {
        #[allow(clippy::unwrap_used)] // Mutex poison is unrecoverable in tests
        let scripted = self.scripted.lock().unwrap().pop_front();
        scripted.map_or_else(|| self.fallback.generate(), ProductId::new)
    }
}

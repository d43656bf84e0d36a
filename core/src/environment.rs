//! Injected dependencies for the catalog reducer.
//!
//! Time and id generation are the only ambient effects the reducer needs,
//! and both hide behind traits so tests can pin them down: a fixed clock
//! makes timestamps assertable, a scripted generator makes id collisions
//! reproducible.

use crate::types::ProductId;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::sync::Arc;

/// Clock abstraction for timestamping records.
pub trait Clock: Send + Sync {
    /// Current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Id generation capability.
///
/// Implementations only need to produce well-formed candidates; uniqueness
/// against the issued-id history is the reducer's job.
pub trait IdGenerator: Send + Sync {
    /// Draws a fresh candidate id.
    fn generate(&self) -> ProductId;
}

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LENGTH: usize = 8;

/// Production generator producing 8-character base-36 codes.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> ProductId {
        let mut rng = rand::thread_rng();
        let code: String = (0..ID_LENGTH)
            .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
            .collect();
        ProductId::new(code)
    }
}

/// Dependencies injected into the catalog reducer.
#[derive(Clone)]
pub struct CatalogEnvironment {
    /// Clock for `created_at`/`updated_at` stamps.
    pub clock: Arc<dyn Clock>,
    /// Generator for new product ids.
    pub ids: Arc<dyn IdGenerator>,
}

impl CatalogEnvironment {
    /// Creates an environment from explicit capabilities.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// Environment wired with the production clock and id generator.
    #[must_use]
    pub fn production() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(RandomIdGenerator))
    }
}

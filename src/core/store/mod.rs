//! The keyed state holder the breaker core runs against.
//!
//! The core only requires a get/set contract: each operation is a single
//! read-modify-write cycle. Retention (TTL, eviction) is the store's
//! business; the core never issues a delete.

use crate::core::breaker::BreakerState;
use lru::LruCache;
use std::sync::Mutex;

/// External keyed holder of breaker states. Implementations decide their own
/// retention policy; `get` after eviction simply returns `None` and the next
/// check recreates the breaker.
pub trait Store: Send + Sync {
    fn get(&self, id: &str) -> Option<BreakerState>;
    fn set(&self, id: &str, state: BreakerState);
}

pub const DEFAULT_STORE_CAPACITY: usize = 1024;

/// In-process store with least-recently-used eviction as its retention
/// policy. The mutex guards map integrity only; it does not serialize whole
/// check/update cycles for an identifier (see the api module docs).
pub struct InMemoryStore {
    states: Mutex<LruCache<String, BreakerState>>,
}

impl InMemoryStore {
    pub fn new(capacity: usize) -> Self {
        InMemoryStore {
            states: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn len(&self) -> usize {
        self.states.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        InMemoryStore::new(DEFAULT_STORE_CAPACITY)
    }
}

impl Store for InMemoryStore {
    fn get(&self, id: &str) -> Option<BreakerState> {
        self.states.lock().unwrap().get(id).cloned()
    }

    fn set(&self, id: &str, state: BreakerState) {
        self.states.lock().unwrap().put(id.to_owned(), state);
    }
}

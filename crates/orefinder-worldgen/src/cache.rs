//! In-memory memoization of query results.
//!
//! Generation is deterministic, so a cached value is always equal to a fresh
//! computation. The map is guarded by a mutex that is never held while a
//! result is being computed: two threads missing on the same key may both
//! compute, and the second store simply overwrites an equal value.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use ahash::AHashMap;
use orefinder_common::{FinderResult, VersionTag};
use parking_lot::Mutex;
use tracing::{info, trace};

use crate::deposit::QueryResult;
use crate::rank::TypeFilter;

/// Identity of a query, as seen by the cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// World seed
    pub seed: i64,
    /// Query X
    pub x: i32,
    /// Query Z
    pub z: i32,
    /// Version tag
    pub version: VersionTag,
    /// Requested radius in chunks
    pub radius: i32,
    /// Type filter, `None` for all kinds
    pub filter: Option<TypeFilter>,
}

/// Counters describing cache use since creation or the last clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Stored entries
    pub entries: usize,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to compute
    pub misses: u64,
    /// Entries dropped to respect the capacity
    pub evictions: u64,
}

#[derive(Debug)]
struct Entry {
    result: QueryResult,
    last_used: u64,
}

/// Thread-safe result cache, unbounded unless given a capacity.
///
/// With a capacity, inserting into a full cache evicts the least recently
/// used entry.
#[derive(Debug)]
pub struct ResultCache {
    entries: Mutex<AHashMap<CacheKey, Entry>>,
    capacity: Option<NonZeroUsize>,
    clock: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl ResultCache {
    /// Cache that never evicts.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(None)
    }

    /// Cache holding at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self::new(Some(capacity))
    }

    fn new(capacity: Option<NonZeroUsize>) -> Self {
        Self {
            entries: Mutex::new(AHashMap::new()),
            capacity,
            clock: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Configured capacity, `None` when unbounded.
    #[must_use]
    pub const fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }

    /// Returns the cached result for `key`, or runs `compute`, stores its
    /// result and returns it. Errors are returned as-is and not stored.
    pub fn get_or_compute<F>(&self, key: &CacheKey, compute: F) -> FinderResult<QueryResult>
    where
        F: FnOnce() -> FinderResult<QueryResult>,
    {
        if let Some(result) = self.get(key) {
            return Ok(result);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let result = compute()?;
        self.insert(key.clone(), result.clone());
        Ok(result)
    }

    /// Cached result for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<QueryResult> {
        let tick = self.tick();
        let mut entries = self.entries.lock();
        let entry = entries.get_mut(key)?;
        entry.last_used = tick;
        self.hits.fetch_add(1, Ordering::Relaxed);
        trace!("cache hit: {key:?}");
        Some(entry.result.clone())
    }

    /// Stores `result` under `key`, evicting if over capacity.
    pub fn insert(&self, key: CacheKey, result: QueryResult) {
        let tick = self.tick();
        let mut entries = self.entries.lock();
        entries.insert(
            key,
            Entry {
                result,
                last_used: tick,
            },
        );

        let Some(capacity) = self.capacity else {
            return;
        };
        while entries.len() > capacity.get() {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(oldest) => {
                    entries.remove(&oldest);
                    self.evictions.fetch_add(1, Ordering::Relaxed);
                    trace!("cache evicted: {oldest:?}");
                },
                None => break,
            }
        }
    }

    /// Removes every entry and resets the counters.
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        let dropped = entries.len();
        entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
        info!("Cache cleared ({dropped} entries)");
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }
}

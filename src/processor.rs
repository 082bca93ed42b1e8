//! # Sanitize Driver and Result Cache
//!
//! The public entry point of the crate. [`sanitize`] rents a scratch buffer
//! of `2 × |sql|` bytes, runs the single-pass scanner over the input, and
//! materializes the two halves into owned strings. A process-wide result
//! cache can short-circuit repeat statements.
//!
//! ## Cache Policy
//!
//! The cache maps raw SQL text to its finished [`SqlStatementInfo`]. It is
//! disabled by default ([`DEFAULT_CACHE_CAPACITY`] is zero) and enabled via
//! [`set_cache_capacity`]. Insertion is best-effort:
//!
//! - lookup takes a shared read lock;
//! - insertion checks the size under a read lock first and skips the write
//!   entirely once the cache is full;
//! - otherwise it inserts-if-absent under the write lock.
//!
//! Concurrent scans of distinct statements may race past the size check and
//! marginally exceed the capacity; this is accepted in exchange for keeping
//! the hot path free of exclusive locking. There is no eviction: the cache
//! is sized for a bounded working set of distinct statement texts, as
//! produced by applications using bind parameters.
//!
//! ## Purity
//!
//! With or without the cache, equal inputs produce equal outputs; the cache
//! is observable only through timing.

use crate::config::DEFAULT_CACHE_CAPACITY;
use crate::memory::ScratchPool;
use crate::scanner::Scanner;
use hashbrown::HashMap;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Result of sanitizing one statement.
///
/// Both strings are owned and independent of the input; either may be
/// empty. `summary` is at most 255 bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlStatementInfo {
    /// The input with literals replaced by `?` and comments removed.
    pub sanitized_sql: String,
    /// Operation keywords and target identifiers, space-separated.
    pub summary: String,
}

static SCRATCH_POOL: OnceLock<ScratchPool> = OnceLock::new();
static RESULT_CACHE: OnceLock<RwLock<HashMap<String, SqlStatementInfo>>> = OnceLock::new();
static CACHE_CAPACITY: AtomicUsize = AtomicUsize::new(DEFAULT_CACHE_CAPACITY);

fn scratch_pool() -> &'static ScratchPool {
    SCRATCH_POOL.get_or_init(ScratchPool::new)
}

fn result_cache() -> &'static RwLock<HashMap<String, SqlStatementInfo>> {
    RESULT_CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Sanitize a statement and summarize its shape.
///
/// Total over all inputs: an absent statement yields the empty result, and
/// malformed SQL is at worst copied through with literals masked.
///
/// ```
/// use sqlscrub::sanitize;
///
/// let info = sanitize(Some("UPDATE Orders SET Name = 'foo' WHERE Id = 42"));
/// assert_eq!(info.sanitized_sql, "UPDATE Orders SET Name = ? WHERE Id = ?");
/// assert_eq!(info.summary, "UPDATE Orders");
///
/// assert_eq!(sanitize(None), Default::default());
/// ```
pub fn sanitize(sql: Option<&str>) -> SqlStatementInfo {
    let Some(sql) = sql else {
        return SqlStatementInfo::default();
    };

    let capacity = CACHE_CAPACITY.load(Ordering::Relaxed);
    if capacity > 0 {
        if let Some(hit) = result_cache().read().get(sql) {
            return hit.clone();
        }
    }

    let info = scan_statement(sql);

    if capacity > 0 {
        let cache = result_cache();
        if cache.read().len() < capacity {
            cache
                .write()
                .entry_ref(sql)
                .or_insert_with(|| info.clone());
        }
    }

    info
}

fn scan_statement(sql: &str) -> SqlStatementInfo {
    let len = sql.len();
    let mut scratch = scratch_pool().acquire(2 * len);
    let (san_len, sum_len) = {
        let (sanitized, summary) = scratch.split_at_mut(len);
        Scanner::new(sql.as_bytes(), sanitized, summary).run()
    };
    // The scanner copies whole input bytes or writes ASCII, so both halves
    // are valid UTF-8; from_utf8_lossy is the no-unwrap way to say so.
    SqlStatementInfo {
        sanitized_sql: String::from_utf8_lossy(&scratch[..san_len]).into_owned(),
        summary: String::from_utf8_lossy(&scratch[len..len + sum_len]).into_owned(),
    }
}

/// Set the result cache capacity. Zero disables caching.
///
/// Process-wide; written rarely (startup, tests, benchmarks) and read on
/// every call. Shrinking does not evict existing entries.
pub fn set_cache_capacity(capacity: usize) {
    CACHE_CAPACITY.store(capacity, Ordering::Relaxed);
}

/// Current result cache capacity.
pub fn cache_capacity() -> usize {
    CACHE_CAPACITY.load(Ordering::Relaxed)
}

#[doc(hidden)]
/// Number of cached statements. For tests and benchmarks.
pub fn cache_len() -> usize {
    result_cache().read().len()
}

#[doc(hidden)]
/// Drop all cached statements. For tests and benchmarks.
pub fn clear_cache() {
    result_cache().write().clear();
}

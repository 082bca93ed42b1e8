//! # Configuration Constants
//!
//! All tunable values for the sanitizer live here. Constants that relate to
//! each other are grouped and the relationships documented; where a mismatch
//! would be a bug rather than a tuning choice, a compile-time assertion
//! enforces it.
//!
//! ## Dependency Graph
//!
//! ```text
//! SUMMARY_MAX_LEN (255)
//!       │
//!       └─> Per-scan summary capacity = min(SUMMARY_MAX_LEN, |sql|).
//!           The summary is written into the upper half of a 2·|sql| scratch
//!           buffer, so the per-scan capacity can never exceed |sql|.
//!
//! SCRATCH_POOL_SHARD_COUNT (16)
//!       │
//!       └─> Round-robin shard selection masks with (count - 1), so the
//!           count must be a power of two.
//!
//! MAX_POOLED_SCRATCH_LEN (1 MiB)
//!       │
//!       └─> Buffers larger than this are dropped instead of returned to
//!           the pool, so one pathological statement cannot pin megabytes
//!           of scratch for the process lifetime.
//!
//! MAX_KEYWORD_LEN (12)
//!       │
//!       └─> Length of the longest recognized keyword (NONCLUSTERED). Words
//!           longer than this skip table lookup entirely. Asserted against
//!           the keyword table in scanner::keywords.
//! ```

/// Upper bound on the query summary, in bytes.
///
/// Statements with many capture points (long table lists, deep DDL chains)
/// truncate silently at this length; a trailing separator is trimmed.
pub const SUMMARY_MAX_LEN: usize = 255;

/// Default capacity of the process-wide result cache. Zero disables caching.
pub const DEFAULT_CACHE_CAPACITY: usize = 0;

/// Number of shards in the scratch-buffer pool.
///
/// Must be a power of two: acquire() selects a shard by masking a
/// round-robin counter.
pub const SCRATCH_POOL_SHARD_COUNT: usize = 16;

/// Largest scratch buffer the pool will retain, in bytes.
///
/// A scan over a statement longer than half this value still succeeds (the
/// pool allocates freely); the oversized buffer is simply not recycled.
pub const MAX_POOLED_SCRATCH_LEN: usize = 1024 * 1024;

/// Length of the longest keyword in the scanner's table.
pub const MAX_KEYWORD_LEN: usize = 12;

const _: () = assert!(
    SCRATCH_POOL_SHARD_COUNT.is_power_of_two(),
    "shard selection masks with SCRATCH_POOL_SHARD_COUNT - 1"
);

const _: () = assert!(
    MAX_POOLED_SCRATCH_LEN >= 2 * SUMMARY_MAX_LEN,
    "the pool must retain buffers for summary-bounded statements"
);

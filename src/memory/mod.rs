//! # Scratch Memory Management
//!
//! Every scan needs one contiguous working buffer of `2 × |sql|` bytes: the
//! lower half backs the sanitized SQL, the upper half the summary. This
//! module provides a process-wide pool of reusable buffers so the hot path
//! does not allocate per statement.
//!
//! ## Design
//!
//! The pool uses lock sharding (16 shards) to reduce contention when many
//! threads sanitize concurrently. A rented buffer is owned exclusively by
//! its scan and returns to a shard when dropped. An empty shard allocates
//! rather than blocking or failing, so the pool never limits throughput;
//! it only amortizes allocation.
//!
//! Returned buffers are not zeroed. They only ever hold sanitized material,
//! and each scan truncates or extends its rental to the exact length it
//! needs before use.

mod scratch;

pub use scratch::{PooledScratch, ScratchPool};

//! # Scratch Buffer Pool
//!
//! Reusable byte buffers for the sanitizer's two-halves working space.
//!
//! ## Usage
//!
//! ```ignore
//! let pool = ScratchPool::new();
//!
//! // Rent a buffer of exactly the requested length (from the pool, or
//! // freshly allocated if the selected shard is empty).
//! let mut scratch = pool.acquire(2 * sql.len());
//! let (sanitized_half, summary_half) = scratch.split_at_mut(sql.len());
//!
//! // Buffer automatically returns to the pool when dropped.
//! drop(scratch);
//! ```
//!
//! ## Design
//!
//! Rentals are distributed over 16 shards round-robin to keep lock
//! contention low under concurrent scans. `PooledScratch` uses
//! `ManuallyDrop` instead of `Option` so the buffer is always valid until
//! `Drop`, with no unwrap anywhere on the rental path.
//!
//! Buffers whose capacity exceeds [`MAX_POOLED_SCRATCH_LEN`] are dropped on
//! return instead of pooled, bounding the memory a burst of very long
//! statements can pin.

use crate::config::{MAX_POOLED_SCRATCH_LEN, SCRATCH_POOL_SHARD_COUNT};
use parking_lot::Mutex;
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A pool of reusable scratch buffers.
///
/// Buffers return to the pool when dropped. Cloning the pool shares the
/// underlying shards.
pub struct ScratchPool {
    inner: Arc<ScratchPoolInner>,
}

struct ScratchPoolInner {
    shards: [Mutex<Vec<Vec<u8>>>; SCRATCH_POOL_SHARD_COUNT],
    /// Round-robin counter distributing rentals across shards.
    next_shard: AtomicUsize,
}

impl ScratchPool {
    pub fn new() -> Self {
        let shards: [Mutex<Vec<Vec<u8>>>; SCRATCH_POOL_SHARD_COUNT] =
            std::array::from_fn(|_| Mutex::new(Vec::new()));

        Self {
            inner: Arc::new(ScratchPoolInner {
                shards,
                next_shard: AtomicUsize::new(0),
            }),
        }
    }

    /// Rent a buffer of exactly `len` bytes.
    ///
    /// Reuses a recycled buffer when the selected shard has one, growing or
    /// truncating it to `len`; otherwise allocates. Never fails and never
    /// blocks beyond the shard lock.
    pub fn acquire(&self, len: usize) -> PooledScratch {
        let shard_idx =
            self.inner.next_shard.fetch_add(1, Ordering::Relaxed) & (SCRATCH_POOL_SHARD_COUNT - 1);

        let recycled = self.inner.shards[shard_idx].lock().pop();

        let mut buf = recycled.unwrap_or_default();
        if buf.len() < len {
            buf.resize(len, 0);
        } else {
            buf.truncate(len);
        }

        PooledScratch {
            buf: ManuallyDrop::new(buf),
            pool: Arc::clone(&self.inner),
            shard_idx,
        }
    }

    /// Current number of idle buffers across all shards.
    pub fn available(&self) -> usize {
        self.inner.shards.iter().map(|s| s.lock().len()).sum()
    }
}

impl Default for ScratchPool {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ScratchPool {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// A scratch buffer that returns to its pool when dropped.
///
/// Dereferences to `[u8]` of exactly the rented length.
pub struct PooledScratch {
    /// Always valid until Drop; ManuallyDrop lets Drop take ownership
    /// without moving out of self.
    buf: ManuallyDrop<Vec<u8>>,
    pool: Arc<ScratchPoolInner>,
    shard_idx: usize,
}

impl std::fmt::Debug for PooledScratch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledScratch")
            .field("len", &self.buf.len())
            .field("shard_idx", &self.shard_idx)
            .finish()
    }
}

impl Deref for PooledScratch {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl DerefMut for PooledScratch {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl Drop for PooledScratch {
    fn drop(&mut self) {
        // SAFETY: take() runs exactly once; self.buf is never touched again.
        let buf = unsafe { ManuallyDrop::take(&mut self.buf) };
        if buf.capacity() <= MAX_POOLED_SCRATCH_LEN {
            self.pool.shards[self.shard_idx].lock().push(buf);
        }
    }
}

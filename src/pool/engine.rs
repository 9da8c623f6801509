//! Core pool engine - one lock-free free list per size class.
//!
//! The pool is a fixed array of [`NUM_CLASSES`] sub-pools. A request for
//! `n` bytes is served from the class of the smallest power of two `>= n`:
//!
//! - `acquire()` - Pop a block (or allocate one), zero it, set the length
//! - `release()` - Push the block back onto the sub-pool of its capacity
//!
//! Zeroing happens on acquire only. A released block keeps whatever the
//! caller wrote into it until the next acquire wipes it, so blocks that are
//! never reused cost nothing extra.
//!
//! # Example
//!
//! ```
//! use sizepool::BufferPool;
//!
//! let pool = BufferPool::new();
//!
//! let mut buf = pool.acquire(100);
//! assert_eq!(buf.len(), 100);
//! assert_eq!(buf.capacity(), 128);
//! buf.fill(0xAA);
//! pool.release(buf);
//!
//! // Same class, same block, wiped on the way out
//! let buf = pool.acquire(65);
//! assert!(buf.iter().all(|&b| b == 0));
//! assert_eq!(pool.stats().hits, 1);
//! ```

use std::fmt;

use crossbeam_queue::SegQueue;
use tracing::{debug, trace};

use crate::buffer::Buffer;
use crate::class::{MAX_SIZE, NUM_CLASSES, SizeClass};
use crate::config::PoolConfig;
use crate::error::PoolError;

use super::stats::{Counters, PoolStats};

/// A size-classed pool of zero-filled byte buffers.
///
/// `BufferPool` is `Send + Sync`; share it by reference or behind an `Arc`.
/// Neither [`acquire`](BufferPool::acquire) nor
/// [`release`](BufferPool::release) blocks: every sub-pool is a lock-free
/// queue and each parked block is popped by exactly one acquirer.
///
/// Reuse order within a class is unspecified.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
///
/// use sizepool::BufferPool;
///
/// let pool = Arc::new(BufferPool::new());
/// let workers: Vec<_> = (0..4)
///     .map(|i| {
///         let pool = Arc::clone(&pool);
///         thread::spawn(move || {
///             let mut buf = pool.acquire(1024 * (i + 1));
///             buf[0] = 1;
///             pool.release(buf);
///         })
///     })
///     .collect();
///
/// for worker in workers {
///     worker.join().unwrap();
/// }
/// assert_eq!(pool.stats().releases, 4);
/// ```
pub struct BufferPool {
    classes: [SegQueue<Box<[u8]>>; NUM_CLASSES],
    config: PoolConfig,
    counters: Counters,
}

impl BufferPool {
    /// Creates an empty pool with the default (unbounded) configuration.
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default())
    }

    /// Creates an empty pool with the given configuration.
    ///
    /// The configuration is not validated; see
    /// [`try_with_config`](BufferPool::try_with_config).
    pub fn with_config(config: PoolConfig) -> Self {
        debug!(
            max_retained_per_class = ?config.max_retained_per_class(),
            max_pooled_capacity = config.max_pooled_capacity(),
            "buffer pool created"
        );
        Self {
            classes: std::array::from_fn(|_| SegQueue::new()),
            config,
            counters: Counters::default(),
        }
    }

    /// Creates an empty pool after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the configuration is invalid.
    pub fn try_with_config(config: PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Returns a zero-filled buffer of length `size`.
    ///
    /// The buffer's capacity is the smallest power of two `>= size`, and
    /// every byte of that capacity is zero. A `size` of 0 yields the
    /// sentinel buffer, which owns no storage.
    ///
    /// # Panics
    ///
    /// Panics if `size > MAX_SIZE`. Use
    /// [`try_acquire`](BufferPool::try_acquire) to handle that as an error.
    #[track_caller]
    pub fn acquire(&self, size: usize) -> Buffer {
        match self.try_acquire(size) {
            Ok(buf) => buf,
            Err(err) => panic!("BufferPool::acquire: {}", err),
        }
    }

    /// Returns a zero-filled buffer of length `size`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidSize`] if `size > MAX_SIZE`.
    pub fn try_acquire(&self, size: usize) -> Result<Buffer, PoolError> {
        if size == 0 {
            self.counters.sentinel();
            return Ok(Buffer::sentinel());
        }

        let class = SizeClass::for_size(size).ok_or(PoolError::InvalidSize {
            size,
            max: MAX_SIZE,
        })?;

        let mut block = match self.classes[class.index()].pop() {
            Some(block) => {
                self.counters.hit();
                block
            }
            None => {
                self.counters.miss();
                trace!(size, capacity = class.capacity(), "sub-pool miss, allocating");
                vec![0u8; class.capacity()].into_boxed_slice()
            }
        };

        // Wipe on every hand-off, fresh or recycled.
        block.fill(0);
        Ok(Buffer::from_block(block, size))
    }

    /// Returns a buffer to the pool for reuse.
    ///
    /// Accepts a [`Buffer`] or an `Option<Buffer>`; `None` and the sentinel
    /// are ignored. The buffer's contents are left as they are; the next
    /// acquire of its class zeroes them.
    ///
    /// The storage is dropped instead of parked when its class is above
    /// [`PoolConfig::max_pooled_capacity`] or its sub-pool already holds
    /// [`PoolConfig::max_retained_per_class`] blocks.
    pub fn release(&self, buf: impl Into<Option<Buffer>>) {
        let Some(buf) = buf.into() else {
            return;
        };
        let Some(class) = buf.size_class() else {
            return;
        };

        if !self.config.pools_class(class) {
            self.counters.discard();
            trace!(capacity = class.capacity(), "class not pooled, dropping block");
            return;
        }

        let queue = &self.classes[class.index()];
        if let Some(limit) = self.config.max_retained_per_class() {
            if queue.len() >= limit {
                self.counters.discard();
                trace!(capacity = class.capacity(), limit, "sub-pool full, dropping block");
                return;
            }
        }

        queue.push(buf.into_block());
        self.counters.release();
    }

    /// Returns the number of blocks parked in the sub-pool of `class`.
    pub fn pooled(&self, class: SizeClass) -> usize {
        self.classes[class.index()].len()
    }

    /// Returns the number of blocks parked across all sub-pools.
    pub fn pooled_total(&self) -> usize {
        self.classes.iter().map(|queue| queue.len()).sum()
    }

    /// Drops every parked block.
    ///
    /// Buffers currently held by callers are unaffected and may still be
    /// released afterwards.
    pub fn clear(&self) {
        let mut dropped = 0usize;
        for queue in &self.classes {
            while queue.pop().is_some() {
                dropped += 1;
            }
        }
        debug!(dropped, "buffer pool cleared");
    }

    /// Returns the pool configuration.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Get pool statistics.
    pub fn stats(&self) -> PoolStats {
        self.counters.snapshot()
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferPool")
            .field("config", &self.config)
            .field("pooled", &self.pooled_total())
            .finish_non_exhaustive()
    }
}

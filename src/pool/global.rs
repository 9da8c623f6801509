//! Process-wide pool behind the crate-level functions.

use std::sync::OnceLock;

use crate::buffer::Buffer;
use crate::error::PoolError;

use super::engine::BufferPool;

/// Global buffer pool, created on first use and never torn down.
static GLOBAL_POOL: OnceLock<BufferPool> = OnceLock::new();

/// Get the global buffer pool.
///
/// It uses the default configuration: every class is pooled and sub-pools
/// are unbounded.
pub fn global_pool() -> &'static BufferPool {
    GLOBAL_POOL.get_or_init(BufferPool::new)
}

/// Returns a zero-filled buffer of length `size` from the global pool.
///
/// See [`BufferPool::acquire`].
///
/// # Panics
///
/// Panics if `size > MAX_SIZE`.
///
/// # Example
///
/// ```
/// let buf = sizepool::acquire(3);
/// assert_eq!(buf.len(), 3);
/// assert_eq!(buf.capacity(), 4);
/// sizepool::release(buf);
/// ```
#[track_caller]
pub fn acquire(size: usize) -> Buffer {
    global_pool().acquire(size)
}

/// Fallible [`acquire`] against the global pool.
pub fn try_acquire(size: usize) -> Result<Buffer, PoolError> {
    global_pool().try_acquire(size)
}

/// Returns a buffer to the global pool.
///
/// `None` and the sentinel are no-ops, so optionally allocated buffers can
/// be released without a guard:
///
/// ```
/// let scratch = (std::env::args().count() > 100).then(|| sizepool::acquire(64));
/// sizepool::release(scratch);
/// ```
pub fn release(buf: impl Into<Option<Buffer>>) {
    global_pool().release(buf)
}

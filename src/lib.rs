//! sizepool
//!
//! A size-classed pool of reusable, zero-filled byte buffers.
//!
//! `sizepool` hands out scratch buffers of any length and takes them back
//! for reuse, so code that builds many short-lived byte arrays (serializers,
//! I/O framing) pays for allocation once per storage block instead of once
//! per request. It is designed for:
//!
//! - encode/decode scratch space
//! - frame assembly before a write
//! - any hot path that keeps asking for "n zero bytes"
//!
//! The crate intentionally:
//! - does NOT shrink or evict pooled storage on its own
//! - does NOT track buffers beyond one acquire/release cycle
//! - does NOT manage general-purpose memory
//!
//! It only does one thing: **acquire n bytes → release them back**
//!
//! # Size classes
//!
//! Requests round up to the next power of two. A 100-byte request is served
//! by a 128-byte block, and that block is only ever recycled into the
//! 128-byte class. Size 0 is answered by a sentinel that owns no storage.
//!
//! # Zeroing
//!
//! Every buffer is zero across its whole capacity when handed out. Release
//! does not wipe; the next acquire does.
//!
//! # Example
//!
//! ```
//! let mut buf = sizepool::acquire(100);
//! assert_eq!(buf.len(), 100);
//! assert_eq!(buf.capacity(), 128);
//!
//! buf[..5].copy_from_slice(b"hello");
//!
//! // `release` takes the buffer by value; it cannot be used afterwards.
//! sizepool::release(buf);
//! ```
//!
//! # Private pools
//!
//! ```
//! use sizepool::{BufferPool, PoolConfig};
//!
//! let pool = BufferPool::try_with_config(
//!     PoolConfig::default().with_max_retained_per_class(Some(32)),
//! )?;
//!
//! let buf = pool.acquire(4096);
//! pool.release(buf);
//! assert_eq!(pool.pooled_total(), 1);
//! # Ok::<(), sizepool::PoolError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod class;
mod config;
mod error;
mod pool;

//
// Public surface (intentionally tiny)
//

pub use buffer::Buffer;
pub use class::{MAX_SIZE, NUM_CLASSES, SizeClass};
pub use config::PoolConfig;
pub use error::PoolError;
pub use pool::{BufferPool, PoolStats, acquire, global_pool, release, try_acquire};

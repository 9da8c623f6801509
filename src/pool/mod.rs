//! The size-classed pool.
//!
//! - [`BufferPool`] - One lock-free sub-pool per size class
//! - [`PoolStats`] - Hit/miss counters snapshot
//! - [`global_pool`] - Process-wide pool behind the crate-level functions

mod engine;
mod global;
mod stats;

pub use engine::BufferPool;
pub use global::{acquire, global_pool, release, try_acquire};
pub use stats::PoolStats;

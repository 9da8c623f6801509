//! Buffer handles handed out by the pool.
//!
//! - [`Buffer`] - Move-only view over a fixed-capacity storage block

mod handle;

pub use handle::Buffer;

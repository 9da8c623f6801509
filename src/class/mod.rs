//! Size classes.
//!
//! - [`SizeClass`] - Power-of-two capacity bucket
//! - [`NUM_CLASSES`] - Number of sub-pools a pool carries
//! - [`MAX_SIZE`] - Largest servable request

mod size;

pub use size::{MAX_SIZE, NUM_CLASSES, SizeClass};

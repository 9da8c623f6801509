//! Error types for sizepool.

use std::fmt;

/// Errors reported by the fallible pool entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// The requested size has no size class.
    InvalidSize {
        /// The size that was requested.
        size: usize,
        /// The largest size the pool can serve.
        max: usize,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::InvalidSize { size, max } => {
                write!(f, "invalid buffer size: {} bytes (max {})", size, max)
            }
            PoolError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for PoolError {}

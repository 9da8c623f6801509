//! Configuration for pool retention.
//!
//! - [`PoolConfig`] - How much released storage a pool keeps
//!
//! # Example
//!
//! ```
//! use sizepool::{BufferPool, PoolConfig};
//!
//! // Keep at most 64 blocks per class, never pool blocks above 1 MiB
//! let config = PoolConfig::default()
//!     .with_max_retained_per_class(Some(64))
//!     .with_max_pooled_capacity(1024 * 1024);
//! let pool = BufferPool::try_with_config(config)?;
//!
//! # Ok::<(), sizepool::PoolError>(())
//! ```

use crate::class::{MAX_SIZE, SizeClass};
use crate::error::PoolError;

/// Configuration for a [`BufferPool`](crate::BufferPool).
///
/// The default keeps every released block: sub-pools are unbounded and all
/// classes are pooled.
///
/// The per-class cap is a soft limit. Concurrent releases may each observe
/// room in the same sub-pool and overshoot it by a few blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    /// Upper bound on blocks parked per class; `None` is unbounded.
    max_retained_per_class: Option<usize>,

    /// Largest block capacity that is recycled on release.
    max_pooled_capacity: usize,
}

impl PoolConfig {
    /// Creates a configuration with explicit retention limits.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if:
    /// - `max_retained_per_class` is `Some(0)`
    /// - `max_pooled_capacity` is not a power of two no larger than
    ///   [`MAX_SIZE`]
    pub fn new(
        max_retained_per_class: Option<usize>,
        max_pooled_capacity: usize,
    ) -> Result<Self, PoolError> {
        if max_retained_per_class == Some(0) {
            return Err(PoolError::InvalidConfig {
                message: "max_retained_per_class must be non-zero",
            });
        }

        if SizeClass::for_capacity(max_pooled_capacity).is_none() {
            return Err(PoolError::InvalidConfig {
                message: "max_pooled_capacity must be a power of two within the largest size class",
            });
        }

        Ok(Self {
            max_retained_per_class,
            max_pooled_capacity,
        })
    }

    /// Sets the per-class retention cap.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`PoolConfig::validate`] to check it.
    pub fn with_max_retained_per_class(mut self, limit: Option<usize>) -> Self {
        self.max_retained_per_class = limit;
        self
    }

    /// Sets the largest capacity that is recycled.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`PoolConfig::validate`] to check it.
    pub fn with_max_pooled_capacity(mut self, capacity: usize) -> Self {
        self.max_pooled_capacity = capacity;
        self
    }

    /// Returns the per-class retention cap.
    pub fn max_retained_per_class(&self) -> Option<usize> {
        self.max_retained_per_class
    }

    /// Returns the largest capacity that is recycled.
    pub fn max_pooled_capacity(&self) -> usize {
        self.max_pooled_capacity
    }

    /// Returns true if released blocks of `class` are kept.
    pub(crate) fn pools_class(&self, class: SizeClass) -> bool {
        class.capacity() <= self.max_pooled_capacity
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), PoolError> {
        Self::new(self.max_retained_per_class, self.max_pooled_capacity).map(|_| ())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_retained_per_class: None,
            max_pooled_capacity: MAX_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PoolConfig::default();
        assert_eq!(config.max_retained_per_class(), None);
        assert_eq!(config.max_pooled_capacity(), MAX_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PoolConfig::default()
            .with_max_retained_per_class(Some(16))
            .with_max_pooled_capacity(4096);

        assert_eq!(config.max_retained_per_class(), Some(16));
        assert_eq!(config.max_pooled_capacity(), 4096);
    }

    #[test]
    fn test_valid_config() {
        let config = PoolConfig::new(Some(8), 1 << 20).unwrap();
        assert_eq!(config.max_retained_per_class(), Some(8));
        assert_eq!(config.max_pooled_capacity(), 1 << 20);
    }

    #[test]
    fn test_invalid_zero_retention() {
        let result = PoolConfig::new(Some(0), 4096);
        assert!(matches!(result, Err(PoolError::InvalidConfig { .. })));
    }

    #[test]
    fn test_invalid_pooled_capacity() {
        assert!(PoolConfig::new(None, 0).is_err());
        assert!(PoolConfig::new(None, 3000).is_err());
    }

    #[test]
    fn test_validate() {
        let config = PoolConfig::default().with_max_pooled_capacity(100);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pools_class() {
        let config = PoolConfig::default().with_max_pooled_capacity(1024);
        assert!(config.pools_class(SizeClass::for_size(1024).unwrap()));
        assert!(!config.pools_class(SizeClass::for_size(1025).unwrap()));
    }
}

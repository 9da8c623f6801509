//! Pool statistics.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Live counters updated by the pool's hot paths.
#[derive(Debug, Default)]
pub(crate) struct Counters {
    hits: AtomicUsize,
    misses: AtomicUsize,
    releases: AtomicUsize,
    discards: AtomicUsize,
    sentinels: AtomicUsize,
}

impl Counters {
    #[inline]
    pub(crate) fn hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn release(&self) {
        self.releases.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn discard(&self) {
        self.discards.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn sentinel(&self) {
        self.sentinels.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> PoolStats {
        PoolStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            releases: self.releases.load(Ordering::Relaxed),
            discards: self.discards.load(Ordering::Relaxed),
            sentinels: self.sentinels.load(Ordering::Relaxed),
        }
    }
}

/// Pool statistics for monitoring.
///
/// Counters are read independently, so a snapshot taken while other
/// threads are working may be slightly inconsistent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Acquires served from a sub-pool.
    pub hits: usize,
    /// Acquires that allocated fresh storage.
    pub misses: usize,
    /// Releases that parked storage in a sub-pool.
    pub releases: usize,
    /// Releases that dropped storage instead of parking it.
    pub discards: usize,
    /// Size-0 acquires answered with the sentinel.
    pub sentinels: usize,
}

impl PoolStats {
    /// Calculate hit rate (0.0 to 1.0) over non-sentinel acquires.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_snapshot() {
        let counters = Counters::default();
        counters.miss();
        counters.release();
        counters.hit();
        counters.discard();
        counters.sentinel();
        counters.sentinel();

        let stats = counters.snapshot();
        assert_eq!(
            stats,
            PoolStats {
                hits: 1,
                misses: 1,
                releases: 1,
                discards: 1,
                sentinels: 2,
            }
        );
    }

    #[test]
    fn test_hit_rate() {
        let stats = PoolStats {
            hits: 75,
            misses: 25,
            ..PoolStats::default()
        };
        assert!((stats.hit_rate() - 0.75).abs() < 0.001);
    }

    #[test]
    fn test_hit_rate_empty() {
        assert_eq!(PoolStats::default().hit_rate(), 0.0);
    }
}

//! Mapping between request sizes, capacities and size classes.

use std::fmt;

/// Number of size classes, and therefore sub-pools, in every pool.
///
/// Class `i` holds blocks of exactly `2^i` bytes, so the classes cover
/// capacities `1..=2^62`.
pub const NUM_CLASSES: usize = 63;

/// Index of the largest class usable on this target.
const MAX_INDEX: u32 = if usize::BITS > 62 { 62 } else { usize::BITS - 1 };

/// Largest size `acquire` can serve (`2^62` on 64-bit targets).
pub const MAX_SIZE: usize = 1 << MAX_INDEX;

/// A power-of-two capacity bucket.
///
/// Every request of size `n >= 1` rounds up to the smallest class whose
/// capacity is `>= n`:
///
/// | size    | class | capacity |
/// |---------|-------|----------|
/// | 1       | 0     | 1        |
/// | 2       | 1     | 2        |
/// | 3..=4   | 2     | 4        |
/// | 5..=8   | 3     | 8        |
///
/// Size 0 has no class; it is served by the sentinel buffer.
///
/// # Example
///
/// ```
/// use sizepool::SizeClass;
///
/// let class = SizeClass::for_size(3).unwrap();
/// assert_eq!(class.index(), 2);
/// assert_eq!(class.capacity(), 4);
/// assert_eq!(SizeClass::for_capacity(4), Some(class));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SizeClass(u8);

impl SizeClass {
    /// The smallest class (capacity 1).
    pub const MIN: SizeClass = SizeClass(0);

    /// The largest class usable on this target.
    pub const MAX: SizeClass = SizeClass(MAX_INDEX as u8);

    /// Returns the class serving a request of `size` bytes.
    ///
    /// Returns `None` for `size == 0` and for sizes above [`MAX_SIZE`].
    pub const fn for_size(size: usize) -> Option<Self> {
        match size {
            0 => None,
            1 => Some(SizeClass(0)),
            _ if size > MAX_SIZE => None,
            _ => Some(SizeClass((usize::BITS - (size - 1).leading_zeros()) as u8)),
        }
    }

    /// Returns the class whose capacity is exactly `capacity`.
    ///
    /// Returns `None` unless `capacity` is a power of two no larger than
    /// [`MAX_SIZE`].
    pub const fn for_capacity(capacity: usize) -> Option<Self> {
        if capacity.is_power_of_two() && capacity <= MAX_SIZE {
            Some(SizeClass(capacity.trailing_zeros() as u8))
        } else {
            None
        }
    }

    /// Returns the class with the given index, if it exists on this target.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index <= MAX_INDEX as usize {
            Some(SizeClass(index as u8))
        } else {
            None
        }
    }

    /// Returns the class index (`log2` of its capacity).
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the capacity of every block in this class.
    pub const fn capacity(self) -> usize {
        1 << self.0
    }

    /// Iterates over every class usable on this target, smallest first.
    pub fn all() -> impl Iterator<Item = SizeClass> {
        (0..=MAX_INDEX as u8).map(SizeClass)
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {} ({} bytes)", self.0, self.capacity())
    }
}

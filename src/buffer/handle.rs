//! The Buffer type - a pooled storage block plus a logical length.

use std::fmt;
use std::ops::{Deref, DerefMut};

use bytes::Bytes;

use crate::class::SizeClass;

/// A byte buffer drawn from a [`BufferPool`](crate::BufferPool).
///
/// A `Buffer` owns a storage block whose capacity is fixed by its size
/// class, and exposes the first [`len`](Buffer::len) bytes of it through
/// `Deref<Target = [u8]>`. It is not `Clone`: handing it back with
/// [`release`](crate::release) moves it into the pool, so a released buffer
/// cannot be touched again.
///
/// Dropping a buffer without releasing it simply frees its storage.
///
/// # Example
///
/// ```
/// let mut buf = sizepool::acquire(5);
/// assert_eq!(buf.len(), 5);
/// assert_eq!(buf.capacity(), 8);
/// assert!(buf.iter().all(|&b| b == 0));
///
/// buf.copy_from_slice(b"hello");
/// assert_eq!(&buf[..], b"hello");
///
/// sizepool::release(buf);
/// ```
pub struct Buffer {
    data: Box<[u8]>,
    len: usize,
}

impl Buffer {
    /// The zero-length buffer served for size-0 requests.
    ///
    /// It owns no storage, so every sentinel is the same dangling
    /// zero-length slice and there is nothing to write through.
    pub(crate) fn sentinel() -> Self {
        Self {
            data: Box::default(),
            len: 0,
        }
    }

    /// Wraps a block whose capacity is exactly one class capacity.
    pub(crate) fn from_block(data: Box<[u8]>, len: usize) -> Self {
        debug_assert!(SizeClass::for_capacity(data.len()).is_some());
        debug_assert!(len <= data.len());
        Self { data, len }
    }

    /// Gives up the storage block, normalized to its full capacity.
    pub(crate) fn into_block(self) -> Box<[u8]> {
        self.data
    }

    /// Returns the logical length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the logical length is zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the size of the storage block.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns true if this is the zero-length sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the size class the storage belongs to, or `None` for the
    /// sentinel.
    pub fn size_class(&self) -> Option<SizeClass> {
        SizeClass::for_capacity(self.capacity())
    }

    /// Returns a pointer to the start of the storage block.
    ///
    /// Two live buffers never return the same pointer unless both are
    /// sentinels.
    pub fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    /// Sets the logical length.
    ///
    /// Growing exposes storage bytes past the old length as they are: zero
    /// if nothing was written there since [`acquire`](crate::acquire).
    ///
    /// # Panics
    ///
    /// Panics if `len > self.capacity()`.
    pub fn set_len(&mut self, len: usize) {
        assert!(
            len <= self.capacity(),
            "Buffer::set_len: length {} exceeds capacity {}",
            len,
            self.capacity()
        );
        self.len = len;
    }

    /// Returns the whole storage block, ignoring the logical length.
    pub fn full_capacity_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Detaches the storage from the pool and freezes it into [`Bytes`],
    /// truncated to the logical length.
    ///
    /// No copy is made. The storage is never recycled afterwards.
    ///
    /// ```
    /// let mut buf = sizepool::acquire(3);
    /// buf.copy_from_slice(b"abc");
    /// let frame = buf.into_bytes();
    /// assert_eq!(&frame[..], b"abc");
    /// ```
    pub fn into_bytes(self) -> Bytes {
        let mut bytes = Bytes::from(self.data);
        bytes.truncate(self.len);
        bytes
    }
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

impl DerefMut for Buffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.data[..self.len]
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self[..]
    }
}

impl AsMut<[u8]> for Buffer {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self[..]
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

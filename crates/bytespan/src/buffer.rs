//! Fixed-capacity, reference-counted byte allocations.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

/// An opaque, fixed-capacity byte allocation shared by reference counting.
///
/// A `Buffer` never changes size after creation: "growing" always means
/// allocating a new buffer and copying, which is the job of the construction
/// primitives in [`crate::construct`]. Cloning increments a reference count;
/// the underlying memory is released exactly once, when the last clone (or
/// the last [`crate::ByteString`] viewing it) is dropped. The count is
/// atomic, so buffers may be shared across threads.
///
/// The canonical zero-capacity buffer is a distinguished sentinel that
/// performs no allocation; see [`Buffer::empty`].
#[derive(Clone)]
pub struct Buffer {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    /// The zero-capacity sentinel. No allocation.
    Empty,
    /// Borrowed static data. No allocation, `'static` lifetime.
    Static(&'static [u8]),
    /// Heap-allocated shared storage, freed when the last clone drops.
    Heap(Arc<[u8]>),
}

impl Buffer {
    /// The canonical zero-capacity buffer.
    ///
    /// Empty strings are backed by this sentinel so that they carry no
    /// allocation at all.
    #[must_use]
    pub const fn empty() -> Self {
        Buffer { repr: Repr::Empty }
    }

    /// Wrap static data as a buffer without allocating.
    #[must_use]
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        if bytes.is_empty() {
            Buffer { repr: Repr::Empty }
        } else {
            Buffer {
                repr: Repr::Static(bytes),
            }
        }
    }

    /// Freeze a filled vector into an immutable buffer.
    ///
    /// This is the hand-off point for collaborators that already filled raw
    /// memory (and for the construction primitives). An empty vector
    /// collapses to the sentinel.
    #[must_use]
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        if bytes.is_empty() {
            return Self::empty();
        }
        Buffer {
            repr: Repr::Heap(Arc::from(bytes)),
        }
    }

    /// The fixed capacity of this buffer in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.as_bytes().len()
    }

    /// The entire capacity as a read-only view.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.repr {
            Repr::Empty => &[],
            Repr::Static(s) => s,
            Repr::Heap(arc) => arc,
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes)
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_sentinel_has_zero_capacity() {
        let b = Buffer::empty();
        assert_eq!(b.capacity(), 0);
        assert_eq!(b.as_bytes(), &[]);
    }

    #[test]
    fn empty_vec_collapses_to_sentinel() {
        let b = Buffer::from_vec(Vec::new());
        assert_eq!(b.capacity(), 0);
    }

    #[test]
    fn from_vec_capacity_is_exact() {
        let b = Buffer::from_vec(vec![1, 2, 3]);
        assert_eq!(b.capacity(), 3);
        assert_eq!(b.as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn clones_share_the_same_bytes() {
        let b = Buffer::from_vec(vec![9; 64]);
        let c = b.clone();
        assert_eq!(b.as_bytes().as_ptr(), c.as_bytes().as_ptr());
    }

    #[test]
    fn from_static_does_not_allocate_for_empty() {
        let b = Buffer::from_static(b"");
        assert_eq!(b.capacity(), 0);
    }
}

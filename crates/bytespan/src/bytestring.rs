//! The immutable byte string: a bounded view into a shared buffer.

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Bound, Deref, RangeBounds};

use bstr::{BStr, ByteSlice};

use crate::buffer::Buffer;
use crate::error::BoundsError;
use crate::{construct, latin1, raw};

/// An immutable view `(buffer, offset, length)` into a shared [`Buffer`].
///
/// Cloning is O(1) (a reference-count bump) and slicing is O(1) (offset
/// arithmetic on the shared buffer). Bytes are never mutated after
/// construction, so any number of views may alias one buffer, across threads,
/// without locking.
///
/// The invariant `offset + length <= buffer.capacity()` holds for every live
/// value: it is checked in each constructor and unreachable afterwards.
/// Equality, ordering, and hashing see only the viewed bytes, so all
/// zero-length strings are equal regardless of their backing buffer.
///
/// ```rust
/// use bytespan::ByteString;
///
/// let s = ByteString::from_static(b"hello world");
/// let hello = s.slice(..5);
/// assert_eq!(hello, b"hello"[..]);
/// assert_eq!(hello.len(), 5);
/// ```
#[derive(Clone)]
pub struct ByteString {
    buf: Buffer,
    offset: usize,
    len: usize,
}

impl ByteString {
    /// The empty byte string, backed by the zero-capacity sentinel buffer.
    #[must_use]
    pub const fn new() -> Self {
        ByteString {
            buf: Buffer::empty(),
            offset: 0,
            len: 0,
        }
    }

    /// Wrap static data without allocating.
    #[must_use]
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        ByteString {
            buf: Buffer::from_static(bytes),
            offset: 0,
            len: bytes.len(),
        }
    }

    /// Allocate a new buffer and copy `data` into it.
    #[must_use]
    pub fn copy_from_slice(data: &[u8]) -> Self {
        construct::create(data.len(), |dst| raw::copy(dst, data))
    }

    /// Zero-copy construction from an existing buffer and a view into it.
    ///
    /// The sole constructor that accepts an untrusted triple; this is the
    /// hand-off point for collaborators that already manage memory (a
    /// decoder passing along a filled buffer, an FFI boundary).
    ///
    /// # Errors
    ///
    /// Rejects the view if `offset + len` overflows or exceeds the buffer's
    /// capacity. No bytes are copied on either path.
    pub fn from_buffer(buf: Buffer, offset: usize, len: usize) -> Result<Self, BoundsError> {
        let out_of_bounds = BoundsError {
            offset,
            len,
            capacity: buf.capacity(),
        };
        let end = offset.checked_add(len).ok_or(out_of_bounds)?;
        if end > buf.capacity() {
            return Err(out_of_bounds);
        }
        Ok(ByteString { buf, offset, len })
    }

    /// The backing `(buffer, offset, length)` triple, without copying.
    ///
    /// The exact inverse of [`ByteString::from_buffer`], for collaborators
    /// that need raw access to the shared allocation (for example to pass a
    /// region to an external I/O boundary).
    #[must_use]
    pub fn buffer_view(&self) -> (&Buffer, usize, usize) {
        (&self.buf, self.offset, self.len)
    }

    /// Length of the view in bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Is the view zero-length?
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The viewed bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf.as_bytes()[self.offset..self.offset + self.len]
    }

    /// A zero-copy sub-view for the given range.
    ///
    /// Only the offset and length change; the buffer is shared. Composable:
    /// `s.slice(a..b).slice(c..d)` views the same bytes as the equivalent
    /// single slice of `s`.
    ///
    /// # Panics
    ///
    /// Panics if the range does not fall within `..self.len()`. Out-of-range
    /// slicing is a caller bug, not a recoverable condition.
    #[must_use]
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Self {
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.checked_add(1).expect("range start overflow"),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n.checked_add(1).expect("range end overflow"),
            Bound::Excluded(&n) => n,
            Bound::Unbounded => self.len,
        };

        assert!(
            start <= end && end <= self.len,
            "slice out of bounds: start={start}, end={end}, len={}",
            self.len
        );

        ByteString {
            buf: self.buf.clone(),
            offset: self.offset + start,
            len: end - start,
        }
    }

    /// Split into the views `[0, at)` and `[at, len)`.
    ///
    /// Both halves share the buffer; no bytes are copied.
    ///
    /// # Panics
    ///
    /// Panics if `at > self.len()`.
    #[must_use]
    pub fn split_at(&self, at: usize) -> (Self, Self) {
        (self.slice(..at), self.slice(at..))
    }

    /// Concatenate views into one freshly allocated string.
    ///
    /// The single allocating composition primitive: one buffer of the exact
    /// total length, filled piecewise.
    #[must_use]
    pub fn concat(parts: &[ByteString]) -> Self {
        let total = parts.iter().map(ByteString::len).sum();
        construct::create(total, |dst| {
            let mut at = 0;
            for part in parts {
                raw::copy(&mut dst[at..], part.as_bytes());
                at += part.len();
            }
        })
    }

    /// A new string with `sep` between every adjacent pair of bytes.
    ///
    /// Allocates `2 * len - 1` bytes for a non-empty string; an empty or
    /// singleton string is returned unchanged (zero-copy).
    #[must_use]
    pub fn intersperse(&self, sep: u8) -> Self {
        if self.len < 2 {
            return self.clone();
        }
        construct::create(2 * self.len - 1, |dst| {
            raw::intersperse(dst, self.as_bytes(), sep);
        })
    }

    /// A new string with the bytes in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        construct::create(self.len, |dst| raw::reverse(dst, self.as_bytes()))
    }

    /// Index of the first occurrence of `target`, or `None`.
    #[must_use]
    pub fn find_byte(&self, target: u8) -> Option<usize> {
        raw::find_byte(self.as_bytes(), target)
    }

    /// Number of occurrences of `target`.
    #[must_use]
    pub fn count(&self, target: u8) -> usize {
        raw::count(self.as_bytes(), target)
    }

    /// The largest byte, or `None` if empty.
    ///
    /// The raw primitive requires non-empty input; this is the special-casing
    /// outer layer.
    #[must_use]
    pub fn maximum(&self) -> Option<u8> {
        if self.is_empty() {
            None
        } else {
            Some(raw::maximum(self.as_bytes()))
        }
    }

    /// The smallest byte, or `None` if empty.
    #[must_use]
    pub fn minimum(&self) -> Option<u8> {
        if self.is_empty() {
            None
        } else {
            Some(raw::minimum(self.as_bytes()))
        }
    }

    /// Zero-copy view with leading Latin-1 whitespace removed.
    #[must_use]
    pub fn trim_start_spaces(&self) -> Self {
        let skip = self
            .as_bytes()
            .iter()
            .take_while(|&&b| latin1::is_space(b))
            .count();
        self.slice(skip..)
    }

    /// Zero-copy view with trailing Latin-1 whitespace removed.
    #[must_use]
    pub fn trim_end_spaces(&self) -> Self {
        let keep = self.len
            - self
                .as_bytes()
                .iter()
                .rev()
                .take_while(|&&b| latin1::is_space(b))
                .count();
        self.slice(..keep)
    }
}

impl Default for ByteString {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for ByteString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        ByteString {
            buf: Buffer::from_vec(bytes),
            offset: 0,
            len,
        }
    }
}

impl From<&'static [u8]> for ByteString {
    fn from(bytes: &'static [u8]) -> Self {
        Self::from_static(bytes)
    }
}

impl From<&'static str> for ByteString {
    fn from(s: &'static str) -> Self {
        Self::from_static(s.as_bytes())
    }
}

impl From<String> for ByteString {
    fn from(s: String) -> Self {
        Self::from(s.into_bytes())
    }
}

impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteString {}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<ByteString> for [u8] {
    fn eq(&self, other: &ByteString) -> bool {
        self == other.as_bytes()
    }
}

impl PartialEq<&[u8]> for ByteString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialOrd for ByteString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteString {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.as_bytes(), other.as_bytes());
        let n = a.len().min(b.len());
        raw::compare(a, b, n).then_with(|| a.len().cmp(&b.len()))
    }
}

impl Hash for ByteString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(BStr::new(self.as_bytes()), f)
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bytes().as_bstr(), f)
    }
}

//! Construction primitives: allocate, fill through a bounded view, freeze.
//!
//! A filler never sees a raw pointer. It receives a `&mut [u8]` of exactly
//! the requested size, so reading or writing outside the allocation is
//! impossible by construction, and whatever the filler does internally (even
//! I/O) stays within the granted bounds. The buffer is frozen into an
//! immutable [`ByteString`] only after the filler returns.
//!
//! The trimming variants exist for callers whose output size is data
//! dependent but cheaply bounded from above (worst-case escaping, bounded
//! expansion encodings): allocate the upper bound once, fill, then pay one
//! copy into an exact-fit buffer only when the bound was pessimistic. This
//! avoids a separate size-computation pass over the input.
//!
//! Allocation failure is not a recoverable condition at this layer; it
//! aborts the process through the global allocator, as continuing without
//! the requested memory is unsafe.

use alloc::vec;

use crate::bytestring::ByteString;
use crate::raw;

/// Allocate `len` bytes, let `filler` populate them, and freeze the result.
///
/// The filler receives a zeroed view of exactly `len` bytes; the returned
/// string has length exactly `len`, whether or not the filler wrote every
/// byte.
///
/// ```rust
/// use bytespan::construct;
///
/// let s = construct::create(5, |dst| dst.copy_from_slice(b"hello"));
/// assert_eq!(s, b"hello"[..]);
/// ```
pub fn create(len: usize, filler: impl FnOnce(&mut [u8])) -> ByteString {
    let mut data = vec![0u8; len];
    filler(&mut data);
    ByteString::from(data)
}

/// Allocate up to `max_len` bytes, fill, and shrink to the used prefix.
///
/// The filler populates at most `max_len` bytes and reports how many it
/// used. If it used the full capacity the allocation is kept as-is; a
/// shorter fill is copied into a freshly allocated exact-fit buffer and the
/// oversized one is discarded.
///
/// # Panics
///
/// Panics if the filler reports more bytes used than were granted. Clamping
/// instead would silently mask the caller bug and truncate data
/// unpredictably.
///
/// ```rust
/// use bytespan::construct;
///
/// let s = construct::create_and_trim(10, |dst| {
///     dst[..3].copy_from_slice(b"hel");
///     3
/// });
/// assert_eq!(s, b"hel"[..]);
/// assert_eq!(s.buffer_view().0.capacity(), 3);
/// ```
pub fn create_and_trim(max_len: usize, filler: impl FnOnce(&mut [u8]) -> usize) -> ByteString {
    let mut data = vec![0u8; max_len];
    let used = filler(&mut data);
    assert!(
        used <= max_len,
        "filler contract violation: reported {used} bytes used of {max_len} granted"
    );
    if used == max_len {
        ByteString::from(data)
    } else {
        create(used, |dst| raw::copy(dst, &data[..used]))
    }
}

/// Like [`create_and_trim`], but the used range may start at an interior
/// offset and the filler returns a side value.
///
/// The filler reports `(offset, used, extra)`: the kept bytes are
/// `[offset, offset + used)` of the granted region, and `extra` is passed
/// through untouched alongside the resulting string. This suits fillers that
/// write from an interior cursor, such as a decoder that consumes a
/// variable-length prefix before its payload begins.
///
/// # Panics
///
/// Panics if `offset + used` overflows or exceeds the granted `max_len`.
pub fn create_and_trim_with_offset<T>(
    max_len: usize,
    filler: impl FnOnce(&mut [u8]) -> (usize, usize, T),
) -> (ByteString, T) {
    let mut data = vec![0u8; max_len];
    let (offset, used, extra) = filler(&mut data);
    let end = offset.checked_add(used);
    assert!(
        end.is_some_and(|end| end <= max_len),
        "filler contract violation: window offset={offset} + used={used} exceeds {max_len} granted"
    );
    let trimmed = if offset == 0 && used == max_len {
        ByteString::from(data)
    } else {
        create(used, |dst| raw::copy(dst, &data[offset..offset + used]))
    };
    (trimmed, extra)
}

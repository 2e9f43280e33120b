//! Allocation-free byte primitives over explicit bounded views.
//!
//! Every operation here takes `&[u8]` / `&mut [u8]` views and never
//! allocates. Bounds travel with the views themselves: callers validate a
//! `(buffer, offset, length)` triple once, where the [`crate::ByteString`]
//! invariant is established, and hand the resulting slice down. Length
//! relations *between* operands (destination at least as long as the source,
//! and so on) are the caller's responsibility and are only `debug_assert!`ed
//! here.
//!
//! Overlap between a `&mut [u8]` destination and a `&[u8]` source is
//! unrepresentable in safe Rust, so [`copy`] and [`reverse`] need no runtime
//! overlap checks.

use bstr::ByteSlice;
use core::cmp::Ordering;

/// Copy all of `src` into the front of `dst`.
///
/// `dst` must be at least `src.len()` bytes long.
#[inline]
pub fn copy(dst: &mut [u8], src: &[u8]) {
    debug_assert!(dst.len() >= src.len());
    dst[..src.len()].copy_from_slice(src);
}

/// Lexicographic comparison of the first `n` bytes of each operand.
///
/// `n` must not exceed either operand's length.
#[inline]
#[must_use]
pub fn compare(a: &[u8], b: &[u8], n: usize) -> Ordering {
    debug_assert!(n <= a.len() && n <= b.len());
    a[..n].cmp(&b[..n])
}

/// Index of the first occurrence of `target`, or `None`.
///
/// Memchr-backed single-byte search.
#[inline]
#[must_use]
pub fn find_byte(haystack: &[u8], target: u8) -> Option<usize> {
    haystack.find_byte(target)
}

/// Set every byte of `dst` to `value`.
#[inline]
pub fn fill(dst: &mut [u8], value: u8) {
    dst.fill(value);
}

/// Write the bytes of `src` into `dst` in reverse order.
///
/// The two views must be the same length (and cannot alias).
pub fn reverse(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());
    let n = src.len();
    for (i, &b) in src.iter().enumerate() {
        dst[n - 1 - i] = b;
    }
}

/// Write `src` into `dst` with `sep` between every adjacent pair of bytes.
///
/// Produces `2 * src.len() - 1` bytes when `src` is non-empty and nothing
/// otherwise; `dst` must be at least that long.
pub fn intersperse(dst: &mut [u8], src: &[u8], sep: u8) {
    let Some((&first, rest)) = src.split_first() else {
        return;
    };
    debug_assert!(dst.len() >= 2 * src.len() - 1);
    dst[0] = first;
    for (i, &b) in rest.iter().enumerate() {
        dst[2 * i + 1] = sep;
        dst[2 * i + 2] = b;
    }
}

/// The largest byte in `p`.
///
/// `p` must be non-empty; callers special-case empty input before calling.
#[must_use]
pub fn maximum(p: &[u8]) -> u8 {
    assert!(!p.is_empty(), "maximum of empty input");
    p.iter().fold(0, |acc, &b| acc.max(b))
}

/// The smallest byte in `p`.
///
/// `p` must be non-empty; callers special-case empty input before calling.
#[must_use]
pub fn minimum(p: &[u8]) -> u8 {
    assert!(!p.is_empty(), "minimum of empty input");
    p.iter().fold(u8::MAX, |acc, &b| acc.min(b))
}

/// Number of occurrences of `target` in `haystack`.
#[must_use]
pub fn count(haystack: &[u8], target: u8) -> usize {
    haystack.iter().filter(|&&b| b == target).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn copy_into_longer_destination() {
        let mut dst = [0u8; 8];
        copy(&mut dst, b"abc");
        assert_eq!(&dst, b"abc\0\0\0\0\0");
    }

    #[test]
    fn compare_is_lexicographic_over_prefix() {
        assert_eq!(compare(b"abcX", b"abcY", 3), Ordering::Equal);
        assert_eq!(compare(b"abc", b"abd", 3), Ordering::Less);
        assert_eq!(compare(b"b", b"a", 1), Ordering::Greater);
        assert_eq!(compare(b"", b"", 0), Ordering::Equal);
    }

    #[test]
    fn find_byte_returns_first_index() {
        assert_eq!(find_byte(b"mississippi", b's'), Some(2));
        assert_eq!(find_byte(b"mississippi", b'z'), None);
        assert_eq!(find_byte(b"", b'a'), None);
    }

    #[test]
    fn fill_sets_every_byte() {
        let mut dst = vec![0u8; 5];
        fill(&mut dst, 0xAB);
        assert_eq!(dst, vec![0xAB; 5]);
    }

    #[test]
    fn reverse_writes_backwards() {
        let mut dst = [0u8; 5];
        reverse(&mut dst, b"hello");
        assert_eq!(&dst, b"olleh");
    }

    #[test]
    fn reverse_of_reverse_is_identity() {
        let src = b"some bytes \x00\xff here";
        let mut once = [0u8; 18];
        let mut twice = [0u8; 18];
        reverse(&mut once, src);
        reverse(&mut twice, &once);
        assert_eq!(&twice, src);
    }

    #[test]
    fn intersperse_separates_adjacent_pairs() {
        let mut dst = [0u8; 5];
        intersperse(&mut dst, b"abc", b'-');
        assert_eq!(&dst, b"a-b-c");
    }

    #[test]
    fn intersperse_singleton_and_empty() {
        let mut dst = [0xFFu8; 1];
        intersperse(&mut dst, b"a", b'-');
        assert_eq!(&dst, b"a");

        let mut none: [u8; 0] = [];
        intersperse(&mut none, b"", b'-');
    }

    #[test]
    fn extrema_single_pass() {
        assert_eq!(maximum(b"mississippi"), b's');
        assert_eq!(minimum(b"mississippi"), b'i');
        assert_eq!(maximum(&[7]), 7);
        assert_eq!(minimum(&[7]), 7);
    }

    #[test]
    #[should_panic(expected = "maximum of empty input")]
    fn maximum_rejects_empty() {
        let _ = maximum(&[]);
    }

    #[test]
    fn count_occurrences() {
        assert_eq!(count(b"mississippi", b's'), 4);
        assert_eq!(count(b"mississippi", b'i'), 4);
        assert_eq!(count(b"mississippi", b'z'), 0);
        assert_eq!(count(b"", b'a'), 0);
    }
}

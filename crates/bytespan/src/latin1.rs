//! Single-byte character classification over the Latin-1 range.
//!
//! Pure, allocation-free helpers, independent of the buffer machinery. This
//! layer is byte-oriented: a byte is interpreted as the Latin-1 code point of
//! the same value, never decoded as UTF-8.

/// The Latin-1 character a byte stands for.
#[inline]
#[must_use]
pub const fn latin1_char(b: u8) -> char {
    b as char
}

/// A character truncated to its low byte.
///
/// The inverse of [`latin1_char`] on the Latin-1 range; code points above
/// U+00FF lose their high bits.
#[inline]
#[must_use]
pub const fn latin1_byte(c: char) -> u8 {
    (c as u32) as u8
}

/// Is `b` a Latin-1 whitespace byte?
///
/// Space, `\t`, `\n`, vertical tab, form feed, `\r`, and U+00A0 (no-break
/// space).
#[inline]
#[must_use]
pub const fn is_space(b: u8) -> bool {
    matches!(b, 0x20 | 0x09..=0x0D | 0xA0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(b' ', true)]
    #[case(b'\t', true)]
    #[case(b'\n', true)]
    #[case(0x0B, true)]
    #[case(0x0C, true)]
    #[case(b'\r', true)]
    #[case(0xA0, true)]
    #[case(b'a', false)]
    #[case(b'0', false)]
    #[case(0x00, false)]
    #[case(0x1F, false)]
    #[case(0xFF, false)]
    fn space_table(#[case] b: u8, #[case] expected: bool) {
        assert_eq!(is_space(b), expected);
    }

    #[test]
    fn latin1_round_trips_every_byte() {
        for b in 0..=u8::MAX {
            assert_eq!(latin1_byte(latin1_char(b)), b);
        }
    }

    #[test]
    fn latin1_byte_truncates_high_code_points() {
        assert_eq!(latin1_byte('\u{0141}'), 0x41);
    }
}

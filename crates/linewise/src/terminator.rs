//! Record boundary detection.
//!
//! A terminator is a line feed, optionally preceded by a carriage return. A
//! carriage return that is not immediately followed by a line feed is
//! ordinary record content.

pub(crate) const LF: u8 = b'\n';
pub(crate) const CR: u8 = b'\r';

/// The earliest record boundary found in a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminator {
    /// Offset, relative to the window, where record content ends.
    pub content_end: usize,
    /// Number of terminator bytes following `content_end`: 1 for LF, 2 for
    /// CRLF.
    pub width: usize,
}

impl Terminator {
    /// Offset just past the terminator.
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.content_end + self.width
    }
}

/// Find the first terminator in `window` whose line feed lies at or after
/// `from`.
///
/// Bytes before `from` are assumed to have been searched already, but they may
/// still supply the carriage return of a CRLF pair.
///
/// ```rust
/// use linewise::{Terminator, find_terminator};
///
/// let t = find_terminator(b"ab\r\ncd", 0).unwrap();
/// assert_eq!(t, Terminator { content_end: 2, width: 2 });
/// assert_eq!(find_terminator(b"ab\rcd", 0), None);
/// ```
#[inline]
#[must_use]
pub fn find_terminator(window: &[u8], from: usize) -> Option<Terminator> {
    let lf = from + memchr::memchr(LF, window.get(from..)?)?;
    if lf > 0 && window[lf - 1] == CR {
        Some(Terminator {
            content_end: lf - 1,
            width: 2,
        })
    } else {
        Some(Terminator {
            content_end: lf,
            width: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::bare_lf("abc\ndef", 0, Some((3, 1)))]
    #[case::crlf("abc\r\ndef", 0, Some((3, 2)))]
    #[case::leading_lf("\nabc", 0, Some((0, 1)))]
    #[case::leading_crlf("\r\n", 0, Some((0, 2)))]
    #[case::no_lf("abc", 0, None)]
    #[case::lone_cr_is_content("a\rb\r", 0, None)]
    #[case::cr_not_adjacent("a\rb\n", 0, Some((3, 1)))]
    #[case::empty("", 0, None)]
    #[case::first_of_many("a\nb\nc\n", 0, Some((1, 1)))]
    fn finds_earliest_boundary(
        #[case] window: &str,
        #[case] from: usize,
        #[case] expected: Option<(usize, usize)>,
    ) {
        let got = find_terminator(window.as_bytes(), from).map(|t| (t.content_end, t.width));
        assert_eq!(got, expected);
    }

    #[test]
    fn cr_before_search_offset_still_pairs() {
        // CR was inspected by an earlier search that ran out of bytes.
        let t = find_terminator(b"abc\r\n", 4).unwrap();
        assert_eq!(t, Terminator { content_end: 3, width: 2 });
        assert_eq!(t.end(), 5);
    }

    #[test]
    fn offset_past_window_is_a_miss() {
        assert_eq!(find_terminator(b"ab\n", 3), None);
        assert_eq!(find_terminator(b"ab\n", 10), None);
    }

    #[test]
    fn skips_terminators_before_offset() {
        let t = find_terminator(b"a\nb\r\nc", 2).unwrap();
        assert_eq!(t, Terminator { content_end: 3, width: 2 });
    }
}

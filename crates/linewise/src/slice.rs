use alloc::borrow::Cow;

use bstr::ByteSlice;

use crate::terminator::find_terminator;

/// Splits an in-memory byte slice into records.
///
/// Uses the same terminator rule as [`Scanner`](crate::Scanner) but needs no
/// read buffer: every record borrows `buf` directly. Besides the
/// [`Lines`](crate::Lines) contract it converts into a [`SliceRecords`]
/// iterator over `&[u8]`.
///
/// ```rust
/// use linewise::SliceScanner;
///
/// let mut s = SliceScanner::new(b"a\n\nb\r\n");
/// assert!(s.scan());
/// assert_eq!(s.text(), "a");
///
/// let rest: Vec<&[u8]> = s.into_iter().collect();
/// assert_eq!(rest, vec![&b""[..], &b"b"[..]]);
/// ```
#[derive(Debug, Clone)]
pub struct SliceScanner<'a> {
    buf: &'a [u8],
    pos: usize,
    current: &'a [u8],
    done: bool,
}

impl<'a> SliceScanner<'a> {
    /// Scan the records of `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            current: &[],
            done: false,
        }
    }

    /// Advance to the next record; `false` once the slice is exhausted.
    pub fn scan(&mut self) -> bool {
        if self.done || self.pos >= self.buf.len() {
            self.done = true;
            self.current = &[];
            return false;
        }

        match find_terminator(self.buf, self.pos) {
            Some(t) => {
                self.current = &self.buf[self.pos..t.content_end];
                self.pos = t.end();
            }
            None => {
                self.current = &self.buf[self.pos..];
                self.pos = self.buf.len();
            }
        }
        true
    }

    /// The current record without its terminator.
    #[must_use]
    pub fn bytes(&self) -> &'a [u8] {
        self.current
    }

    /// The current record decoded as UTF-8, lossily.
    #[must_use]
    pub fn text(&self) -> Cow<'a, str> {
        self.current.to_str_lossy()
    }

    /// The part of the input not yet scanned.
    #[must_use]
    pub fn remainder(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
}

impl<'a> IntoIterator for SliceScanner<'a> {
    type Item = &'a [u8];
    type IntoIter = SliceRecords<'a>;

    fn into_iter(self) -> Self::IntoIter {
        SliceRecords { scanner: self }
    }
}

/// Iterator over the records of a slice, created by
/// [`SliceScanner::into_iter`] or [`Records::iter`](crate::Records::iter).
#[derive(Debug, Clone)]
pub struct SliceRecords<'a> {
    scanner: SliceScanner<'a>,
}

impl<'a> SliceRecords<'a> {
    /// Iterate over the records of `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        SliceScanner::new(buf).into_iter()
    }

    /// The part of the input not yet yielded.
    #[must_use]
    pub fn remainder(&self) -> &'a [u8] {
        self.scanner.remainder()
    }
}

impl<'a> Iterator for SliceRecords<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.scanner.scan().then(|| self.scanner.bytes())
    }
}

impl core::iter::FusedIterator for SliceRecords<'_> {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty("", &[])]
    #[case::single_terminated("a\n", &["a"])]
    #[case::final_unterminated("a\nb", &["a", "b"])]
    #[case::crlf("a\r\nb\r\n", &["a", "b"])]
    #[case::lone_cr("a\rb\r", &["a\rb\r"])]
    #[case::trailing_cr_kept("a\r", &["a\r"])]
    #[case::empty_lines("a\n\nb\n", &["a", "", "b"])]
    #[case::only_lf("\n", &[""])]
    #[case::only_crlf("\r\n\r\n", &["", ""])]
    fn splits_records(#[case] input: &str, #[case] expected: &[&str]) {
        let got: Vec<&[u8]> = SliceRecords::new(input.as_bytes()).collect();
        let expected: Vec<&[u8]> = expected.iter().map(|s| s.as_bytes()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn idempotent_after_exhaustion() {
        let mut s = SliceScanner::new(b"x\n");
        assert!(s.scan());
        assert_eq!(s.text(), "x");
        assert!(s.remainder().is_empty());
        for _ in 0..2 {
            assert!(!s.scan());
            assert_eq!(s.bytes(), b"");
            assert_eq!(s.text(), "");
        }
    }

    #[test]
    fn scan_and_iteration_share_position() {
        let mut s = SliceScanner::new(b"one\r\ntwo\nthree");
        let mut first = Vec::new();
        while s.scan() {
            first.push(s.bytes());
            if first.len() == 1 {
                break;
            }
        }
        assert_eq!(first, [&b"one"[..]]);
        assert_eq!(s.remainder(), b"two\nthree");

        let mut rest = s.into_iter();
        assert_eq!(rest.next(), Some(&b"two"[..]));
        assert_eq!(rest.remainder(), b"three");
        assert_eq!(rest.next(), Some(&b"three"[..]));
        assert_eq!(rest.next(), None);
        assert_eq!(rest.next(), None);
    }
}

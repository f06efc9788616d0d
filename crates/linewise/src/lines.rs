use alloc::borrow::Cow;

use bstr::ByteSlice;

use crate::{
    error::ScanError,
    scanner::Scanner,
    slice::SliceScanner,
    source::Source,
    trace::Trace,
};

/// Pull-based access to newline-terminated records.
///
/// Implemented by the streaming [`Scanner`] and by [`SliceScanner`], so code
/// can be written once against either.
///
/// ```rust
/// use linewise::{Lines, Scanner, SliceScanner};
///
/// fn count<L: Lines>(mut lines: L) -> usize {
///     let mut n = 0;
///     while lines.scan() {
///         n += 1;
///     }
///     n
/// }
///
/// let input: &[u8] = b"a\r\nb\nc";
/// assert_eq!(count(Scanner::new(input)), 3);
/// assert_eq!(count(SliceScanner::new(input)), 3);
/// ```
pub trait Lines {
    /// Error reported once scanning stops.
    type Error;

    /// Advance to the next record; `false` once no record remains.
    fn scan(&mut self) -> bool;

    /// The current record without its terminator.
    fn bytes(&self) -> &[u8];

    /// The current record decoded as UTF-8, lossily.
    fn text(&self) -> Cow<'_, str> {
        self.bytes().to_str_lossy()
    }

    /// The error that stopped scanning, if any.
    fn err(&self) -> Option<&Self::Error>;
}

impl<S: Source, T: Trace> Lines for Scanner<S, T> {
    type Error = ScanError<S::Error>;

    #[inline]
    fn scan(&mut self) -> bool {
        Scanner::scan(self)
    }

    #[inline]
    fn bytes(&self) -> &[u8] {
        Scanner::bytes(self)
    }

    #[inline]
    fn err(&self) -> Option<&Self::Error> {
        Scanner::err(self)
    }
}

impl Lines for SliceScanner<'_> {
    type Error = core::convert::Infallible;

    #[inline]
    fn scan(&mut self) -> bool {
        SliceScanner::scan(self)
    }

    #[inline]
    fn bytes(&self) -> &[u8] {
        SliceScanner::bytes(self)
    }

    #[inline]
    fn err(&self) -> Option<&Self::Error> {
        None
    }
}

//! Streaming record scanner.
//!
//! Overview
//! - [`Scanner`] pulls bytes from a [`Source`] into one reusable read buffer
//!   and yields the records between line terminators, one per
//!   [`Scanner::scan`] call.
//! - A record that fits in the buffer is returned as a borrowed slice of it
//!   (fast path). A record that outgrows the buffer is moved piecewise into
//!   an overflow buffer and returned from there once its terminator shows up
//!   (slow path). There is no upper bound on record length.
//!
//! States
//! - `Ready` until the first call, `Yielded` while a record is current, then
//!   `Done` (clean end of input) or `Errored` (source failure). Both terminal
//!   states are sticky: `scan()` keeps returning `false` without touching the
//!   buffers or the source.
//!
//! Terminators
//! - LF and CRLF end a record and are excluded from it. A CR not directly
//!   followed by LF is content, including a CR that ends the input.
//! - Trailing bytes without a terminator form one final record.
//!
//! Errors
//! - A source error ends the scan. Bytes buffered for an unfinished record
//!   are dropped. The error is available from [`Scanner::err`].

use alloc::{borrow::Cow, vec::Vec};
use core::fmt;

use bstr::{BStr, ByteSlice};

use crate::{
    error::ScanError,
    options::ScannerOptions,
    overflow::Overflow,
    source::Source,
    terminator::Terminator,
    trace::{ScanEvent, Trace},
    window::{Room, Window},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ready,
    Yielded,
    Done,
    Errored,
}

/// Where the current record's bytes live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Record {
    None,
    Window { start: usize, end: usize },
    Overflow,
}

/// A [`Trace`] that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Trace for Silent {
    #[inline]
    fn event(&mut self, _event: ScanEvent) {}
}

/// Reads records separated by LF or CRLF from a [`Source`], with no limit on
/// record length.
///
/// ```rust
/// use linewise::Scanner;
///
/// let input: &[u8] = b"flubber\r\nblubber\nfoo";
/// let mut scanner = Scanner::new(input);
/// let mut lines = Vec::new();
/// while scanner.scan() {
///     lines.push(scanner.text().into_owned());
/// }
/// assert!(scanner.err().is_none());
/// assert_eq!(lines, ["flubber", "blubber", "foo"]);
/// ```
pub struct Scanner<S: Source, T = Silent> {
    source: S,
    window: Window,
    overflow: Overflow,
    trace: T,
    state: State,
    record: Record,
    /// Absolute buffer offset the next record starts at.
    next_start: usize,
    width: usize,
    eof: bool,
    consumed: u64,
    err: Option<ScanError<S::Error>>,
}

impl<S: Source> Scanner<S> {
    /// Create a scanner with a 16 KiB read buffer.
    pub fn new(source: S) -> Self {
        Self::with_options(source, ScannerOptions::default())
    }

    /// Create a scanner with explicit buffer options.
    pub fn with_options(source: S, options: ScannerOptions) -> Self {
        Self::with_trace(source, options, Silent)
    }
}

impl<S: Source, T: Trace> Scanner<S, T> {
    /// Create a scanner that reports buffer management to `trace`.
    ///
    /// ```rust
    /// use linewise::{ScanEvent, Scanner, ScannerOptions};
    ///
    /// let mut events = Vec::new();
    /// let input: &[u8] = b"abc\n";
    /// let mut scanner = Scanner::with_trace(input, ScannerOptions::default(), |e: ScanEvent| {
    ///     events.push(e);
    /// });
    /// while scanner.scan() {}
    /// drop(scanner);
    /// assert_eq!(events.last(), Some(&ScanEvent::EndOfInput));
    /// ```
    pub fn with_trace(source: S, options: ScannerOptions, trace: T) -> Self {
        let options = options.normalized();
        Self {
            source,
            window: Window::new(options.buffer_size, options.min_read),
            overflow: Overflow::new(),
            trace,
            state: State::Ready,
            record: Record::None,
            next_start: 0,
            width: 0,
            eof: false,
            consumed: 0,
            err: None,
        }
    }

    /// Advance to the next record.
    ///
    /// Returns `true` when a record is available through [`bytes`] and
    /// [`text`]. Returns `false` at end of input or after a source error;
    /// check [`err`] to tell them apart. Once `false` has been returned every
    /// later call returns `false` as well.
    ///
    /// May call [`Source::read`] any number of times, and blocks while the
    /// source blocks.
    ///
    /// [`bytes`]: Scanner::bytes
    /// [`text`]: Scanner::text
    /// [`err`]: Scanner::err
    pub fn scan(&mut self) -> bool {
        if matches!(self.state, State::Done | State::Errored) {
            return false;
        }

        self.release();
        match self.advance() {
            Ok(true) => {
                self.state = State::Yielded;
                true
            }
            Ok(false) => {
                self.state = State::Done;
                self.trace.event(ScanEvent::EndOfInput);
                false
            }
            Err(source) => {
                self.state = State::Errored;
                self.trace.event(ScanEvent::ReadFailed {
                    offset: self.consumed,
                });
                self.err = Some(ScanError::new(source, self.consumed));
                false
            }
        }
    }

    /// The current record, without its terminator.
    ///
    /// Empty before the first [`scan`](Scanner::scan) and after it has
    /// returned `false`. The slice may point into the reusable read buffer;
    /// copy it to keep it past the next `scan`.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        match self.record {
            Record::None => &[],
            Record::Window { start, end } => self.window.slice(start, end),
            Record::Overflow => self.overflow.as_slice(),
        }
    }

    /// The current record as text, with invalid UTF-8 replaced by U+FFFD.
    ///
    /// Borrowed when the record is valid UTF-8.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        self.bytes().to_str_lossy()
    }

    /// The current record as a byte string, suitable for display without
    /// decoding.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        self.bytes().as_bstr()
    }

    /// The source error that stopped scanning, if any.
    ///
    /// `None` while scanning and after a clean end of input.
    #[must_use]
    pub fn err(&self) -> Option<&ScanError<S::Error>> {
        self.err.as_ref()
    }

    /// Width of the terminator that ended the current record: 1 for LF, 2 for
    /// CRLF, 0 for a final record cut off by end of input or when no record
    /// is current.
    #[must_use]
    pub fn terminator_width(&self) -> usize {
        self.width
    }

    /// Capacity of the reusable read buffer.
    #[must_use]
    pub fn buffer_capacity(&self) -> usize {
        self.window.capacity()
    }

    /// Borrow the source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Recover the source. Buffered, unconsumed bytes are lost.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Convert into an iterator of owned records.
    pub fn into_records(self) -> IntoRecords<S, T> {
        IntoRecords { scanner: self }
    }

    /// Drop the previous record and step past its terminator.
    fn release(&mut self) {
        if self.record == Record::Overflow {
            self.overflow.clear();
        }
        self.record = Record::None;
        self.width = 0;
        self.window.consume(self.next_start);
    }

    fn advance(&mut self) -> Result<bool, S::Error> {
        loop {
            if let Some(t) = self.window.search() {
                self.terminated(t);
                return Ok(true);
            }
            if self.eof {
                return Ok(self.unterminated());
            }
            self.make_room();
            self.fill()?;
        }
    }

    fn terminated(&mut self, t: Terminator) {
        self.next_start = t.end();
        self.width = t.width;
        if self.overflow.is_empty() {
            self.record = Record::Window {
                start: self.window.start(),
                end: t.content_end,
            };
            return;
        }

        // An overflowing record always restarts the window at offset 0.
        debug_assert_eq!(self.window.start(), 0);
        if t.content_end == 0 && t.width == 1 && self.overflow.strip_trailing_cr() {
            // CR went to the overflow, its LF arrived with the next read.
            self.width = 2;
        }
        self.overflow.append(self.window.slice(0, t.content_end));
        self.record = Record::Overflow;
    }

    /// Emit whatever is left at end of input as a final record.
    fn unterminated(&mut self) -> bool {
        if self.window.is_drained() && self.overflow.is_empty() {
            return false;
        }

        let (start, end) = (self.window.start(), self.window.filled());
        self.next_start = end;
        self.width = 0;
        if self.overflow.is_empty() {
            self.record = Record::Window { start, end };
        } else {
            self.overflow.append(self.window.live());
            self.record = Record::Overflow;
        }
        true
    }

    fn make_room(&mut self) {
        match self.window.make_room(&mut self.overflow) {
            Room::Ready => {}
            Room::Compacted { shifted, live } => {
                self.trace.event(ScanEvent::Compacted { shifted, live });
            }
            Room::Overflowed { appended } => {
                self.trace.event(ScanEvent::Overflowed {
                    appended,
                    total: self.overflow.len(),
                });
            }
        }
    }

    fn fill(&mut self) -> Result<(), S::Error> {
        let filled = self.source.read(self.window.spare_mut())?;
        let len = self.window.commit(filled.len());
        self.consumed += len as u64;
        if filled.is_end() {
            self.eof = true;
            self.trace.event(ScanEvent::Read { len, end: true });
        } else if len == 0 {
            self.trace.event(ScanEvent::Retry);
        } else {
            self.trace.event(ScanEvent::Read { len, end: false });
        }
        Ok(())
    }
}

impl<S: Source, T> fmt::Debug for Scanner<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("state", &self.state)
            .field("capacity", &self.window.capacity())
            .field("start", &self.window.start())
            .field("filled", &self.window.filled())
            .field("overflow", &self.overflow.len())
            .field("consumed", &self.consumed)
            .finish_non_exhaustive()
    }
}

/// Iterator of owned records, created by [`Scanner::into_records`].
///
/// Yields each record as a fresh `Vec<u8>`. A source error is yielded once,
/// after which the iterator is exhausted.
#[derive(Debug)]
pub struct IntoRecords<S: Source, T = Silent> {
    scanner: Scanner<S, T>,
}

impl<S: Source, T: Trace> Iterator for IntoRecords<S, T> {
    type Item = Result<Vec<u8>, ScanError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.scanner.scan() {
            Some(Ok(self.scanner.bytes().to_vec()))
        } else {
            self.scanner.err.take().map(Err)
        }
    }
}

impl<S: Source, T: Trace> core::iter::FusedIterator for IntoRecords<S, T> {}

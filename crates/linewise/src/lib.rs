//! Newline-delimited record scanning without a maximum line length.
//!
//! [`Scanner`] reads an unbounded byte stream through a reusable buffer and
//! yields the records between LF or CRLF terminators. Unlike a bounded line
//! reader it never fails on a long line: records that fit in the buffer are
//! returned as borrowed slices, and longer ones are reassembled in a side
//! buffer and returned whole.
//!
//! ```rust
//! use linewise::Scanner;
//!
//! let input: &[u8] = b"alpha\r\nbeta\n\ngamma";
//! let mut scanner = Scanner::new(input);
//! let mut records = Vec::new();
//! while scanner.scan() {
//!     records.push(scanner.text().into_owned());
//! }
//! assert!(scanner.err().is_none());
//! assert_eq!(records, ["alpha", "beta", "", "gamma"]);
//! ```
//!
//! For data already in memory use [`SliceScanner`], and to buffer a whole
//! source before splitting it use [`Records`]. Both scanners implement
//! [`Lines`].

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod lines;
mod options;
mod overflow;
mod records;
mod scanner;
mod slice;
mod source;
mod terminator;
mod trace;
mod window;

#[doc(hidden)]
pub mod chunk_utils;

#[cfg(test)]
mod tests;

pub use error::{RecordsError, ScanError};
pub use lines::Lines;
pub use options::{DEFAULT_BUFFER_SIZE, DEFAULT_MIN_READ, ScannerOptions};
pub use records::Records;
pub use scanner::{IntoRecords, Scanner, Silent};
pub use slice::{SliceRecords, SliceScanner};
#[cfg(feature = "std")]
pub use source::IoSource;
pub use source::{Filled, Source};
pub use terminator::{Terminator, find_terminator};
#[cfg(feature = "log")]
pub use trace::LogTrace;
pub use trace::{ScanEvent, Trace};

#[cfg(feature = "std")]
impl<R: std::io::Read> Scanner<IoSource<R>> {
    /// Create a scanner over a [`std::io::Read`] with a 16 KiB buffer.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use linewise::Scanner;
    ///
    /// let mut scanner = Scanner::from_reader(Cursor::new("one\ntwo"));
    /// assert!(scanner.scan());
    /// assert_eq!(scanner.text(), "one");
    /// ```
    pub fn from_reader(reader: R) -> Self {
        Self::new(IoSource::new(reader))
    }
}

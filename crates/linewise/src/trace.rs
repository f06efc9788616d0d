//! Optional debug tracing for [`Scanner`](crate::Scanner).
//!
//! A scanner built with [`Scanner::with_trace`](crate::Scanner::with_trace)
//! reports buffer management decisions to a [`Trace`] sink. Nothing is
//! reported, and nothing is formatted, when no sink is installed.

use core::fmt;

/// A buffer management decision made while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    /// A read delivered `len` bytes; `end` is set when the source also
    /// reported end of input.
    Read {
        /// Bytes delivered.
        len: usize,
        /// Whether the source is exhausted.
        end: bool,
    },
    /// A read delivered no bytes and no end signal; it will be retried.
    Retry,
    /// Live bytes were shifted to the front of the read buffer.
    Compacted {
        /// Offset the live window started at before the shift.
        shifted: usize,
        /// Bytes moved.
        live: usize,
    },
    /// Live bytes were moved into the overflow buffer.
    Overflowed {
        /// Bytes appended by this step.
        appended: usize,
        /// Overflow length after appending.
        total: usize,
    },
    /// The source is exhausted and all records have been produced.
    EndOfInput,
    /// The source failed at stream byte `offset`.
    ReadFailed {
        /// Stream byte offset of the failure.
        offset: u64,
    },
}

impl fmt::Display for ScanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ScanEvent::Read { len, end: false } => write!(f, "read {len} bytes"),
            ScanEvent::Read { len, end: true } => write!(f, "read {len} bytes, end of input"),
            ScanEvent::Retry => f.write_str("empty read, retrying"),
            ScanEvent::Compacted { shifted, live } => {
                write!(f, "compacted {live} live bytes from offset {shifted}")
            }
            ScanEvent::Overflowed { appended, total } => {
                write!(f, "overflowed {appended} bytes, {total} pending")
            }
            ScanEvent::EndOfInput => f.write_str("end of input"),
            ScanEvent::ReadFailed { offset } => write!(f, "read failed at byte {offset}"),
        }
    }
}

/// Receiver of [`ScanEvent`]s.
pub trait Trace {
    /// Record one event.
    fn event(&mut self, event: ScanEvent);
}

impl<F: FnMut(ScanEvent)> Trace for F {
    #[inline]
    fn event(&mut self, event: ScanEvent) {
        self(event);
    }
}

/// Forwards events to the [`log`] facade under the `linewise` target.
///
/// Reads and retries are logged at `trace` level, everything else at `debug`.
#[cfg(feature = "log")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

#[cfg(feature = "log")]
impl Trace for LogTrace {
    fn event(&mut self, event: ScanEvent) {
        match event {
            ScanEvent::Read { .. } | ScanEvent::Retry => {
                log::trace!(target: "linewise", "{event}");
            }
            _ => log::debug!(target: "linewise", "{event}"),
        }
    }
}

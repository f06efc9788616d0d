/// Default read buffer capacity in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 16 * 1024;

/// Default minimum number of free bytes offered to each read.
pub const DEFAULT_MIN_READ: usize = 512;

/// Configuration for [`Scanner`](crate::Scanner).
///
/// # Examples
///
/// ```rust
/// use linewise::{Scanner, ScannerOptions};
///
/// let input: &[u8] = b"one\ntwo\n";
/// let mut scanner = Scanner::with_options(
///     input,
///     ScannerOptions {
///         buffer_size: 4096,
///         ..Default::default()
///     },
/// );
/// assert!(scanner.scan());
/// assert_eq!(scanner.bytes(), b"one");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerOptions {
    /// Capacity of the reusable read buffer.
    ///
    /// Records that fit in one buffer-full are returned as borrowed slices of
    /// it. Longer records are still returned whole, reassembled in a side
    /// buffer. This is never a limit on record length.
    ///
    /// Values below 1 are raised to 1.
    ///
    /// # Default
    ///
    /// 16 KiB
    pub buffer_size: usize,

    /// Smallest free region the scanner will hand to [`Source::read`].
    ///
    /// When less room than this is left at the end of the buffer, the scanner
    /// first tries to shift the current window to the front and otherwise
    /// moves it into the overflow buffer.
    ///
    /// Clamped to `1..=buffer_size`.
    ///
    /// # Default
    ///
    /// 512 bytes
    ///
    /// [`Source::read`]: crate::Source::read
    pub min_read: usize,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            min_read: DEFAULT_MIN_READ,
        }
    }
}

impl ScannerOptions {
    /// Options with the given buffer capacity and the default minimum read.
    #[must_use]
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self {
            buffer_size,
            ..Self::default()
        }
    }

    pub(crate) fn normalized(self) -> Self {
        let buffer_size = self.buffer_size.max(1);
        Self {
            buffer_size,
            min_read: self.min_read.clamp(1, buffer_size),
        }
    }
}

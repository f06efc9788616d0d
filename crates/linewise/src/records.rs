use alloc::vec::Vec;

use crate::{
    error::RecordsError,
    options::DEFAULT_BUFFER_SIZE,
    slice::SliceRecords,
    source::{Filled, Source},
};

/// A whole source buffered in memory, split into records on demand.
///
/// Useful for responses that are small enough to hold at once: one read loop,
/// then every record is a borrowed slice of a single allocation.
///
/// ```rust
/// use linewise::Records;
///
/// let input: &[u8] = b"first\r\nsecond\n";
/// let records = Records::read_from(input).unwrap();
/// assert_eq!(records.split(), vec![&b"first"[..], &b"second"[..]]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Records {
    buf: Vec<u8>,
}

impl Records {
    /// Read `source` until it reports end of input.
    ///
    /// # Errors
    ///
    /// Returns the first source error; bytes read before it are discarded.
    pub fn read_from<S: Source>(mut source: S) -> Result<Self, RecordsError<S::Error>> {
        let mut buf = Vec::new();
        // `buf[..len]` holds data, the rest is zeroed spare room.
        let mut len = 0;
        loop {
            if len == buf.len() {
                buf.resize(len + DEFAULT_BUFFER_SIZE, 0);
            }
            let filled = match source.read(&mut buf[len..]) {
                Ok(filled) => filled,
                Err(e) => return Err(RecordsError::new(e, len)),
            };
            len += filled.len().min(buf.len() - len);
            if let Filled::End(_) = filled {
                buf.truncate(len);
                buf.shrink_to_fit();
                return Ok(Self { buf });
            }
        }
    }

    /// Every record, in order.
    #[must_use]
    pub fn split(&self) -> Vec<&[u8]> {
        self.iter().collect()
    }

    /// Iterate over the records.
    #[must_use]
    pub fn iter(&self) -> SliceRecords<'_> {
        SliceRecords::new(&self.buf)
    }

    /// The buffered bytes, terminators included.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Take the buffered bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl From<Vec<u8>> for Records {
    fn from(buf: Vec<u8>) -> Self {
        Self { buf }
    }
}

impl<'a> IntoIterator for &'a Records {
    type Item = &'a [u8];
    type IntoIter = SliceRecords<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use alloc::vec::Vec;

use crate::terminator::CR;

/// Side buffer for a record that outgrew one buffer-full.
///
/// Empty unless a record is being reassembled. [`Overflow::clear`] keeps the
/// allocation so later long records reuse it.
#[derive(Debug, Default)]
pub(crate) struct Overflow {
    data: Vec<u8>,
}

impl Overflow {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Append already-searched bytes of the record under assembly.
    pub(crate) fn append(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Drop a carriage return left at the end of the last fragment.
    ///
    /// Used when the line feed of a CRLF pair arrives at the head of the next
    /// buffer-full. Returns whether a CR was removed.
    pub(crate) fn strip_trailing_cr(&mut self) -> bool {
        if self.data.last() == Some(&CR) {
            self.data.pop();
            true
        } else {
            false
        }
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }
}

//! Read buffer and sliding window.
//!
//! One fixed-capacity allocation is reused for the whole stream. Three
//! offsets partition it:
//!
//! ```text
//! 0          start        cursor          filled        capacity
//! |  consumed  |  searched   |  unsearched   |    free    |
//! ```
//!
//! Invariant: `start <= cursor <= filled <= capacity`. `start` begins the
//! record under assembly, `cursor` is the next byte the terminator search
//! will look at, and `filled` ends valid data.
//!
//! When the free tail gets shorter than `min_read`, room is recovered before
//! the next read, either by shifting the live window to offset 0
//! (compaction) or, when that would not free enough, by moving the live
//! window into the [`Overflow`] buffer and starting over at offset 0.

use alloc::{boxed::Box, vec};

use crate::{
    overflow::Overflow,
    terminator::{Terminator, find_terminator},
};

/// How [`Window::make_room`] recovered space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Room {
    /// Enough free space already.
    Ready,
    /// `live` bytes were shifted down from offset `shifted`.
    Compacted { shifted: usize, live: usize },
    /// `appended` bytes were moved into the overflow buffer.
    Overflowed { appended: usize },
}

#[derive(Debug)]
pub(crate) struct Window {
    buf: Box<[u8]>,
    start: usize,
    cursor: usize,
    filled: usize,
    min_read: usize,
}

impl Window {
    pub(crate) fn new(capacity: usize, min_read: usize) -> Self {
        debug_assert!(capacity > 0 && (1..=capacity).contains(&min_read));
        Self {
            buf: vec![0; capacity].into_boxed_slice(),
            start: 0,
            cursor: 0,
            filled: 0,
            min_read,
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub(crate) fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub(crate) fn filled(&self) -> usize {
        self.filled
    }

    /// Bytes between `start` and `filled`: the record under assembly.
    #[inline]
    pub(crate) fn live(&self) -> &[u8] {
        &self.buf[self.start..self.filled]
    }

    #[inline]
    pub(crate) fn slice(&self, from: usize, to: usize) -> &[u8] {
        &self.buf[from..to]
    }

    /// Whether every filled byte has been consumed.
    #[inline]
    pub(crate) fn is_drained(&self) -> bool {
        self.start == self.filled
    }

    /// Begin the next record at absolute offset `at`.
    pub(crate) fn consume(&mut self, at: usize) {
        debug_assert!(self.start <= at && at <= self.filled);
        self.start = at;
        self.cursor = at;
    }

    /// Search the unsearched bytes for a terminator.
    ///
    /// On a hit the returned offsets are absolute and `cursor` is left at the
    /// content end. On a miss `cursor` moves to `filled`.
    pub(crate) fn search(&mut self) -> Option<Terminator> {
        let window = &self.buf[self.start..self.filled];
        match find_terminator(window, self.cursor - self.start) {
            Some(t) => {
                let content_end = self.start + t.content_end;
                self.cursor = content_end;
                Some(Terminator {
                    content_end,
                    width: t.width,
                })
            }
            None => {
                self.cursor = self.filled;
                None
            }
        }
    }

    /// Guarantee at least `min_read` free bytes after `filled`.
    pub(crate) fn make_room(&mut self, overflow: &mut Overflow) -> Room {
        if self.capacity() - self.filled >= self.min_read {
            return Room::Ready;
        }

        let live = self.filled - self.start;
        if self.capacity() - live < self.min_read {
            overflow.append(self.live());
            self.start = 0;
            self.cursor = 0;
            self.filled = 0;
            Room::Overflowed { appended: live }
        } else {
            let shifted = self.start;
            self.buf.copy_within(self.start..self.filled, 0);
            self.start = 0;
            self.cursor -= shifted;
            self.filled = live;
            Room::Compacted { shifted, live }
        }
    }

    /// Free tail of the buffer, to be handed to a read.
    #[inline]
    pub(crate) fn spare_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.filled..]
    }

    /// Mark `n` bytes of the spare tail as filled.
    pub(crate) fn commit(&mut self, n: usize) -> usize {
        let n = n.min(self.capacity() - self.filled);
        self.filled += n;
        n
    }
}

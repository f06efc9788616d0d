//! Helpers for driving scanners with controlled read boundaries.
//!
//! Used by the tests, benchmarks and fuzz target; not part of the stable API.

use alloc::{collections::VecDeque, vec::Vec};

use crate::source::{Filled, Source};

/// Split `payload` into `parts` chunks of approximately equal size.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    let chunk_size = payload.len().div_ceil(parts).max(1);
    payload.chunks(chunk_size).collect()
}

/// Split `payload` at positions derived from `splits`.
///
/// Each value picks the size of the next chunk modulo the remaining length,
/// the same way arbitrary partitions are derived in property tests. A value
/// of zero produces an empty chunk, which a [`ChunkSource`] turns into a
/// zero-byte read.
#[must_use]
pub fn split_by<'a>(payload: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::with_capacity(splits.len() + 1);
    let mut rest = payload;
    for &s in splits {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(s % (rest.len() + 1));
        chunks.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}

/// A [`Source`] that replays a fixed list of chunks, one per read.
///
/// Chunks larger than the offered buffer are delivered over several reads.
/// An empty chunk yields `Filled::More(0)`. With `end_with_last` set, the
/// final bytes arrive together with the end signal; otherwise end of input is
/// reported by a separate, empty read.
#[derive(Debug, Clone)]
pub struct ChunkSource<'a> {
    chunks: VecDeque<&'a [u8]>,
    end_with_last: bool,
}

impl<'a> ChunkSource<'a> {
    /// Replay `chunks`.
    pub fn new<I: IntoIterator<Item = &'a [u8]>>(chunks: I) -> Self {
        Self {
            chunks: chunks.into_iter().collect(),
            end_with_last: false,
        }
    }

    /// Deliver the last bytes together with the end signal.
    #[must_use]
    pub fn end_with_last(mut self, yes: bool) -> Self {
        self.end_with_last = yes;
        self
    }
}

impl Source for ChunkSource<'_> {
    type Error = core::convert::Infallible;

    fn read(&mut self, buf: &mut [u8]) -> Result<Filled, Self::Error> {
        let Some(chunk) = self.chunks.pop_front() else {
            return Ok(Filled::End(0));
        };
        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        if n < chunk.len() {
            self.chunks.push_front(&chunk[n..]);
        }
        if self.end_with_last && self.chunks.is_empty() {
            Ok(Filled::End(n))
        } else {
            Ok(Filled::More(n))
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn produce_chunks_covers_payload() {
        let chunks = produce_chunks(b"abcdefg", 3);
        assert_eq!(chunks, vec![&b"abc"[..], &b"def"[..], &b"g"[..]]);
        assert!(produce_chunks(b"", 4).is_empty());
    }

    #[test]
    fn split_by_allows_empty_chunks() {
        let chunks = split_by(b"abcdef", &[0, 2, 10, 1]);
        assert_eq!(chunks.concat(), b"abcdef");
        assert_eq!(chunks[0], b"");
        assert_eq!(chunks[1], b"ab");
    }

    #[test]
    fn chunk_source_splits_oversized_chunks() {
        let mut src = ChunkSource::new([&b"abcde"[..]]).end_with_last(true);
        let mut buf = [0u8; 3];
        assert_eq!(src.read(&mut buf), Ok(Filled::More(3)));
        assert_eq!(src.read(&mut buf), Ok(Filled::End(2)));
        assert_eq!(&buf[..2], b"de");
        assert_eq!(src.read(&mut buf), Ok(Filled::End(0)));
    }
}

use alloc::{boxed::Box, vec::Vec};

use quickcheck::{Arbitrary, Gen};

/// Input biased towards terminator bytes so that empty records, lone CRs and
/// CRLF pairs show up often.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Corpus(pub(crate) Vec<u8>);

const ALPHABET: &[u8] = b"ab\r\n\r\n\xff";

impl Arbitrary for Corpus {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % (g.size() * 4 + 1);
        let mut bytes = Vec::with_capacity(len);
        for _ in 0..len {
            let b = *g.choose(ALPHABET).unwrap_or(&b'a');
            // Occasionally a long run, to push records past small buffers.
            if b == b'a' && u8::arbitrary(g) % 16 == 0 {
                bytes.extend(core::iter::repeat_n(b'a', usize::arbitrary(g) % 64));
            } else {
                bytes.push(b);
            }
        }
        Self(bytes)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Corpus))
    }
}

/// Buffer capacity and minimum read, kept small.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Geometry {
    pub(crate) buffer_size: usize,
    pub(crate) min_read: usize,
}

impl Arbitrary for Geometry {
    fn arbitrary(g: &mut Gen) -> Self {
        let buffer_size = 1 + usize::arbitrary(g) % 24;
        let min_read = 1 + usize::arbitrary(g) % buffer_size;
        Self {
            buffer_size,
            min_read,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let Self {
            buffer_size,
            min_read,
        } = *self;
        Box::new(
            (1..buffer_size)
                .rev()
                .take(4)
                .map(move |b| Self {
                    buffer_size: b,
                    min_read: min_read.min(b),
                }),
        )
    }
}

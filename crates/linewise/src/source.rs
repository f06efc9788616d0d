//! Byte sources consumed by [`Scanner`](crate::Scanner).

/// Outcome of a successful [`Source::read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filled {
    /// `n` bytes were written and more data may follow. `More(0)` asks the
    /// caller to try again.
    More(usize),
    /// `n` bytes were written and the source is exhausted.
    End(usize),
}

impl Filled {
    /// Number of bytes written into the caller's buffer.
    #[inline]
    #[must_use]
    pub fn len(self) -> usize {
        match self {
            Filled::More(n) | Filled::End(n) => n,
        }
    }

    /// Whether no bytes were written.
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether the source reported end of input.
    #[inline]
    #[must_use]
    pub fn is_end(self) -> bool {
        matches!(self, Filled::End(_))
    }
}

/// A blocking producer of bytes.
///
/// Implementations fill a prefix of `buf` and report how many bytes they
/// wrote. Once `Filled::End` has been returned the scanner never calls
/// `read` again.
pub trait Source {
    /// Transport failure reported by the source.
    type Error: core::error::Error + 'static;

    /// Fill a prefix of `buf`.
    ///
    /// # Errors
    ///
    /// Returns the transport failure. The scanner treats any error as fatal.
    fn read(&mut self, buf: &mut [u8]) -> Result<Filled, Self::Error>;
}

impl<S: Source + ?Sized> Source for &mut S {
    type Error = S::Error;

    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> Result<Filled, Self::Error> {
        (**self).read(buf)
    }
}

impl Source for &[u8] {
    type Error = core::convert::Infallible;

    fn read(&mut self, buf: &mut [u8]) -> Result<Filled, Self::Error> {
        let n = buf.len().min(self.len());
        let (head, tail) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        if self.is_empty() {
            Ok(Filled::End(n))
        } else {
            Ok(Filled::More(n))
        }
    }
}

/// Adapts a [`std::io::Read`] into a [`Source`].
///
/// `Ok(0)` from the reader is end of input, `ErrorKind::Interrupted` becomes a
/// zero-byte retry, and every other error is passed through.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Default)]
pub struct IoSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> IoSource<R> {
    /// Wrap `inner`.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap the reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> Source for IoSource<R> {
    type Error = std::io::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<Filled, Self::Error> {
        match self.inner.read(buf) {
            Ok(0) if !buf.is_empty() => Ok(Filled::End(0)),
            Ok(n) => Ok(Filled::More(n)),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => Ok(Filled::More(0)),
            Err(e) => Err(e),
        }
    }
}

use thiserror::Error;

/// A [`Source`](crate::Source) failure observed by a scanner.
///
/// The original error is kept intact and exposed through
/// [`core::error::Error::source`].
#[derive(Error, Debug)]
#[error("read failed at byte {offset}")]
pub struct ScanError<E: core::error::Error + 'static> {
    #[source]
    source: E,
    offset: u64,
}

impl<E: core::error::Error + 'static> ScanError<E> {
    pub(crate) fn new(source: E, offset: u64) -> Self {
        Self { source, offset }
    }

    /// Number of bytes read from the source before it failed.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Borrow the source's error.
    #[must_use]
    pub fn source_ref(&self) -> &E {
        &self.source
    }

    /// Take the source's error.
    #[must_use]
    pub fn into_source(self) -> E {
        self.source
    }
}

/// Failure while buffering a whole source into [`Records`](crate::Records).
#[derive(Error, Debug)]
#[error("reading records failed after {read} bytes")]
pub struct RecordsError<E: core::error::Error + 'static> {
    #[source]
    source: E,
    read: usize,
}

impl<E: core::error::Error + 'static> RecordsError<E> {
    pub(crate) fn new(source: E, read: usize) -> Self {
        Self { source, read }
    }

    /// Bytes buffered before the failure. They are discarded.
    #[must_use]
    pub fn bytes_read(&self) -> usize {
        self.read
    }

    /// Take the source's error.
    #[must_use]
    pub fn into_source(self) -> E {
        self.source
    }
}

//! The byte source a chunker pulls from.
//!
//! A [`Source`] is a single blocking fill operation. Anything implementing
//! [`std::io::Read`] is already a source, so files, sockets, cursors and
//! `&mut R` borrows all work without wrapping.

use std::io::{self, ErrorKind, Read};

/// Outcome of one [`Source::fill`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Filled {
    /// Number of bytes written to the front of the destination.
    pub written: usize,

    /// True once the source has no more data. May accompany a final
    /// non-zero `written`.
    pub end: bool,
}

impl Filled {
    /// Bytes were written and more may follow.
    pub const fn more(written: usize) -> Self {
        Self {
            written,
            end: false,
        }
    }

    /// The source is exhausted after writing `written` bytes.
    pub const fn end(written: usize) -> Self {
        Self { written, end: true }
    }
}

/// A pull-based byte source.
///
/// The chunker only ever calls [`fill`](Source::fill) with a non-empty
/// destination. An error is fatal for the chunking pass: the chunker does
/// not retry and must be discarded.
///
/// # Example
///
/// ```
/// use std::io;
/// use gearcut::{Chunker, Filled, Source};
///
/// /// Emits `len` copies of one byte.
/// struct Repeat {
///     byte: u8,
///     len: usize,
/// }
///
/// impl Source for Repeat {
///     fn fill(&mut self, dst: &mut [u8]) -> io::Result<Filled> {
///         let n = dst.len().min(self.len);
///         dst[..n].fill(self.byte);
///         self.len -= n;
///         Ok(Filled { written: n, end: self.len == 0 })
///     }
/// }
///
/// let mut chunker = Chunker::new(Repeat { byte: 7, len: 100_000 });
/// let mut last = 0;
/// while let Some(offset) = chunker.next_boundary()? {
///     last = offset;
/// }
/// assert_eq!(last, 100_000);
/// # Ok::<(), gearcut::ChunkError>(())
/// ```
pub trait Source {
    /// Writes up to `dst.len()` bytes into `dst`.
    fn fill(&mut self, dst: &mut [u8]) -> io::Result<Filled>;
}

impl<R: Read + ?Sized> Source for R {
    fn fill(&mut self, dst: &mut [u8]) -> io::Result<Filled> {
        loop {
            match self.read(dst) {
                Ok(0) => return Ok(Filled::end(0)),
                Ok(n) => return Ok(Filled::more(n)),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

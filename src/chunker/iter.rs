//! Iterator adapter and in-memory helper.
//!
//! - [`ChunkIter`] - Iterator over the end offsets produced by a [`Chunker`]
//! - [`cut_points`] - Partitions data that is already in memory

use bytes::Bytes;

use super::engine::Chunker;
use crate::cdc::FastCdc;
use crate::config::ChunkConfig;
use crate::error::ChunkError;
use crate::source::Source;

/// An iterator that yields chunk end offsets from a source.
///
/// Yields `Ok(offset)` for each chunk, then ends. After an error the
/// iterator yields nothing more.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use gearcut::Chunker;
///
/// let data = vec![0x5Au8; 100_000];
/// let offsets = Chunker::new(Cursor::new(&data))
///     .into_iter()
///     .collect::<Result<Vec<_>, _>>()?;
///
/// assert_eq!(offsets.last(), Some(&100_000));
/// # Ok::<(), gearcut::ChunkError>(())
/// ```
#[derive(Debug)]
pub struct ChunkIter<S> {
    chunker: Chunker<S>,
    finished: bool,
}

impl<S: Source> ChunkIter<S> {
    /// Returns the underlying chunker.
    pub fn into_chunker(self) -> Chunker<S> {
        self.chunker
    }
}

impl<S: Source> Iterator for ChunkIter<S> {
    type Item = Result<u64, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.chunker.next_boundary() {
            Ok(Some(offset)) => Some(Ok(offset)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: Source> std::iter::FusedIterator for ChunkIter<S> {}

impl<S: Source> IntoIterator for Chunker<S> {
    type Item = Result<u64, ChunkError>;
    type IntoIter = ChunkIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        ChunkIter {
            chunker: self,
            finished: false,
        }
    }
}

/// Returns the chunk end offsets of in-memory data.
///
/// Produces exactly the offsets a [`Chunker`] produces for the same bytes,
/// without a read buffer: the whole input is the scan window.
///
/// # Example
///
/// ```
/// use gearcut::{cut_points, ChunkConfig};
///
/// let offsets = cut_points(vec![7u8; 3000], &ChunkConfig::default());
/// assert_eq!(offsets.last(), Some(&3000));
///
/// assert!(cut_points(Vec::<u8>::new(), &ChunkConfig::default()).is_empty());
/// ```
pub fn cut_points(data: impl Into<Bytes>, config: &ChunkConfig) -> Vec<u64> {
    let data = data.into();
    let cdc = FastCdc::new(config);
    let mut offsets = Vec::with_capacity(data.len() / config.avg_size() + 1);

    let mut pos = 0usize;
    while pos < data.len() {
        pos += cdc.find_cut_point(&data[pos..]);
        offsets.push(pos as u64);
    }

    offsets
}

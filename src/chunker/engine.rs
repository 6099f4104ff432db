//! Core chunking engine - Chunker with a pull-based API.
//!
//! This module drives the FastCDC detector over a buffered window of the
//! source:
//!
//! - [`Chunker`] - Stateful engine that owns the window and the source
//! - `next_boundary()` - Returns the end offset of the next chunk
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use gearcut::Chunker;
//!
//! let data = vec![0u8; 100_000];
//! let mut chunker = Chunker::new(Cursor::new(&data));
//!
//! let mut start = 0;
//! while let Some(end) = chunker.next_boundary()? {
//!     println!("chunk {}..{}", start, end);
//!     start = end;
//! }
//! assert_eq!(start, 100_000);
//! # Ok::<(), gearcut::ChunkError>(())
//! ```

use bytes::{Buf, Bytes};
use tracing::trace;

use crate::buffer::Window;
use crate::cdc::FastCdc;
use crate::config::ChunkConfig;
use crate::error::ChunkError;
use crate::source::Source;

/// Where a chunker is in its single pass over the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Data may remain.
    Scanning,
    /// Every byte has been assigned to a chunk.
    Done,
    /// The source failed; the window contents are no longer trustworthy.
    Failed,
}

/// A chunker that splits a byte source into content-defined chunks.
///
/// Each call to [`next_boundary`](Chunker::next_boundary) returns the
/// absolute end offset of the next chunk. The first chunk starts at 0 and
/// each later chunk starts where the previous one ended, so the offsets
/// alone describe the whole partition.
///
/// # Guarantees
///
/// - Offsets are strictly increasing and the last one equals the stream length
/// - No chunk is longer than `max_size`
/// - Only the final chunk may be shorter than `min_size`
/// - Offsets do not depend on how the source splits its data across fills
///
/// # Ownership
///
/// The chunker owns its source for its lifetime. Pass `&mut reader` to
/// keep the reader, or call [`into_inner`](Chunker::into_inner).
///
/// A `Chunker` is single-pass and not shared: chunk several sources
/// concurrently by giving each its own instance.
#[derive(Debug)]
pub struct Chunker<S> {
    source: S,
    cdc: FastCdc,
    window: Window,
    config: ChunkConfig,
    state: State,
}

impl<S: Source> Chunker<S> {
    /// Creates a chunker with the default sizes (2 KiB / 8 KiB / 32 KiB).
    pub fn new(source: S) -> Self {
        Self::with_config(source, ChunkConfig::default())
    }

    /// Creates a chunker with the given configuration.
    ///
    /// Allocates a read buffer of `2 * max_size` bytes. Nothing is read
    /// from the source until the first call to `next_boundary`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Cursor;
    /// use gearcut::{ChunkConfig, Chunker};
    ///
    /// let config = ChunkConfig::new(8192, 32768, 131072)?;
    /// let chunker = Chunker::with_config(Cursor::new(vec![1u8; 10]), config);
    /// assert_eq!(chunker.config().max_size(), 131072);
    /// # Ok::<(), gearcut::ChunkError>(())
    /// ```
    pub fn with_config(source: S, config: ChunkConfig) -> Self {
        Self {
            source,
            cdc: FastCdc::new(&config),
            window: Window::with_capacity(config.buffer_capacity()),
            config,
            state: State::Scanning,
        }
    }

    /// Creates a chunker from explicit sizes.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] when the sizes are rejected by
    /// [`ChunkConfig::new`]; the source is not touched.
    pub fn with_sizes(
        source: S,
        min_size: usize,
        avg_size: usize,
        max_size: usize,
    ) -> Result<Self, ChunkError> {
        let config = ChunkConfig::new(min_size, avg_size, max_size)?;
        Ok(Self::with_config(source, config))
    }

    /// Returns the end offset of the next chunk.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(offset))` - The next chunk ends at `offset` (exclusive)
    /// - `Ok(None)` - The stream is fully partitioned; repeated calls keep
    ///   returning `Ok(None)`
    /// - `Err(ChunkError::SourceRead(_))` - The source failed; the chunker
    ///   must be discarded and later calls return [`ChunkError::Poisoned`]
    ///
    /// Blocks while the source fills the read buffer.
    pub fn next_boundary(&mut self) -> Result<Option<u64>, ChunkError> {
        match self.state {
            State::Done => return Ok(None),
            State::Failed => return Err(ChunkError::Poisoned),
            State::Scanning => {}
        }

        if let Err(e) = self
            .window
            .ensure_lookahead(&mut self.source, self.cdc.max_size())
        {
            self.state = State::Failed;
            return Err(e);
        }

        if self.window.is_drained() {
            self.state = State::Done;
            return Ok(None);
        }

        let cut = self.cdc.find_cut_point(self.window.unconsumed());
        self.window.advance(cut);

        let offset = self.window.position();
        trace!(offset, len = cut, "cut point");
        Ok(Some(offset))
    }

    /// Returns the end offset of the last chunk produced (0 before the first).
    pub fn offset(&self) -> u64 {
        self.window.position()
    }

    /// Returns true once every byte of the source has been assigned to a chunk.
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Returns the configuration used by this chunker.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Consumes the chunker and returns the source.
    ///
    /// Bytes already buffered but not yet assigned to a chunk are lost.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl Chunker<bytes::buf::Reader<Bytes>> {
    /// Creates a chunker over in-memory data without copying it.
    ///
    /// # Example
    ///
    /// ```
    /// use gearcut::{ChunkConfig, Chunker};
    ///
    /// let mut chunker = Chunker::from_bytes(&b"hello world"[..], ChunkConfig::default());
    /// assert_eq!(chunker.next_boundary()?, Some(11));
    /// assert_eq!(chunker.next_boundary()?, None);
    /// # Ok::<(), gearcut::ChunkError>(())
    /// ```
    pub fn from_bytes(data: impl Into<Bytes>, config: ChunkConfig) -> Self {
        Self::with_config(data.into().reader(), config)
    }
}

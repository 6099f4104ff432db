//! Look-ahead window over the source.

use std::fmt;
use std::io;

use tracing::{debug, trace};

use crate::error::ChunkError;
use crate::source::Source;

/// A fixed-capacity read buffer with a scan cursor.
///
/// ```text
/// 0          pos                 filled        capacity
/// |--consumed--|----unconsumed------|----free------|
/// ```
///
/// Invariant: `pos <= filled <= data.len()`. `origin` counts the bytes
/// compacted away from the front, so `origin + pos` is the absolute
/// stream offset of the cursor.
pub(crate) struct Window {
    data: Box<[u8]>,
    origin: u64,
    pos: usize,
    filled: usize,
    exhausted: bool,
}

impl Window {
    /// Allocates a window of `capacity` bytes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity].into_boxed_slice(),
            origin: 0,
            pos: 0,
            filled: 0,
            exhausted: false,
        }
    }

    /// Makes at least `lookahead` unconsumed bytes available unless the
    /// source runs dry first.
    ///
    /// Does nothing while enough bytes are buffered. Otherwise the
    /// unconsumed tail is moved to the front and the free space is filled
    /// until the buffer is full or the source reports its end.
    pub(crate) fn ensure_lookahead<S: Source + ?Sized>(
        &mut self,
        source: &mut S,
        lookahead: usize,
    ) -> Result<(), ChunkError> {
        if self.exhausted || self.filled - self.pos >= lookahead {
            return Ok(());
        }

        self.compact();

        while !self.exhausted && self.filled < self.data.len() {
            let free = self.data.len() - self.filled;
            let filled = source.fill(&mut self.data[self.filled..])?;
            if filled.written > free {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "source reported more bytes than the buffer holds",
                )
                .into());
            }
            self.filled += filled.written;
            trace!(written = filled.written, filled = self.filled, "refilled window");

            if filled.end {
                self.exhausted = true;
                debug!(total = self.origin + self.filled as u64, "source exhausted");
            }
        }

        Ok(())
    }

    /// Drops the consumed prefix, moving the unconsumed bytes to the front.
    fn compact(&mut self) {
        if self.pos == 0 {
            return;
        }

        self.data.copy_within(self.pos..self.filled, 0);
        self.origin += self.pos as u64;
        self.filled -= self.pos;
        self.pos = 0;
        debug!(origin = self.origin, retained = self.filled, "compacted window");
    }

    /// Returns the buffered bytes not yet assigned to a chunk.
    pub(crate) fn unconsumed(&self) -> &[u8] {
        &self.data[self.pos..self.filled]
    }

    /// Moves the cursor forward by `n` bytes.
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.filled - self.pos);
        self.pos += n;
    }

    /// Returns the absolute stream offset of the cursor.
    pub(crate) fn position(&self) -> u64 {
        self.origin + self.pos as u64
    }

    /// Returns true when the source is exhausted and every byte was consumed.
    pub(crate) fn is_drained(&self) -> bool {
        self.exhausted && self.pos == self.filled
    }

    #[cfg(test)]
    fn capacity(&self) -> usize {
        self.data.len()
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("capacity", &self.data.len())
            .field("origin", &self.origin)
            .field("pos", &self.pos)
            .field("filled", &self.filled)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

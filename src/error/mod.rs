//! Error types for gearcut.
//!
//! Reaching the end of the input is not an error: it is reported as
//! `Ok(None)` by [`Chunker::next_boundary`](crate::Chunker::next_boundary)
//! and as the end of iteration by [`ChunkIter`](crate::ChunkIter).

/// Errors that can occur during chunking operations.
#[derive(Debug, thiserror::Error)]
pub enum ChunkError {
    /// The byte source failed while the read buffer was being refilled.
    ///
    /// Fatal for the chunker that observed it.
    #[error("source read failed: {0}")]
    SourceRead(#[from] std::io::Error),

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The chunker was used again after a source read failure.
    #[error("chunker is unusable after an earlier source failure")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "test");
        let err: ChunkError = io_err.into();
        assert!(matches!(err, ChunkError::SourceRead(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = ChunkError::InvalidConfig {
            message: "chunk sizes must be non-zero",
        };
        assert_eq!(err.to_string(), "invalid config: chunk sizes must be non-zero");
        assert!(ChunkError::Poisoned.to_string().contains("unusable"));
    }
}

//! Configuration for chunking behavior.
//!
//! - [`ChunkConfig`] - Validated chunk size bounds and the masks derived from them
//! - [`ChunkSizes`] - The plain `(min, avg, max)` triple, e.g. as read from a file
//!
//! # Example
//!
//! ```
//! use gearcut::ChunkConfig;
//!
//! // Default sizes: 2 KiB / 8 KiB / 32 KiB
//! let config = ChunkConfig::default();
//! assert_eq!(config.avg_size(), 8 * 1024);
//!
//! // Custom sizes
//! let config = ChunkConfig::new(8192, 32768, 131072)?;
//! assert_eq!(config.buffer_capacity(), 2 * 131072);
//! # Ok::<(), gearcut::ChunkError>(())
//! ```

use crate::cdc::mask;
use crate::error::ChunkError;

/// Default minimum chunk size (2 KiB).
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 2 * 1024;

/// Default average/target chunk size (8 KiB).
pub const DEFAULT_AVG_CHUNK_SIZE: usize = 8 * 1024;

/// Default maximum chunk size (32 KiB).
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 32 * 1024;

/// Configuration for content-defined chunking.
///
/// A `ChunkConfig` can only be obtained through [`ChunkConfig::new`] (or
/// [`Default`]), so every instance is valid:
///
/// - all sizes are non-zero
/// - `min_size < avg_size < max_size`
/// - `avg_size` is at least 16 bytes, so both masks are well defined
/// - a buffer of `2 * max_size` bytes is addressable
///
/// The two stopping masks are derived once, here, from `avg_size`.
///
/// # Example
///
/// ```
/// use gearcut::ChunkConfig;
///
/// let config = ChunkConfig::new(2048, 8192, 32768)?;
/// assert!(config.mask_small().count_ones() > config.mask_large().count_ones());
///
/// assert!(ChunkConfig::new(8192, 8192, 32768).is_err());
/// # Ok::<(), gearcut::ChunkError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ChunkSizes", into = "ChunkSizes")
)]
pub struct ChunkConfig {
    /// Minimum chunk size in bytes.
    min_size: usize,

    /// Average/target chunk size in bytes.
    avg_size: usize,

    /// Maximum chunk size in bytes.
    max_size: usize,

    /// Mask applied between `min_size` and `avg_size`.
    mask_small: u64,

    /// Mask applied between `avg_size` and `max_size`.
    mask_large: u64,
}

impl ChunkConfig {
    /// Creates a new configuration with the specified size bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if:
    /// - Any size is zero
    /// - `min_size >= avg_size` or `avg_size >= max_size`
    /// - `avg_size` is below 16 bytes (or above `2^63 - 1`), which leaves
    ///   the mask spreading undefined
    /// - `2 * max_size` overflows `usize`
    pub fn new(min_size: usize, avg_size: usize, max_size: usize) -> Result<Self, ChunkError> {
        if min_size == 0 || avg_size == 0 || max_size == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "chunk sizes must be non-zero",
            });
        }

        if min_size >= avg_size {
            return Err(ChunkError::InvalidConfig {
                message: "min_size must be less than avg_size",
            });
        }

        if avg_size >= max_size {
            return Err(ChunkError::InvalidConfig {
                message: "avg_size must be less than max_size",
            });
        }

        let Some(bits) = mask::mask_bits(avg_size) else {
            return Err(ChunkError::InvalidConfig {
                message: "avg_size out of range for mask generation",
            });
        };

        if max_size.checked_mul(2).is_none() {
            return Err(ChunkError::InvalidConfig {
                message: "max_size too large to buffer",
            });
        }

        let (mask_small, mask_large) = mask::mask_pair(bits);

        Ok(Self {
            min_size,
            avg_size,
            max_size,
            mask_small,
            mask_large,
        })
    }

    /// Returns the minimum chunk size.
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Returns the average/target chunk size.
    pub fn avg_size(&self) -> usize {
        self.avg_size
    }

    /// Returns the maximum chunk size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns the mask used below the average size (more one-bits).
    pub fn mask_small(&self) -> u64 {
        self.mask_small
    }

    /// Returns the mask used above the average size (fewer one-bits).
    pub fn mask_large(&self) -> u64 {
        self.mask_large
    }

    /// Returns the size of the read buffer a chunker allocates.
    pub fn buffer_capacity(&self) -> usize {
        self.max_size * 2
    }

    /// Returns the plain size triple.
    pub fn sizes(&self) -> ChunkSizes {
        ChunkSizes {
            min_size: self.min_size,
            avg_size: self.avg_size,
            max_size: self.max_size,
        }
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        let (mask_small, mask_large) = DEFAULT_MASKS;
        Self {
            min_size: DEFAULT_MIN_CHUNK_SIZE,
            avg_size: DEFAULT_AVG_CHUNK_SIZE,
            max_size: DEFAULT_MAX_CHUNK_SIZE,
            mask_small,
            mask_large,
        }
    }
}

const DEFAULT_MASKS: (u64, u64) = match mask::mask_bits(DEFAULT_AVG_CHUNK_SIZE) {
    Some(bits) => mask::mask_pair(bits),
    None => panic!("default avg size must be valid"),
};

/// Unvalidated chunk size bounds.
///
/// Convert into a [`ChunkConfig`] with [`TryFrom`], which applies the same
/// checks as [`ChunkConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkSizes {
    /// Minimum chunk size in bytes.
    pub min_size: usize,
    /// Average/target chunk size in bytes.
    pub avg_size: usize,
    /// Maximum chunk size in bytes.
    pub max_size: usize,
}

impl Default for ChunkSizes {
    fn default() -> Self {
        ChunkConfig::default().sizes()
    }
}

impl TryFrom<ChunkSizes> for ChunkConfig {
    type Error = ChunkError;

    fn try_from(sizes: ChunkSizes) -> Result<Self, Self::Error> {
        Self::new(sizes.min_size, sizes.avg_size, sizes.max_size)
    }
}

impl From<ChunkConfig> for ChunkSizes {
    fn from(config: ChunkConfig) -> Self {
        config.sizes()
    }
}

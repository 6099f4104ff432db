//! FastCDC cut-point detection.
//!
//! # Algorithm Overview
//!
//! The detector runs a gear fingerprint over the window it is given:
//!
//! ```text
//! fp = (fp << 1) + GEAR[byte]      (wrapping, 64-bit)
//! ```
//!
//! Each shift pushes older bytes further up the word, so a byte stops
//! influencing `fp` after about 64 updates and no explicit eviction is
//! needed.
//!
//! - **Skip**: the first `min_size` bytes are never hashed
//! - **Normalized chunking**: `mask_small` (more bits, rare match) applies
//!   up to `avg_size`, then `mask_large` (fewer bits, frequent match)
//!   up to `max_size`
//! - **Forced cut**: no match before `max_size` (or end of window) cuts there
//!
//! # References
//!
//! Based on "FastCDC: A Fast and Efficient Content-Defined Chunking Approach for Data Deduplication"
//! by Wen Xia et al., USENIX ATC 2016.

use crate::config::ChunkConfig;

use super::gear::GEAR;

/// FastCDC cut-point detector.
///
/// Holds only immutable parameters, so one detector can scan any number
/// of windows. All position state lives with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastCdc {
    /// Minimum chunk size.
    min_size: usize,

    /// Average/target chunk size.
    avg_size: usize,

    /// Maximum chunk size.
    max_size: usize,

    /// The mask used below `avg_size` (harder to match).
    mask_s: u64,

    /// The mask used from `avg_size` up to `max_size` (easier to match).
    mask_l: u64,
}

impl FastCdc {
    /// Creates a detector for a validated configuration.
    pub fn new(config: &ChunkConfig) -> Self {
        Self {
            min_size: config.min_size(),
            avg_size: config.avg_size(),
            max_size: config.max_size(),
            mask_s: config.mask_small(),
            mask_l: config.mask_large(),
        }
    }

    /// Returns the length of the next chunk at the start of `window`.
    ///
    /// The result `k` satisfies `0 <= k <= window.len()`; the chunk is
    /// `window[..k]` and the next one starts at `window[k]`. A window of at
    /// most `min_size` bytes is returned whole, which is only correct when
    /// no more data can follow it.
    pub fn find_cut_point(&self, window: &[u8]) -> usize {
        let len = window.len();
        if len <= self.min_size {
            return len;
        }

        let mut fp = 0u64;
        let mut i = self.min_size;

        let normal = self.avg_size.min(len);
        while i < normal {
            fp = (fp << 1).wrapping_add(GEAR[window[i] as usize]);
            if fp & self.mask_s == 0 {
                return i;
            }
            i += 1;
        }

        let end = self.max_size.min(len);
        while i < end {
            fp = (fp << 1).wrapping_add(GEAR[window[i] as usize]);
            if fp & self.mask_l == 0 {
                return i;
            }
            i += 1;
        }

        i
    }

    /// Returns the maximum size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl Default for FastCdc {
    fn default() -> Self {
        Self::new(&ChunkConfig::default())
    }
}

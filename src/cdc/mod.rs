//! Content-Defined Chunking (CDC) implementation.
//!
//! This module contains the algorithm that identifies chunk boundaries
//! based on content patterns rather than fixed sizes.
//!
//! - [`GEAR`] - Per-byte constants of the rolling fingerprint
//! - [`FastCdc`] - Cut-point detector over a buffered window
//! - `mask` - Small/large mask derivation from the average size

mod fastcdc;
mod gear;
pub(crate) mod mask;

pub use fastcdc::FastCdc;
pub use gear::GEAR;

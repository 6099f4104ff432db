//! gearcut
//!
//! Streaming Content-Defined Chunking (CDC) for Rust.
//!
//! `gearcut` splits a byte stream into variable-length chunks whose
//! boundaries depend only on local content, so two streams sharing a long
//! run of bytes share most of their chunks. It is designed as a small,
//! composable primitive for:
//!
//! - deduplication
//! - backup systems
//! - content-addressable storage
//!
//! The crate intentionally:
//! - does NOT hash or store chunks
//! - does NOT manage files or paths
//! - does NOT manage concurrency
//!
//! It only does one thing: **Pull bytes → yield chunk end offsets**
//!
//! # Example
//!
//! ```no_run
//! use std::fs::File;
//! use gearcut::{ChunkConfig, ChunkError, Chunker};
//!
//! fn main() -> Result<(), ChunkError> {
//!     let file = File::open("data.bin")?;
//!     let mut chunker = Chunker::with_config(file, ChunkConfig::default());
//!
//!     let mut start = 0;
//!     while let Some(end) = chunker.next_boundary()? {
//!         println!("chunk {}..{} ({} bytes)", start, end, end - start);
//!         start = end;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Offsets depend only on the bytes and the [`ChunkConfig`], never on how
//! the [`Source`] delivers them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunker;
mod config;
mod error;
mod source;

mod buffer; // internal read window
mod cdc;

//
// Public surface (intentionally tiny)
//

pub use cdc::{FastCdc, GEAR};
pub use chunker::{ChunkIter, Chunker, cut_points};
pub use config::{
    ChunkConfig, ChunkSizes, DEFAULT_AVG_CHUNK_SIZE, DEFAULT_MAX_CHUNK_SIZE,
    DEFAULT_MIN_CHUNK_SIZE,
};
pub use error::ChunkError;
pub use source::{Filled, Source};

//! Chunking engine for processing byte streams.
//!
//! - [`Chunker`] - Stateful CDC engine with a `next_boundary()` API
//! - [`ChunkIter`] - Iterator over chunk end offsets
//! - [`cut_points`] - One-shot helper for in-memory data

mod engine;
mod iter;

pub use engine::Chunker;
pub use iter::{ChunkIter, cut_points};

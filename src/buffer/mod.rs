//! Internal buffer management.
//!
//! The chunker reads the source into one owned window of
//! `2 * max_size` bytes, so a compaction and refill is needed at most
//! once per `max_size` bytes consumed. It is an implementation detail and
//! not part of the public API.

mod window;

pub(crate) use window::Window;

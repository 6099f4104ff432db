//! File chunking example.
//!
//! Run with:
//!     cargo run --example sync_file -- /path/to/file

use std::env;
use std::fs::File;

use gearcut::{ChunkConfig, Chunker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Chunking file: {}\n", path);

    let file = File::open(&path)?;
    let metadata = file.metadata()?;
    println!("File size: {} bytes\n", metadata.len());

    let chunker = Chunker::with_config(file, ChunkConfig::default());

    let mut total_chunks = 0u64;
    let mut start = 0u64;
    for end in chunker {
        let end = end?;
        total_chunks += 1;
        println!(
            "Chunk {}: offset={:>10}, len={:>8}",
            total_chunks,
            start,
            end - start
        );
        start = end;
    }

    println!("\nTotal: {} chunks, {} bytes", total_chunks, start);
    if total_chunks > 0 {
        println!("Average chunk size: {} bytes", start / total_chunks);
    }

    Ok(())
}

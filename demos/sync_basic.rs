//! Basic chunking example over in-memory data.
//!
//! Run with:
//!     cargo run --example sync_basic

use std::io::Cursor;

use gearcut::{ChunkConfig, Chunker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1 MB of pseudo-random data
    let mut seed = 42u32;
    let data: Vec<u8> = (0..1024 * 1024)
        .map(|_| {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345) % (1 << 31);
            (seed >> 16) as u8
        })
        .collect();

    let config = ChunkConfig::new(8 * 1024, 32 * 1024, 128 * 1024)?;
    let mut chunker = Chunker::with_config(Cursor::new(&data), config);

    println!("Chunking {} bytes of data...\n", data.len());

    let mut total_chunks = 0;
    let mut start = 0u64;
    while let Some(end) = chunker.next_boundary()? {
        total_chunks += 1;
        println!(
            "Chunk {}: offset={}, len={}",
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

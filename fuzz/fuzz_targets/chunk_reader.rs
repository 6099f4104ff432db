#![no_main]

use std::io::{self, Cursor, Read};

use libfuzzer_sys::fuzz_target;
use gearcut::{ChunkConfig, Chunker, cut_points};

/// Reader that hands out data in sizes taken from the fuzz input.
struct Jagged<'a> {
    data: &'a [u8],
    steps: &'a [u8],
    turn: usize,
}

impl Read for Jagged<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let step = self
            .steps
            .get(self.turn % self.steps.len().max(1))
            .map_or(buf.len(), |&s| s as usize + 1);
        self.turn += 1;
        let n = buf.len().min(step).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (data, steps) = input;

    let configs = [
        ChunkConfig::new(4, 16, 64).unwrap(),
        ChunkConfig::new(64, 256, 1024).unwrap(),
        ChunkConfig::new(100, 3000, 5000).unwrap(),
        ChunkConfig::default(),
    ];

    for config in configs {
        let whole: Vec<u64> = Chunker::with_config(Cursor::new(&data), config)
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();

        // Verify: offsets partition the input within the size bounds
        let mut start = 0u64;
        for (i, &end) in whole.iter().enumerate() {
            assert!(end > start);
            let len = (end - start) as usize;
            assert!(len <= config.max_size());
            if i + 1 < whole.len() {
                assert!(len >= config.min_size());
            }
            start = end;
        }
        assert_eq!(start, data.len() as u64);

        // Verify: read sizes do not move boundaries
        let jagged = Jagged {
            data: &data,
            steps: &steps,
            turn: 0,
        };
        let streamed: Vec<u64> = Chunker::with_config(jagged, config)
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(streamed, whole);

        // Verify: in-memory helper agrees
        assert_eq!(cut_points(data.clone(), &config), whole);
    }
});

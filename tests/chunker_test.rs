// Integration tests for the Chunker pull API
// Tests cover: reference offsets, partition invariants, read-size independence, errors

use std::io::{self, Cursor, Read};

use bytes::Bytes;
use gearcut::{ChunkConfig, ChunkError, Chunker, Filled, Source, cut_points};
use proptest::prelude::*;

const KIB: usize = 1024;
const MIB: usize = 1024 * KIB;

/// Linear congruential byte stream (a = 1103515245, c = 12345, m = 2^31).
fn fill_lcg(data: &mut [u8], mut seed: u32) {
    const M: u32 = 1 << 31;
    for byte in data.iter_mut() {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345) % M;
        *byte = (seed >> 16) as u8;
    }
}

fn lcg_data(len: usize, seed: u32) -> Vec<u8> {
    let mut data = vec![0u8; len];
    fill_lcg(&mut data, seed);
    data
}

fn collect<S: Source>(chunker: Chunker<S>) -> Vec<u64> {
    chunker
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .expect("in-memory source cannot fail")
}

/// Reader that returns at most `step` bytes per call.
struct Trickle<R> {
    inner: R,
    step: usize,
}

impl<R: Read> Read for Trickle<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.step);
        self.inner.read(&mut buf[..n])
    }
}

/// Source that cycles through a list of fill sizes and signals the end
/// together with its last bytes.
struct Jagged {
    data: Vec<u8>,
    at: usize,
    steps: Vec<usize>,
    turn: usize,
}

impl Source for Jagged {
    fn fill(&mut self, dst: &mut [u8]) -> io::Result<Filled> {
        let step = self.steps[self.turn % self.steps.len()].max(1);
        self.turn += 1;
        let n = dst.len().min(step).min(self.data.len() - self.at);
        dst[..n].copy_from_slice(&self.data[self.at..self.at + n]);
        self.at += n;
        Ok(Filled {
            written: n,
            end: self.at == self.data.len(),
        })
    }
}

/// Source that fails once `limit` bytes have been handed out.
struct FailingSource {
    data: Vec<u8>,
    at: usize,
    limit: usize,
}

impl Source for FailingSource {
    fn fill(&mut self, dst: &mut [u8]) -> io::Result<Filled> {
        if self.at >= self.limit {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer went away"));
        }
        let n = dst.len().min(self.limit - self.at);
        dst[..n].copy_from_slice(&self.data[self.at..self.at + n]);
        self.at += n;
        Ok(Filled::more(n))
    }
}

fn assert_partition(offsets: &[u64], len: usize, config: &ChunkConfig) {
    if len == 0 {
        assert!(offsets.is_empty(), "empty input must yield no offsets");
        return;
    }

    assert_eq!(*offsets.last().unwrap(), len as u64, "must end at input length");

    let mut start = 0u64;
    for (i, &end) in offsets.iter().enumerate() {
        assert!(end > start, "offsets must strictly increase at {i}");
        let size = (end - start) as usize;
        assert!(size <= config.max_size(), "chunk {i} exceeds max_size: {size}");
        if i + 1 < offsets.len() {
            assert!(size >= config.min_size(), "chunk {i} below min_size: {size}");
        }
        start = end;
    }
}

// ============================================================================
// Reference Offsets
// ============================================================================

#[test]
fn test_reference_offsets_lcg_seed_42() {
    let data = lcg_data(MIB, 42);
    let chunker = Chunker::with_sizes(Cursor::new(data), 8 * KIB, 32 * KIB, 128 * KIB).unwrap();

    let expected: Vec<u64> = vec![
        36714, 59235, 100431, 133475, 183955, 227175, 262536, 331968, 367735, 418065, 450929,
        504275, 555138, 588843, 645038, 684445, 720786, 745512, 783877, 828354, 871489, 906239,
        945918, 982639, 1007331, 1043460, 1048576,
    ];

    assert_eq!(collect(chunker), expected);
}

#[test]
fn test_reference_offsets_independent_of_read_size() {
    let data = lcg_data(MIB, 42);
    let config = ChunkConfig::new(8 * KIB, 32 * KIB, 128 * KIB).unwrap();

    let whole = collect(Chunker::with_config(Cursor::new(&data), config));
    for step in [1, 7, 4096, 100_000] {
        let trickle = Trickle {
            inner: Cursor::new(&data),
            step,
        };
        assert_eq!(
            collect(Chunker::with_config(trickle, config)),
            whole,
            "read size {step}"
        );
    }
    assert_eq!(cut_points(data, &config), whole);
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_empty_input() {
    let mut chunker = Chunker::new(Cursor::new(Vec::<u8>::new()));
    assert_eq!(chunker.next_boundary().unwrap(), None);
    assert_eq!(chunker.next_boundary().unwrap(), None, "end of data is idempotent");
}

#[test]
fn test_input_below_min_size() {
    let config = ChunkConfig::default();
    let data = lcg_data(config.min_size() - 1, 1);
    assert_eq!(
        collect(Chunker::new(Cursor::new(data))),
        vec![config.min_size() as u64 - 1]
    );
}

#[test]
fn test_input_exactly_min_size() {
    let config = ChunkConfig::default();
    let data = lcg_data(config.min_size(), 1);
    assert_eq!(
        collect(Chunker::new(Cursor::new(data))),
        vec![config.min_size() as u64]
    );
}

#[test]
fn test_uniform_input_respects_bounds() {
    let config = ChunkConfig::new(64, 256, 1024).unwrap();
    for byte in [0x00u8, 0xFF] {
        let data = vec![byte; 10_000];
        let offsets = collect(Chunker::with_config(Cursor::new(&data), config));
        assert_partition(&offsets, data.len(), &config);
    }
}

#[test]
fn test_default_sizes() {
    let chunker = Chunker::new(Cursor::new(Vec::<u8>::new()));
    assert_eq!(chunker.config().min_size(), 2048);
    assert_eq!(chunker.config().avg_size(), 8192);
    assert_eq!(chunker.config().max_size(), 32768);
}

#[test]
fn test_average_chunk_size_near_target() {
    let data = lcg_data(4 * MIB, 99);
    let config = ChunkConfig::default();
    let offsets = collect(Chunker::new(Cursor::new(&data)));

    assert_partition(&offsets, data.len(), &config);
    let avg = data.len() / offsets.len();
    assert!(
        avg > config.min_size() && avg < config.max_size(),
        "average chunk size {avg} out of range"
    );
}

// ============================================================================
// Content Locality
// ============================================================================

#[test]
fn test_shared_suffix_shares_boundaries() {
    let config = ChunkConfig::new(256, 1024, 4096).unwrap();
    let body = lcg_data(200_000, 5);

    let mut shifted = lcg_data(777, 6);
    shifted.extend_from_slice(&body);

    let a = cut_points(Bytes::from(body.clone()), &config);
    let b = cut_points(Bytes::from(shifted), &config);

    let a_ends: std::collections::HashSet<u64> = a.iter().copied().collect();
    let realigned = b
        .iter()
        .filter(|&&end| end >= 777 && a_ends.contains(&(end - 777)))
        .count();
    assert!(
        realigned * 2 > a.len(),
        "only {realigned} of {} boundaries survived a prefix insertion",
        a.len()
    );
}

// ============================================================================
// Error Conditions
// ============================================================================

#[test]
fn test_config_validation() {
    assert!(ChunkConfig::new(16, 8, 64).is_err(), "min > avg should be invalid");
    assert!(ChunkConfig::new(4, 32, 16).is_err(), "avg > max should be invalid");
    assert!(ChunkConfig::new(8, 8, 64).is_err(), "min == avg should be invalid");
    assert!(ChunkConfig::new(0, 16, 64).is_err(), "zero min_size should be invalid");
    assert!(ChunkConfig::new(1, 8, 64).is_err(), "avg_size 8 leaves masks undefined");
}

#[test]
fn test_invalid_sizes_do_not_read_source() {
    struct Untouchable;
    impl Source for Untouchable {
        fn fill(&mut self, _: &mut [u8]) -> io::Result<Filled> {
            panic!("source must not be read during construction");
        }
    }

    let result = Chunker::with_sizes(Untouchable, 4096, 1024, 65536);
    assert!(matches!(result, Err(ChunkError::InvalidConfig { .. })));
}

#[test]
fn test_source_error_mid_stream() {
    let config = ChunkConfig::new(64, 256, 1024).unwrap();
    let source = FailingSource {
        data: lcg_data(10_000, 3),
        at: 0,
        limit: 5_000,
    };

    let mut chunker = Chunker::with_config(source, config);
    let mut produced = Vec::new();
    let err = loop {
        match chunker.next_boundary() {
            Ok(Some(offset)) => produced.push(offset),
            Ok(None) => panic!("failing source must not reach end of data"),
            Err(e) => break e,
        }
    };

    match err {
        ChunkError::SourceRead(e) => assert_eq!(e.kind(), io::ErrorKind::ConnectionReset),
        other => panic!("unexpected error: {other}"),
    }
    assert!(produced.iter().all(|&o| o <= 5_000));
    assert!(matches!(chunker.next_boundary(), Err(ChunkError::Poisoned)));
}

// ============================================================================
// Properties
// ============================================================================

fn config_strategy() -> impl Strategy<Value = ChunkConfig> {
    (4u32..=8, 1usize..=3, 1usize..=3).prop_map(|(avg_bits, down, up)| {
        let avg = 1usize << (avg_bits + 1);
        ChunkConfig::new(avg >> down, avg, avg << up).unwrap()
    })
}

proptest! {
    #[test]
    fn prop_offsets_partition_input(
        data in prop::collection::vec(any::<u8>(), 0..20_000),
        config in config_strategy(),
    ) {
        let offsets = collect(Chunker::with_config(Cursor::new(&data), config));
        assert_partition(&offsets, data.len(), &config);
    }

    #[test]
    fn prop_fill_sizes_do_not_change_offsets(
        data in prop::collection::vec(any::<u8>(), 0..20_000),
        steps in prop::collection::vec(1usize..600, 1..8),
        config in config_strategy(),
    ) {
        let whole = collect(Chunker::with_config(Cursor::new(&data), config));
        let jagged = Jagged { data: data.clone(), at: 0, steps, turn: 0 };
        prop_assert_eq!(collect(Chunker::with_config(jagged, config)), whole);
    }

    #[test]
    fn prop_cut_points_match_streaming(
        data in prop::collection::vec(any::<u8>(), 0..20_000),
        config in config_strategy(),
    ) {
        let streamed = collect(Chunker::with_config(Cursor::new(&data), config));
        prop_assert_eq!(cut_points(data, &config), streamed);
    }
}

//! Public API behaviour tests.
//!
//! Coverage:
//! - `seed::{Seed, default_seed, seed_from}`
//! - `StreamGenerator` / `FloatGenerator` construction and iteration
//! - `stream()` / `floats()` entry points
//! - `RootstreamError`

use std::sync::{Arc, Mutex};
use std::thread;

use rootstream::{
    FloatGenerator, RootstreamError, Seed, StreamGenerator, CHUNK_SIZE, SEED_HEX_LEN, SEED_LEN,
};

// ═══════════════════════════════════════════════════════════════════════
// Seed validation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn seed_63_chars_rejected() {
    let seed = "a".repeat(63);
    assert_eq!(
        StreamGenerator::new(&seed).unwrap_err(),
        RootstreamError::InvalidSeedLength { len: 63 }
    );
    assert_eq!(
        FloatGenerator::new(&seed).unwrap_err(),
        RootstreamError::InvalidSeedLength { len: 63 }
    );
}

#[test]
fn seed_non_hex_rejected() {
    let mut seed = "0".repeat(SEED_HEX_LEN);
    seed.replace_range(63..64, "G");
    let err = StreamGenerator::new(&seed).unwrap_err();
    assert!(err.is_invalid_seed());
    assert_eq!(
        err,
        RootstreamError::InvalidSeedHex {
            position: 63,
            found: 'G'
        }
    );
}

#[test]
fn seed_with_whitespace_rejected() {
    let seed = format!(" {}", &rootstream::default_seed()[1..]);
    assert!(StreamGenerator::new(&seed).is_err());
    let seed = format!("{} ", rootstream::default_seed());
    assert!(StreamGenerator::new(&seed).is_err());
}

#[test]
fn any_valid_hex_seed_accepted() {
    for digit in "0123456789abcdefABCDEF".chars() {
        let seed: String = std::iter::repeat(digit).take(SEED_HEX_LEN).collect();
        assert!(StreamGenerator::new(&seed).is_ok(), "seed {} rejected", seed);
    }
}

#[test]
fn invalid_seed_propagates_through_entry_points() {
    assert!(rootstream::stream(Some("xyz")).unwrap_err().is_invalid_seed());
    assert!(rootstream::floats(Some("xyz")).unwrap_err().is_invalid_seed());
}

// ═══════════════════════════════════════════════════════════════════════
// Seed type
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn seed_parse_display_roundtrip() {
    let text = rootstream::seed_from(-273.15);
    let seed: Seed = text.parse().unwrap();
    assert_eq!(seed.to_string(), text);
    assert_eq!(seed.as_bytes().len(), SEED_LEN);
}

#[test]
fn seed_from_bytes_drives_same_stream_as_hex() {
    let bytes: [u8; SEED_LEN] = std::array::from_fn(|i| i as u8);
    let seed = Seed::from(bytes);
    let mut a = StreamGenerator::from_seed(&seed);
    let mut b = StreamGenerator::new(&seed.to_hex()).unwrap();
    for _ in 0..5 {
        assert_eq!(a.next_chunk(), b.next_chunk());
    }
}

#[test]
fn default_impls_use_default_seed() {
    let mut a = StreamGenerator::default();
    let mut b = StreamGenerator::new(rootstream::default_seed()).unwrap();
    assert_eq!(a.next_chunk(), b.next_chunk());

    let mut f = FloatGenerator::default();
    let mut g = FloatGenerator::new(rootstream::default_seed()).unwrap();
    assert_eq!(f.next_float(), g.next_float());
}

// ═══════════════════════════════════════════════════════════════════════
// Generators
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn determinism_many_chunks() {
    let seed = rootstream::seed_from(42.0);
    let mut a = StreamGenerator::new(&seed).unwrap();
    let mut b = StreamGenerator::new(&seed).unwrap();
    for i in 0..500 {
        assert_eq!(a.next_chunk(), b.next_chunk(), "diverged at chunk {}", i);
    }
}

#[test]
fn different_seeds_different_streams() {
    let mut a = StreamGenerator::new(&rootstream::seed_from(1.0)).unwrap();
    let mut b = StreamGenerator::new(&rootstream::seed_from(2.0)).unwrap();
    let same = (0..5).all(|_| a.next_chunk() == b.next_chunk());
    assert!(!same, "different seeds should produce different output");
}

#[test]
fn chunk_shape() {
    let gen = StreamGenerator::default();
    for chunk in gen.take(50) {
        assert_eq!(chunk.len(), CHUNK_SIZE);
        assert_eq!(CHUNK_SIZE, 16);
    }
}

#[test]
fn counter_advances_at_least_eight_digests_per_chunk() {
    // 256 accepted bits need at least 8 digests of 32 bytes each
    let mut gen = StreamGenerator::default();
    let mut previous = gen.counter();
    for _ in 0..20 {
        gen.next_chunk();
        assert!(gen.counter() - previous >= 8);
        previous = gen.counter();
    }
}

#[test]
fn float_range() {
    let gen = FloatGenerator::new(&rootstream::seed_from(0.5)).unwrap();
    for val in gen.take(10_000) {
        assert!((0.0..1.0).contains(&val), "float out of range: {}", val);
    }
}

#[test]
fn float_buffer_never_exceeds_one_chunk() {
    let mut gen = FloatGenerator::default();
    for _ in 0..100 {
        gen.next_float();
        assert!(gen.buffered() < CHUNK_SIZE);
        assert_eq!(gen.buffered() % 8, 0);
    }
}

#[test]
fn independent_generators_on_threads() {
    let seed = rootstream::seed_from(7.0);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let seed = seed.clone();
            thread::spawn(move || {
                let gen = StreamGenerator::new(&seed).unwrap();
                gen.take(20).collect::<Vec<_>>()
            })
        })
        .collect();
    let results: Vec<Vec<_>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for r in &results[1..] {
        assert_eq!(r, &results[0]);
    }
}

#[test]
fn shared_generator_behind_mutex_serializes_calls() {
    let shared = Arc::new(Mutex::new(StreamGenerator::default()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                (0..5)
                    .map(|_| shared.lock().unwrap().next_chunk())
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let mut got: Vec<_> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();

    let mut expected: Vec<_> = StreamGenerator::default().take(20).collect();
    got.sort();
    expected.sort();
    assert_eq!(got, expected);
}

// ═══════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn error_implements_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(RootstreamError::InvalidSeedLength { len: 1 });
    assert_eq!(
        err.to_string(),
        "Seed must be 64 hex characters (32 bytes), got 1"
    );
}

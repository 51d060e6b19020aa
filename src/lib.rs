//! Rootstream: deterministic byte streams from a single shared root seed.
//!
//! Two machines holding the same 32-byte seed produce bit-identical,
//! infinite output streams without exchanging anything else. The generator
//! is a reproducibility primitive for simulations, procedural generation
//! and coordinated sampling. It is **not** a cryptographic RNG.
//!
//! # Architecture
//!
//! ```text
//! f64 value / hex text ──► Seed (32 bytes)
//!                           │ SHA-256
//!                           ▼
//! StreamGenerator   state ← SHA-256(state ‖ counter_be), sift bits,
//!                   fold 256 → 128 bits ──► 16-byte chunks
//!                           │
//!                           ▼
//! FloatGenerator    8-byte big-endian windows / 2^64 ──► f64 in [0, 1)
//! ```
//!
//! # Examples
//!
//! Two independent generators agree:
//!
//! ```
//! use rootstream::StreamGenerator;
//!
//! let seed = rootstream::seed_from(std::f64::consts::PI);
//! let mut alice = StreamGenerator::new(&seed).unwrap();
//! let mut bob = StreamGenerator::new(&seed).unwrap();
//!
//! for _ in 0..8 {
//!     assert_eq!(alice.next_chunk(), bob.next_chunk());
//! }
//! ```
//!
//! Floats from the default seed:
//!
//! ```
//! let first: Vec<f64> = rootstream::floats(None).unwrap().take(3).collect();
//! assert_eq!(first[0], 0.06979354220079581);
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod random;
pub mod seed;

pub(crate) mod utils;

pub use error::RootstreamError;
pub use random::floats::FloatGenerator;
pub use random::stream::{Chunk, StreamGenerator, CHUNK_SIZE};
pub use random::vectors::{verify_vectors, VectorCheck, VectorReport, REFERENCE_VECTORS};
pub use seed::{default_seed, seed_from, Seed, ETA, SEED_HEX_LEN, SEED_LEN};

/// Opens a chunk stream for `seed`, or for [`default_seed`] when `None`.
///
/// # Errors
/// Returns an invalid-seed error if `seed` is not 64 hex characters.
pub fn stream(seed: Option<&str>) -> Result<StreamGenerator, RootstreamError> {
    StreamGenerator::new(seed.unwrap_or(default_seed()))
}

/// Opens a float stream for `seed`, or for [`default_seed`] when `None`.
///
/// # Errors
/// Returns an invalid-seed error if `seed` is not 64 hex characters.
pub fn floats(seed: Option<&str>) -> Result<FloatGenerator, RootstreamError> {
    FloatGenerator::new(seed.unwrap_or(default_seed()))
}

/// Lowercase hex rendering of a chunk.
pub fn to_hex(bytes: &[u8]) -> String {
    utils::converter::bytes_to_hex(bytes)
}

//! FloatGenerator: uniform `f64` values in `[0, 1)` from the byte stream.
//!
//! Bytes from a [`StreamGenerator`] are consumed eight at a time as a
//! big-endian `u64` and divided by 2^64. The 8-byte windows tile the byte
//! stream contiguously, so chunk boundaries never affect the output.

use crate::error::RootstreamError;
use crate::random::stream::StreamGenerator;
use crate::seed::Seed;
use crate::utils::converter;

/// Bytes consumed per float.
const FLOAT_BYTES: usize = 8;

/// Deterministic infinite stream of floats in `[0, 1)`.
///
/// # Examples
///
/// ```
/// use rootstream::FloatGenerator;
///
/// let mut gen = FloatGenerator::default();
/// let x = gen.next_float();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FloatGenerator {
    stream: StreamGenerator,
    buffer: Vec<u8>,
}

impl FloatGenerator {
    /// Creates a float generator from a 64-character hex seed.
    ///
    /// # Errors
    /// Fails exactly when [`StreamGenerator::new`] fails.
    pub fn new(seed: &str) -> Result<Self, RootstreamError> {
        Ok(Self::from_stream(StreamGenerator::new(seed)?))
    }

    /// Creates a float generator from an already validated seed.
    pub fn from_seed(seed: &Seed) -> Self {
        Self::from_stream(StreamGenerator::from_seed(seed))
    }

    fn from_stream(stream: StreamGenerator) -> Self {
        FloatGenerator {
            stream,
            buffer: Vec::with_capacity(FLOAT_BYTES * 3),
        }
    }

    /// Bytes fetched from the stream but not yet consumed.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Produces the next float in `[0, 1)`.
    ///
    /// Pulls whole chunks from the stream until at least 8 bytes are
    /// buffered, then consumes the first 8.
    pub fn next_float(&mut self) -> f64 {
        while self.buffer.len() < FLOAT_BYTES {
            let chunk = self.stream.next_chunk();
            self.buffer.extend_from_slice(&chunk);
        }
        let mut window = [0u8; FLOAT_BYTES];
        window.copy_from_slice(&self.buffer[..FLOAT_BYTES]);
        self.buffer.drain(..FLOAT_BYTES);
        converter::unit_float(u64::from_be_bytes(window))
    }
}

impl Iterator for FloatGenerator {
    type Item = f64;

    /// Always `Some`: the stream never ends.
    fn next(&mut self) -> Option<f64> {
        Some(self.next_float())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for FloatGenerator {}

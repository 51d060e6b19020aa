//! StreamGenerator: the hash-chain driven bit-sifting extractor.
//!
//! The generator keeps a 32-byte SHA-256 state and a 32-bit counter. Each
//! digest step hashes `state || counter_be`, replaces the state with the
//! result and increments the counter (wrapping). Digest bytes are sifted
//! into a 256-bit buffer which is XOR-folded into one 16-byte chunk.
//!
//! The number of digest steps per chunk is not fixed: roughly half of all
//! digest bytes pass the sifting rule, so a chunk takes about 16 digests on
//! average, with a geometrically distributed tail.

use sha2::{Digest, Sha256};

use crate::error::RootstreamError;
use crate::seed::Seed;
use crate::utils::bits::{BitBuffer, CHUNK_LEN};

/// Size in bytes of one output chunk.
pub const CHUNK_SIZE: usize = CHUNK_LEN;

/// One 16-byte unit of the byte stream.
pub type Chunk = [u8; CHUNK_SIZE];

/// Deterministic infinite stream of 16-byte chunks.
///
/// Two generators built from the same seed produce identical chunk
/// sequences on any machine. Not suitable for cryptography.
///
/// A generator is plain owned state: share it between threads only behind
/// external synchronization (e.g. a `Mutex`), since every chunk depends on
/// all previous calls.
///
/// # Examples
///
/// ```
/// use rootstream::StreamGenerator;
///
/// let mut gen = StreamGenerator::new(rootstream::default_seed()).unwrap();
/// let chunk = gen.next_chunk();
/// assert_eq!(chunk[..4], [0x11, 0xdd, 0xfd, 0x55]);
/// ```
#[derive(Clone, Debug)]
pub struct StreamGenerator {
    state: [u8; 32],
    counter: u32,
}

impl Default for StreamGenerator {
    /// Generator seeded with the default seed.
    fn default() -> Self {
        Self::from_seed(&Seed::default())
    }
}

impl StreamGenerator {
    /// Creates a generator from a 64-character hex seed.
    ///
    /// # Errors
    /// Returns [`RootstreamError::InvalidSeedLength`] or
    /// [`RootstreamError::InvalidSeedHex`] if `seed` is malformed. No output
    /// is ever produced from a malformed seed.
    pub fn new(seed: &str) -> Result<Self, RootstreamError> {
        let seed = Seed::parse(seed)?;
        Ok(Self::from_seed(&seed))
    }

    /// Creates a generator from an already validated seed.
    ///
    /// The initial state is `SHA-256(seed)` and the counter starts at 0.
    pub fn from_seed(seed: &Seed) -> Self {
        StreamGenerator {
            state: Sha256::digest(seed.as_bytes()).into(),
            counter: 0,
        }
    }

    /// Number of digest steps taken so far, modulo 2^32.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Advances the hash chain by one step and returns the new digest.
    fn advance(&mut self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.state);
        hasher.update(self.counter.to_be_bytes());
        let entropy: [u8; 32] = hasher.finalize().into();
        self.state = entropy;
        self.counter = self.counter.wrapping_add(1);
        entropy
    }

    /// Produces the next 16-byte chunk.
    ///
    /// Keeps hashing until 256 bits have been accepted by the sifting rule,
    /// then folds them. Bytes remaining in the last digest are dropped.
    pub fn next_chunk(&mut self) -> Chunk {
        let mut bits = BitBuffer::new();
        while !bits.is_full() {
            let entropy = self.advance();
            bits.absorb(&entropy);
        }
        bits.fold()
    }
}

impl Iterator for StreamGenerator {
    type Item = Chunk;

    /// Always `Some`: the stream never ends.
    fn next(&mut self) -> Option<Chunk> {
        Some(self.next_chunk())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for StreamGenerator {}

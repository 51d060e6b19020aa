//! Seed derivation and the 32-byte [`Seed`] value type.
//!
//! A seed travels between machines as 64 lowercase hex characters. Any
//! `f64` can be turned into a seed with [`seed_from`]: its little-endian
//! IEEE-754 bytes are hex-encoded and repeated until 32 bytes are filled.
//! The crate-wide default seed is derived this way from [`ETA`] (1/√2).

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::error::RootstreamError;
use crate::utils::converter;

/// Seed length in bytes.
pub const SEED_LEN: usize = 32;

/// Seed length in hex characters.
pub const SEED_HEX_LEN: usize = SEED_LEN * 2;

/// The root constant 1/√2 (`0.7071067811865476`) the default seed is derived from.
pub const ETA: f64 = std::f64::consts::FRAC_1_SQRT_2;

lazy_static! {
    static ref DEFAULT_SEED: String = seed_from(ETA);
}

/// Returns the default seed, derived from [`ETA`].
///
/// Always `"cd3b7f669ea0e63f"` repeated four times.
pub fn default_seed() -> &'static str {
    DEFAULT_SEED.as_str()
}

/// Derives a 64-character hex seed from any `f64`.
///
/// Total over all inputs, including NaN, infinities and subnormals: every
/// double has an 8-byte representation.
///
/// # Examples
///
/// ```
/// use rootstream::seed_from;
///
/// let seed = seed_from(std::f64::consts::PI);
/// assert_eq!(seed, "182d4454fb210940".repeat(4));
/// ```
pub fn seed_from(value: f64) -> String {
    let packed = converter::bytes_to_hex(&value.to_le_bytes());
    let mut seed = packed.repeat(SEED_HEX_LEN.div_ceil(packed.len()));
    seed.truncate(SEED_HEX_LEN);
    seed
}

/// A validated 32-byte seed.
///
/// Parsed from hex with [`Seed::parse`] (or [`str::parse`]) and rendered back
/// as lowercase hex through [`Display`](fmt::Display).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Parses a seed from 64 hex characters.
    ///
    /// # Errors
    /// - [`RootstreamError::InvalidSeedLength`] if `hex` is not 64 characters.
    /// - [`RootstreamError::InvalidSeedHex`] if `hex` contains a non-hex
    ///   character.
    pub fn parse(hex: &str) -> Result<Self, RootstreamError> {
        converter::hex_to_bytes::<SEED_LEN>(hex).map(Seed)
    }

    /// Seed derived from a float, see [`seed_from`].
    pub fn from_value(value: f64) -> Self {
        let bytes = value.to_le_bytes();
        let mut seed = [0u8; SEED_LEN];
        for (i, byte) in seed.iter_mut().enumerate() {
            *byte = bytes[i % bytes.len()];
        }
        Seed(seed)
    }

    /// Raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Lowercase hex rendering (64 characters).
    pub fn to_hex(&self) -> String {
        converter::bytes_to_hex(&self.0)
    }
}

impl Default for Seed {
    /// The seed derived from [`ETA`].
    fn default() -> Self {
        Seed::from_value(ETA)
    }
}

impl From<[u8; SEED_LEN]> for Seed {
    fn from(bytes: [u8; SEED_LEN]) -> Self {
        Seed(bytes)
    }
}

impl FromStr for Seed {
    type Err = RootstreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Seed::parse(s)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({})", self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Seed {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Seed {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Seed::parse(&text).map_err(serde::de::Error::custom)
    }
}

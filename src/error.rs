//! Error types for the rootstream library.

use thiserror::Error;

/// Errors produced by the rootstream library.
///
/// Generators only fail at construction time. Once a [`StreamGenerator`]
/// or [`FloatGenerator`] exists, every call to produce output succeeds.
///
/// [`StreamGenerator`]: crate::StreamGenerator
/// [`FloatGenerator`]: crate::FloatGenerator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RootstreamError {
    /// Seed text is not exactly 64 hex characters (32 bytes).
    #[error("Seed must be 64 hex characters (32 bytes), got {len}")]
    InvalidSeedLength {
        /// Length of the rejected seed text, in characters.
        len: usize,
    },
    /// Seed text contains a character that is not a hex digit.
    #[error("Seed contains non-hex character {found:?} at position {position}")]
    InvalidSeedHex {
        /// Zero-based character index of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },
    /// Malformed command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl RootstreamError {
    /// Returns `true` for the seed validation failures raised by generator
    /// constructors.
    pub fn is_invalid_seed(&self) -> bool {
        matches!(
            self,
            RootstreamError::InvalidSeedLength { .. } | RootstreamError::InvalidSeedHex { .. }
        )
    }
}

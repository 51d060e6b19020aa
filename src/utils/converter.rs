//! Hex and numeric conversion utilities.
//!
//! Seeds travel as lowercase hexadecimal text (two characters per byte,
//! most significant nibble first). Floats are built from big-endian 64-bit
//! windows of the byte stream.

use crate::error::RootstreamError;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// 2^64 as an `f64` (exactly representable).
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Largest `f64` strictly below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Encodes bytes as lowercase hexadecimal.
pub(crate) fn bytes_to_hex(input: &[u8]) -> String {
    let mut output = String::with_capacity(input.len() * 2);
    for &byte in input {
        output.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        output.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
    }
    output
}

fn nibble(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}

/// Decodes exactly `N` bytes from hexadecimal text.
///
/// Upper- and lowercase digits are both accepted.
///
/// # Errors
/// - [`RootstreamError::InvalidSeedLength`] if `input` is not `2 * N`
///   characters long.
/// - [`RootstreamError::InvalidSeedHex`] on the first non-hex character.
pub(crate) fn hex_to_bytes<const N: usize>(input: &str) -> Result<[u8; N], RootstreamError> {
    let len = input.chars().count();
    if len != N * 2 {
        return Err(RootstreamError::InvalidSeedLength { len });
    }
    let mut output = [0u8; N];
    let mut chars = input.chars().enumerate();
    for byte in output.iter_mut() {
        for _ in 0..2 {
            // Length was checked above, so the iterator cannot run dry here.
            let Some((position, c)) = chars.next() else {
                return Err(RootstreamError::InvalidSeedLength { len });
            };
            let value =
                nibble(c).ok_or(RootstreamError::InvalidSeedHex { position, found: c })?;
            *byte = (*byte << 4) | value;
        }
    }
    Ok(output)
}

/// Maps a 64-bit value onto `[0, 1)` as `value / 2^64`.
///
/// Values within 2^10 of `u64::MAX` round to exactly 1.0 under IEEE-754
/// division; those are clamped to the largest double below 1.0.
pub(crate) fn unit_float(value: u64) -> f64 {
    let f = value as f64 / TWO_POW_64;
    if f < 1.0 {
        f
    } else {
        BELOW_ONE
    }
}

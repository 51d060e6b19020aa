//! Bit sifting and folding primitives for the stream extractor.
//!
//! Each digest byte is tested with a sifting rule: when bits 1 and 2 of the
//! byte agree, bit 0 is accepted. Accepted bits are gathered into a
//! [`BitBuffer`] of [`FOLD_INPUT_BITS`] bits, which is then XOR-folded in
//! half and packed MSB-first into a 16-byte chunk.

/// Number of accepted bits gathered before a fold.
pub(crate) const FOLD_INPUT_BITS: usize = 256;

/// Number of bits in a folded chunk.
pub(crate) const FOLD_OUTPUT_BITS: usize = FOLD_INPUT_BITS / 2;

/// Number of bytes in a folded chunk.
pub(crate) const CHUNK_LEN: usize = FOLD_OUTPUT_BITS / 8;

/// Applies the sifting rule to one digest byte.
///
/// # Returns
/// `Some(bit0)` when bit 1 and bit 2 of `byte` are equal, `None` otherwise.
#[inline]
pub(crate) fn sift(byte: u8) -> Option<u8> {
    let bit1 = (byte >> 1) & 1;
    let bit2 = (byte >> 2) & 1;
    if bit1 == bit2 {
        Some(byte & 1)
    } else {
        None
    }
}

/// Fixed-capacity buffer of accepted bits (one `u8` per bit, value 0 or 1).
pub(crate) struct BitBuffer {
    bits: [u8; FOLD_INPUT_BITS],
    len: usize,
}

impl BitBuffer {
    pub(crate) fn new() -> Self {
        BitBuffer {
            bits: [0u8; FOLD_INPUT_BITS],
            len: 0,
        }
    }

    pub(crate) fn is_full(&self) -> bool {
        self.len >= FOLD_INPUT_BITS
    }

    /// Sifts the bytes of `digest` in order, accepting bits until the buffer
    /// is full.
    ///
    /// Bytes left over once the buffer fills are discarded; they are never
    /// carried into the next chunk.
    ///
    /// # Returns
    /// The number of bytes of `digest` that were examined.
    pub(crate) fn absorb(&mut self, digest: &[u8]) -> usize {
        let mut examined = 0;
        for &byte in digest {
            if self.is_full() {
                break;
            }
            examined += 1;
            if let Some(bit) = sift(byte) {
                self.bits[self.len] = bit;
                self.len += 1;
            }
        }
        examined
    }

    /// XOR-folds the two 128-bit halves and packs the result MSB-first.
    ///
    /// Output bit `i` is `bits[i] ^ bits[i + 128]`, stored in byte `i / 8`
    /// at bit position `7 - (i % 8)`.
    ///
    /// Must only be called on a full buffer.
    pub(crate) fn fold(&self) -> [u8; CHUNK_LEN] {
        debug_assert!(self.is_full(), "fold requires {} bits", FOLD_INPUT_BITS);
        let mut out = [0u8; CHUNK_LEN];
        for i in 0..FOLD_OUTPUT_BITS {
            let bit = self.bits[i] ^ self.bits[i + FOLD_OUTPUT_BITS];
            out[i / 8] |= bit << (7 - (i % 8));
        }
        out
    }
}

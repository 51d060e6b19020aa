//! Bit-level and conversion helpers shared by the generators.

pub(crate) mod bits;
pub(crate) mod converter;

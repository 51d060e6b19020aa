//! Stream generation subsystem for rootstream.
//!
//! Provides the SHA-256 hash-chain extractor that drives every output and
//! the float layer built on top of it.

pub mod floats;
pub mod stream;
pub mod vectors;

//! Published reference vectors for the default seed.
//!
//! Any compliant implementation, in any language, must reproduce these five
//! chunks from [`default_seed`](crate::default_seed).

use crate::random::stream::StreamGenerator;
use crate::seed::Seed;
use crate::utils::converter;

/// First five chunks of the default-seed stream, as lowercase hex.
pub const REFERENCE_VECTORS: [&str; 5] = [
    "11ddfd55397330138a570f9f9c024996",
    "e17f659eabc361f9c6b20b68719bfa2d",
    "2286a6cba55b56a0ae5bffe3ab8618a6",
    "05e5ca4e66a018bc8cd87b417d49cfa4",
    "c8b25209a994b02cd0510c1f259f7448",
];

/// Result of checking one reference vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorCheck {
    pub index: usize,
    pub expected: &'static str,
    pub actual: String,
}

impl VectorCheck {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Outcome of [`verify_vectors`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorReport {
    pub checks: Vec<VectorCheck>,
}

impl VectorReport {
    /// `true` when every vector matched.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(VectorCheck::passed)
    }

    /// The checks that did not match.
    pub fn failures(&self) -> impl Iterator<Item = &VectorCheck> {
        self.checks.iter().filter(|c| !c.passed())
    }
}

/// Runs a fresh default-seed generator against [`REFERENCE_VECTORS`].
pub fn verify_vectors() -> VectorReport {
    let mut gen = StreamGenerator::from_seed(&Seed::default());
    let checks = REFERENCE_VECTORS
        .iter()
        .enumerate()
        .map(|(index, &expected)| VectorCheck {
            index,
            expected,
            actual: converter::bytes_to_hex(&gen.next_chunk()),
        })
        .collect();
    VectorReport { checks }
}

//! Uniform index sampling from a secure random source.
//!
//! Each output position consumes one random byte. Two strategies map
//! a byte to an alphabet index:
//!
//! - **Modulo**: `byte % n`. Every byte is used, but indices below
//!   `256 % n` are slightly more likely whenever `n` does not divide 256.
//! - **Rejection**: bytes at or above the largest multiple of `n` that
//!   fits in 256 are discarded and redrawn, so every index is equally
//!   likely.

use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// Number of distinct byte values.
const BYTE_RANGE: usize = 256;

/// Largest alphabet one random byte can index.
pub const MAX_ALPHABET_SIZE: usize = BYTE_RANGE;

/// Strategy for reducing a random byte to an alphabet index.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Sampling {
    /// `byte % n`; carries modulo bias.
    Modulo,
    /// Redraw biased bytes; exactly uniform.
    #[default]
    Rejection,
}

impl Sampling {
    /// Exclusive upper bound on accepted bytes for an alphabet of size `n`.
    ///
    /// `n` must be in `1..=256`.
    fn acceptance_limit(self, n: usize) -> usize {
        match self {
            Sampling::Modulo => BYTE_RANGE,
            Sampling::Rejection => BYTE_RANGE - (BYTE_RANGE % n),
        }
    }
}

/// Draws `count` indices in `[0, n)` from `rng`.
///
/// `n` must be in `1..=MAX_ALPHABET_SIZE`; callers check this.
///
/// Bytes are requested in batches sized to the number of indices still
/// missing. A source failure is returned immediately with no retry.
pub(crate) fn draw_indices<R>(
    n: usize,
    count: usize,
    sampling: Sampling,
    rng: &mut R,
) -> Result<Vec<usize>, rand_core::Error>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let limit = sampling.acceptance_limit(n);
    let mut indices = Vec::with_capacity(count);
    let mut buf = vec![0u8; count];
    let mut rejected: u64 = 0;

    while indices.len() < count {
        let batch = &mut buf[..count - indices.len()];
        rng.try_fill_bytes(batch)?;

        for &byte in batch.iter() {
            let byte = usize::from(byte);
            if byte < limit {
                indices.push(byte % n);
            } else {
                rejected += 1;
            }
        }
    }

    if rejected > 0 {
        tracing::trace!(rejected, alphabet_size = n, "redrew biased bytes");
    }

    Ok(indices)
}

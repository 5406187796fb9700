//! ChaCha-based random source for password generation.
//!
//! A single [`PasswordRng`] is seeded once from the OS entropy source
//! and then passed by `&mut` into every component that samples
//! characters. Nothing in the crate reseeds per call or keeps a
//! global generator.

use rand::Rng;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use thiserror::Error;

/// Errors that can occur when requesting a random value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// `lower` is not below `upper`.
    #[error("empty random range: lower bound {lower} is not below upper bound {upper}")]
    EmptyRange {
        /// Inclusive lower bound.
        lower: usize,
        /// Exclusive upper bound.
        upper: usize,
    },
}

/// Draws an integer uniformly from the half-open range `[lower, upper)`.
///
/// # Errors
///
/// Returns [`RangeError::EmptyRange`] when `lower >= upper`.
pub fn random_int<R: Rng + ?Sized>(
    rng: &mut R,
    lower: usize,
    upper: usize,
) -> Result<usize, RangeError> {
    if lower >= upper {
        return Err(RangeError::EmptyRange { lower, upper });
    }
    Ok(rng.gen_range(lower..upper))
}

/// Process-lifetime random source backed by ChaCha20.
///
/// Seeded exactly once, either from the OS (`from_os_entropy`) or from
/// a fixed value for reproducible runs (`from_seed`).
pub struct PasswordRng {
    /// The underlying ChaCha20 generator.
    inner: ChaCha20Rng,
    /// Number of `RngCore` calls served.
    draws: u64,
}

impl PasswordRng {
    /// Creates a generator seeded from the operating system.
    ///
    /// This is the recommended way to obtain a random source.
    pub fn from_os_entropy() -> Self {
        let mut seed = [0u8; 32];
        rand_core::OsRng.fill_bytes(&mut seed);

        tracing::debug!("password RNG seeded from OS entropy");

        Self {
            inner: ChaCha20Rng::from_seed(seed),
            draws: 0,
        }
    }

    /// Creates a deterministic generator from a 64-bit seed.
    ///
    /// Identical seeds yield identical password sequences.
    pub fn from_seed(seed: u64) -> Self {
        tracing::debug!(seed, "password RNG seeded from fixed value");

        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Returns the number of draws served so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl std::fmt::Debug for PasswordRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordRng")
            .field("draws", &self.draws)
            .finish_non_exhaustive()
    }
}

impl RngCore for PasswordRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.draws += 1;
        self.inner.try_fill_bytes(dest)
    }
}

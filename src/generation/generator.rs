//! Random password generation.
//!
//! Every position is drawn uniformly from the full pool, then the
//! result is strengthened to cover as many classes as its length
//! allows.

use crate::charset::ClassPools;
use crate::rng::{PasswordRng, RangeError};
use crate::strengthening::{
    remove_adjacent_duplicates_chars, strengthen_chars, DedupReport, DuplicateError,
    StrengthenError, StrengthenReport,
};
use rand::Rng;
use std::sync::{Mutex, OnceLock, PoisonError};
use thiserror::Error;

/// Upper bound on repair rounds in [`PasswordGenerator::generate_without_repeats`].
pub const MAX_REPAIR_ROUNDS: usize = 8;

/// Errors that can occur during generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A zero-length password was requested.
    #[error("password length must be at least 1")]
    ZeroLength,
    /// Strengthening failed.
    #[error(transparent)]
    Strengthen(#[from] StrengthenError),
    /// Duplicate removal gave up.
    #[error(transparent)]
    Duplicate(#[from] DuplicateError),
    /// Sampling from a pool failed.
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Generates strengthened random passwords.
///
/// Owns its random source; callers that need several passwords should
/// keep one generator around instead of creating one per password.
pub struct PasswordGenerator<R = PasswordRng> {
    pools: ClassPools,
    rng: R,
    /// Passwords produced so far.
    generated: u64,
}

impl PasswordGenerator<PasswordRng> {
    /// Creates a generator seeded from the OS.
    pub fn from_os_entropy() -> Self {
        Self::new(PasswordRng::from_os_entropy())
    }

    /// Creates a reproducible generator.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(PasswordRng::from_seed(seed))
    }
}

impl<R: Rng> PasswordGenerator<R> {
    /// Creates a generator over the standard pools with the given source.
    pub fn new(rng: R) -> Self {
        Self::with_pools(ClassPools::new(), rng)
    }

    /// Creates a generator with explicit pools.
    pub fn with_pools(pools: ClassPools, rng: R) -> Self {
        Self {
            pools,
            rng,
            generated: 0,
        }
    }

    /// Generates one password of exactly `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ZeroLength`] for `length == 0`.
    pub fn generate(&mut self, length: usize) -> Result<String, GenerateError> {
        self.generate_with_report(length).map(|(password, _)| password)
    }

    /// Generates one password and reports what strengthening did.
    pub fn generate_with_report(
        &mut self,
        length: usize,
    ) -> Result<(String, StrengthenReport), GenerateError> {
        if length == 0 {
            return Err(GenerateError::ZeroLength);
        }

        let mut chars = Vec::with_capacity(length);
        for _ in 0..length {
            chars.push(self.pools.full().sample(&mut self.rng)?);
        }

        let report = strengthen_chars(&mut chars, &self.pools, &mut self.rng)?;
        self.generated += 1;

        tracing::debug!(
            length,
            substitutions = report.substitutions,
            full = report.is_full(),
            "Generated password"
        );

        Ok((chars.into_iter().collect(), report))
    }

    /// Generates one password with no two equal neighbouring characters.
    ///
    /// Alternates duplicate repair and strengthening, since each can
    /// undo the other, for at most [`MAX_REPAIR_ROUNDS`] rounds. Class
    /// coverage always wins: if neighbours still repeat after the last
    /// round the strengthened password is returned as is.
    pub fn generate_without_repeats(
        &mut self,
        length: usize,
    ) -> Result<(String, StrengthenReport, DedupReport), GenerateError> {
        let (password, mut report) = self.generate_with_report(length)?;
        let mut chars: Vec<char> = password.chars().collect();
        let mut dedup = DedupReport::default();

        for _ in 0..MAX_REPAIR_ROUNDS {
            if !chars.windows(2).any(|w| w[0] == w[1]) {
                break;
            }
            let repaired =
                remove_adjacent_duplicates_chars(&mut chars, self.pools.full(), &mut self.rng)?;
            let again = strengthen_chars(&mut chars, &self.pools, &mut self.rng)?;

            dedup.resamples += repaired.resamples;
            report.substitutions += again.substitutions;
            report.coverage = again.coverage;
        }

        if chars.windows(2).any(|w| w[0] == w[1]) {
            tracing::warn!(length, "Adjacent duplicates remain after repair rounds");
        }

        Ok((chars.into_iter().collect(), report, dedup))
    }

    /// Generates `count` passwords of `length` characters.
    pub fn generate_batch(
        &mut self,
        length: usize,
        count: usize,
    ) -> Result<Vec<String>, GenerateError> {
        (0..count).map(|_| self.generate(length)).collect()
    }

    /// Returns the random source.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Number of passwords generated so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }
}

static SHARED: OnceLock<Mutex<PasswordGenerator>> = OnceLock::new();

/// The process-wide generator, seeded from the OS on first use.
fn shared_generator() -> &'static Mutex<PasswordGenerator> {
    SHARED.get_or_init(|| Mutex::new(PasswordGenerator::from_os_entropy()))
}

/// Generates one password from the process-wide generator.
///
/// The shared source is seeded once and reused by every call. Callers
/// that want their own stream (or a fixed seed) should hold a
/// [`PasswordGenerator`] instead.
pub fn generate_password(length: usize) -> Result<String, GenerateError> {
    // A panic mid-generation leaves the generator in a usable state
    shared_generator()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .generate(length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{char_stats, entropy_bits, max_entropy};
    use crate::strengthening::{has_adjacent_duplicates, Coverage};

    #[test]
    fn test_zero_length_rejected() {
        let mut generator = PasswordGenerator::from_seed(1);
        assert_eq!(generator.generate(0), Err(GenerateError::ZeroLength));
        assert_eq!(generator.generated(), 0);
    }

    #[test]
    fn test_generated_password_has_max_entropy() {
        let mut generator = PasswordGenerator::from_seed(2);

        for length in [4, 5, 8, 18, 64] {
            for _ in 0..50 {
                let password = generator.generate(length).unwrap();
                assert_eq!(password.chars().count(), length);
                assert_eq!(entropy_bits(&password).unwrap(), max_entropy(length));
            }
        }
    }

    #[test]
    fn test_short_lengths_best_effort() {
        let mut generator = PasswordGenerator::from_seed(3);

        for length in 1..4 {
            let (password, report) = generator.generate_with_report(length).unwrap();
            assert_eq!(password.len(), length);
            assert_eq!(report.coverage, Coverage::BestEffort { classes: length });
            assert_eq!(char_stats(&password).unwrap().coverage(), length);
        }
    }

    #[test]
    fn test_without_repeats_keeps_coverage() {
        let mut generator = PasswordGenerator::from_seed(5);

        for _ in 0..100 {
            let (password, report, _) = generator.generate_without_repeats(16).unwrap();
            assert_eq!(password.len(), 16);
            assert!(report.is_full());
            assert!(!has_adjacent_duplicates(&password), "{password}");
        }
    }

    #[test]
    fn test_without_repeats_rejects_zero_length() {
        let mut generator = PasswordGenerator::from_seed(6);
        assert!(matches!(
            generator.generate_without_repeats(0),
            Err(GenerateError::ZeroLength)
        ));
    }

    #[test]
    fn test_same_seed_same_passwords() {
        let mut a = PasswordGenerator::from_seed(42);
        let mut b = PasswordGenerator::from_seed(42);

        assert_eq!(
            a.generate_batch(16, 5).unwrap(),
            b.generate_batch(16, 5).unwrap()
        );
    }

    #[test]
    fn test_batch_counts() {
        let mut generator = PasswordGenerator::from_seed(4);
        let batch = generator.generate_batch(12, 7).unwrap();

        assert_eq!(batch.len(), 7);
        assert_eq!(generator.generated(), 7);
        assert!(generator.rng().draws() > 0);
    }

    #[test]
    fn test_one_shot_generation() {
        let password = generate_password(18).unwrap();
        assert_eq!(password.len(), 18);
        assert_eq!(entropy_bits(&password).unwrap(), max_entropy(18));
    }

    #[test]
    fn test_one_shot_calls_share_one_source() {
        generate_password(12).unwrap();
        let (generated, draws) = {
            let shared = shared_generator().lock().unwrap();
            (shared.generated(), shared.rng().draws())
        };

        generate_password(12).unwrap();

        let shared = shared_generator().lock().unwrap();
        assert!(shared.generated() > generated);
        assert!(shared.rng().draws() > draws);
    }
}

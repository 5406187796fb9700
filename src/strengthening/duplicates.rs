//! Adjacent duplicate detection and repair.
//!
//! Only immediate neighbours count: `"aba"` has no adjacent duplicate
//! even though `a` repeats.

use crate::charset::CharPool;
use crate::rng::RangeError;
use rand::Rng;
use thiserror::Error;

/// Resample limit per position.
pub const MAX_RESAMPLE_ATTEMPTS: usize = 64;

/// Errors that can occur while removing duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DuplicateError {
    /// A position kept matching a neighbour for every allowed resample.
    #[error("position {position} still matches a neighbour after {attempts} resamples")]
    RetriesExhausted {
        /// Index of the character that could not be repaired.
        position: usize,
        /// Resamples tried at that index.
        attempts: usize,
    },
    /// Sampling from the pool failed.
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Outcome of a duplicate removal run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupReport {
    /// Total characters drawn to break up duplicates.
    pub resamples: usize,
}

/// Returns true if any two consecutive characters are equal.
pub fn has_adjacent_duplicates(password: &str) -> bool {
    password
        .chars()
        .zip(password.chars().skip(1))
        .any(|(a, b)| a == b)
}

#[inline]
fn matches_neighbour(chars: &[char], i: usize) -> bool {
    let c = chars[i];
    (i > 0 && chars[i - 1] == c) || chars.get(i + 1) == Some(&c)
}

/// Removes adjacent duplicates from a `String`.
///
/// On error the password is left as it was.
pub fn remove_adjacent_duplicates<R: Rng + ?Sized>(
    password: &mut String,
    pool: &CharPool,
    rng: &mut R,
) -> Result<DedupReport, DuplicateError> {
    let mut chars: Vec<char> = password.chars().collect();
    let report = remove_adjacent_duplicates_chars(&mut chars, pool, rng)?;
    if report.resamples > 0 {
        *password = chars.into_iter().collect();
    }
    Ok(report)
}

/// Removes adjacent duplicates in place.
///
/// Scans left to right; any position equal to its left or right
/// neighbour is redrawn uniformly from `pool` until it differs from
/// both. Positions already visited are never touched again, so one
/// pass leaves no equal pair behind.
///
/// # Errors
///
/// Returns [`DuplicateError::RetriesExhausted`] if a position cannot be
/// separated from its neighbours within [`MAX_RESAMPLE_ATTEMPTS`]
/// draws, which is always the case for a one-character pool. The
/// buffer may be partially rewritten in that case.
pub fn remove_adjacent_duplicates_chars<R: Rng + ?Sized>(
    chars: &mut [char],
    pool: &CharPool,
    rng: &mut R,
) -> Result<DedupReport, DuplicateError> {
    let mut report = DedupReport::default();

    for i in 0..chars.len() {
        let mut attempts = 0;
        while matches_neighbour(chars, i) {
            if attempts == MAX_RESAMPLE_ATTEMPTS {
                tracing::warn!(
                    position = i,
                    pool_size = pool.len(),
                    "Could not break adjacent duplicate"
                );
                return Err(DuplicateError::RetriesExhausted {
                    position: i,
                    attempts,
                });
            }
            chars[i] = pool.sample(rng)?;
            attempts += 1;
        }

        if attempts > 0 {
            tracing::trace!(position = i, attempts, "Resampled adjacent duplicate");
        }
        report.resamples += attempts;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::ClassPools;
    use crate::rng::PasswordRng;

    #[test]
    fn test_detects_pairs_at_boundaries() {
        assert!(has_adjacent_duplicates("aab"));
        assert!(has_adjacent_duplicates("baa"));
        assert!(has_adjacent_duplicates("aa"));
        assert!(has_adjacent_duplicates("QDMM,MNi0ISP7dYi"));
    }

    #[test]
    fn test_no_pairs() {
        assert!(!has_adjacent_duplicates(""));
        assert!(!has_adjacent_duplicates("a"));
        assert!(!has_adjacent_duplicates("ab"));
        assert!(!has_adjacent_duplicates("abab"));
        assert!(!has_adjacent_duplicates("aba"));
    }

    #[test]
    fn test_removes_leading_pair() {
        let pools = ClassPools::new();
        let mut rng = PasswordRng::from_seed(1);
        let mut password = String::from("aab");

        let report = remove_adjacent_duplicates(&mut password, pools.full(), &mut rng).unwrap();

        assert_ne!(password, "aab");
        assert!(report.resamples >= 1);
        assert!(!has_adjacent_duplicates(&password));
        assert_eq!(password.chars().count(), 3);
        assert!(password.ends_with('b'));
    }

    #[test]
    fn test_removes_runs() {
        let pools = ClassPools::new();
        let mut rng = PasswordRng::from_seed(2);

        for input in ["QDMM,MNi0ISP7dYi", "zzzzzzzzzz", "11", "xyyyx"] {
            let mut password = input.to_string();
            remove_adjacent_duplicates(&mut password, pools.full(), &mut rng).unwrap();
            assert!(!has_adjacent_duplicates(&password), "{input} -> {password}");
            assert_eq!(password.chars().count(), input.chars().count());
        }
    }

    #[test]
    fn test_second_pass_is_noop() {
        let pools = ClassPools::new();
        let mut rng = PasswordRng::from_seed(3);
        let mut password = String::from("aaaabbbbcccc");

        remove_adjacent_duplicates(&mut password, pools.full(), &mut rng).unwrap();
        let once = password.clone();
        let report = remove_adjacent_duplicates(&mut password, pools.full(), &mut rng).unwrap();

        assert_eq!(report.resamples, 0);
        assert_eq!(password, once);
    }

    #[test]
    fn test_short_inputs_are_noop() {
        let pools = ClassPools::new();
        let mut rng = PasswordRng::from_seed(4);

        for input in ["", "a"] {
            let mut password = input.to_string();
            let report =
                remove_adjacent_duplicates(&mut password, pools.full(), &mut rng).unwrap();
            assert_eq!(report, DedupReport::default());
            assert_eq!(password, input);
        }
    }

    #[test]
    fn test_non_adjacent_repeats_are_kept() {
        let pools = ClassPools::new();
        let mut rng = PasswordRng::from_seed(5);
        let mut password = String::from("a1a1a1");

        let report = remove_adjacent_duplicates(&mut password, pools.full(), &mut rng).unwrap();

        assert_eq!(report.resamples, 0);
        assert_eq!(password, "a1a1a1");
    }

    #[test]
    fn test_single_character_pool_gives_up() {
        let pool = CharPool::new(['a']).unwrap();
        let mut rng = PasswordRng::from_seed(6);
        let mut password = String::from("aa");

        let result = remove_adjacent_duplicates(&mut password, &pool, &mut rng);

        assert_eq!(
            result,
            Err(DuplicateError::RetriesExhausted {
                position: 0,
                attempts: MAX_RESAMPLE_ATTEMPTS,
            })
        );
        assert_eq!(password, "aa");
    }

    #[test]
    fn test_single_character_pool_without_duplicates() {
        let pool = CharPool::new(['a']).unwrap();
        let mut rng = PasswordRng::from_seed(7);
        let mut password = String::from("ab");

        assert!(remove_adjacent_duplicates(&mut password, &pool, &mut rng).is_ok());
        assert_eq!(password, "ab");
    }
}

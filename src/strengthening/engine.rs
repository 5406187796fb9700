//! Class-coverage strengthening loop.
//!
//! Each pass replaces one character of the most common class with a
//! character of a class that does not occur yet. A pass can only add a
//! class: for passwords of four or more characters with a class
//! missing, the dominant class occurs at least twice, so losing one
//! occurrence never removes it. Three passes therefore suffice; the
//! loop is still capped at [`MAX_ITERATIONS`].
//!
//! Passwords shorter than four characters cannot hold every class.
//! They are strengthened up to one class per character and reported as
//! [`Coverage::BestEffort`].

use crate::analysis::ClassStats;
use crate::charset::{classify, CharClass, ClassPools, ClassifyError};
use crate::rng::RangeError;
use rand::Rng;
use thiserror::Error;

/// Upper bound on strengthening passes.
pub const MAX_ITERATIONS: usize = CharClass::COUNT;

/// Errors that can occur while strengthening.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrengthenError {
    /// The password holds a character outside every class.
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    /// Sampling from a class pool failed.
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// How many classes the strengthened password covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Every class is present; entropy equals the maximum for the length.
    Full,
    /// Fewer classes than exist, because the password is too short.
    BestEffort {
        /// Number of classes present.
        classes: usize,
    },
}

/// Outcome of a strengthening run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthenReport {
    /// Characters replaced.
    pub substitutions: usize,
    /// Final class coverage.
    pub coverage: Coverage,
}

impl StrengthenReport {
    /// Returns true if every class ended up present.
    pub fn is_full(&self) -> bool {
        self.coverage == Coverage::Full
    }
}

/// Strengthens a password held in a `String`.
///
/// See [`strengthen_chars`].
pub fn strengthen<R: Rng + ?Sized>(
    password: &mut String,
    pools: &ClassPools,
    rng: &mut R,
) -> Result<StrengthenReport, StrengthenError> {
    let mut chars: Vec<char> = password.chars().collect();
    let report = strengthen_chars(&mut chars, pools, rng)?;
    *password = chars.into_iter().collect();
    Ok(report)
}

/// Mutates `password` in place until it covers as many classes as its
/// length allows.
///
/// Per pass: find the dominant class and the missing class, then
/// overwrite the first character of the dominant class with a random
/// character from the missing class's pool.
///
/// # Errors
///
/// Fails if the password contains a character outside printable ASCII.
pub fn strengthen_chars<R: Rng + ?Sized>(
    password: &mut [char],
    pools: &ClassPools,
    rng: &mut R,
) -> Result<StrengthenReport, StrengthenError> {
    let target = password.len().min(CharClass::COUNT);
    let mut substitutions = 0;

    for _ in 0..MAX_ITERATIONS {
        let stats = ClassStats::from_chars(password)?;
        if stats.coverage() >= target {
            break;
        }

        let (Some(dominant), Some(missing)) = (stats.dominant(), stats.missing()) else {
            break;
        };
        let Some(position) = password
            .iter()
            .position(|&c| classify(c) == Ok(dominant))
        else {
            break;
        };

        password[position] = pools.class(missing).sample(rng)?;
        substitutions += 1;

        tracing::trace!(
            position,
            dominant = %dominant,
            missing = %missing,
            "Replaced character to add missing class"
        );
    }

    let classes = ClassStats::from_chars(password)?.coverage();
    let coverage = if classes == CharClass::COUNT {
        Coverage::Full
    } else {
        Coverage::BestEffort { classes }
    };

    if !matches!(coverage, Coverage::Full) && password.len() >= CharClass::COUNT {
        tracing::warn!(
            length = password.len(),
            classes,
            "Strengthening stopped short of full coverage"
        );
    }

    tracing::debug!(
        length = password.len(),
        substitutions,
        classes,
        "Strengthening finished"
    );

    Ok(StrengthenReport {
        substitutions,
        coverage,
    })
}

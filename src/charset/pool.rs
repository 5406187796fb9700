//! Character pools used as sampling universes.
//!
//! The full pool holds all 94 printable ASCII characters. Each class
//! additionally has its own sub-pool, used when the strengthening
//! engine needs a character of a specific class.

use super::class::{classify, CharClass, ClassifyError};
use crate::rng::{random_int, RangeError};
use rand::Rng;
use thiserror::Error;

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Errors that can occur when building a pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// No characters were supplied.
    #[error("character pool is empty")]
    Empty,
    /// A supplied character belongs to no class.
    #[error("pool contains an unclassifiable character: {0}")]
    Unclassifiable(#[from] ClassifyError),
}

/// A non-empty, ordered set of printable ASCII characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharPool {
    chars: Vec<char>,
}

impl CharPool {
    /// Creates a pool from the given characters.
    ///
    /// # Errors
    ///
    /// Fails if `chars` is empty or contains a character outside
    /// printable ASCII.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self, PoolError> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(PoolError::Empty);
        }
        for &c in &chars {
            classify(c)?;
        }
        Ok(Self { chars })
    }

    /// All 94 printable ASCII characters (33..=126).
    pub fn printable_ascii() -> Self {
        Self {
            chars: (33u8..=126).map(char::from).collect(),
        }
    }

    /// The sub-pool for a single class.
    pub fn for_class(class: CharClass) -> Self {
        let source = match class {
            CharClass::Upper => UPPER,
            CharClass::Lower => LOWER,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        };
        Self {
            chars: source.chars().collect(),
        }
    }

    /// Number of characters in the pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; pools are non-empty by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns true if the pool contains `c`.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Returns the pool characters.
    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Draws one character uniformly from the pool.
    ///
    /// The index is taken from `[0, len)`, so every character is
    /// reachable and nothing past the end is.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<char, RangeError> {
        let idx = random_int(rng, 0, self.chars.len())?;
        Ok(self.chars[idx])
    }
}

/// The full pool together with one sub-pool per class.
///
/// Built once and handed to components by reference.
#[derive(Debug, Clone)]
pub struct ClassPools {
    full: CharPool,
    by_class: [CharPool; CharClass::COUNT],
}

impl ClassPools {
    /// Creates the standard printable-ASCII pools.
    pub fn new() -> Self {
        Self {
            full: CharPool::printable_ascii(),
            by_class: CharClass::ALL.map(CharPool::for_class),
        }
    }

    /// The full sampling universe.
    #[inline]
    pub fn full(&self) -> &CharPool {
        &self.full
    }

    /// The sub-pool for `class`.
    #[inline]
    pub fn class(&self, class: CharClass) -> &CharPool {
        &self.by_class[class.index()]
    }
}

impl Default for ClassPools {
    fn default() -> Self {
        Self::new()
    }
}

//! Per-class occurrence counts.
//!
//! Counts are recomputed from scratch for every query; passwords are
//! short enough that incremental bookkeeping is not worth carrying.

use crate::charset::{classify, CharClass, ClassifyError};
use std::ops::Index;

/// Occurrence counts for each character class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassStats {
    counts: [usize; CharClass::COUNT],
}

impl ClassStats {
    /// Builds stats directly from counts in enumeration order.
    pub fn from_counts(counts: [usize; CharClass::COUNT]) -> Self {
        Self { counts }
    }

    /// Counts the classes of every character in `chars`.
    pub fn from_chars(chars: &[char]) -> Result<Self, ClassifyError> {
        let mut counts = [0usize; CharClass::COUNT];
        for &c in chars {
            counts[classify(c)?.index()] += 1;
        }
        Ok(Self { counts })
    }

    /// Occurrences of `class`.
    #[inline]
    pub fn count(&self, class: CharClass) -> usize {
        self.counts[class.index()]
    }

    /// Counts as `[upper, lower, digit, symbol]`.
    #[inline]
    pub fn as_array(&self) -> [usize; CharClass::COUNT] {
        self.counts
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Classes that occur at least once, in enumeration order.
    pub fn present(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(move |&class| self.count(class) > 0)
    }

    /// Number of distinct classes present.
    pub fn coverage(&self) -> usize {
        self.present().count()
    }

    /// The class with the highest count.
    ///
    /// A later class only wins with a strictly higher count, so ties
    /// resolve to the earliest class. Returns `None` when every count
    /// is zero.
    pub fn dominant(&self) -> Option<CharClass> {
        let mut best: Option<CharClass> = None;
        for class in CharClass::ALL {
            let count = self.count(class);
            if count == 0 {
                continue;
            }
            if best.map_or(true, |b| count > self.count(b)) {
                best = Some(class);
            }
        }
        best
    }

    /// A class with zero occurrences.
    ///
    /// When several are missing this is the last one in enumeration
    /// order; the others are left for later passes.
    pub fn missing(&self) -> Option<CharClass> {
        CharClass::ALL
            .into_iter()
            .rev()
            .find(|&class| self.count(class) == 0)
    }
}

impl Index<CharClass> for ClassStats {
    type Output = usize;

    fn index(&self, class: CharClass) -> &usize {
        &self.counts[class.index()]
    }
}

/// Counts the classes in `password`.
///
/// # Errors
///
/// Returns [`ClassifyError`] on the first character outside printable ASCII.
pub fn char_stats(password: &str) -> Result<ClassStats, ClassifyError> {
    let chars: Vec<char> = password.chars().collect();
    ClassStats::from_chars(&chars)
}

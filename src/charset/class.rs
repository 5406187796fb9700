//! Character classification by code point range.
//!
//! Every printable ASCII character (33..=126) belongs to exactly one
//! of four classes. Anything outside that range is rejected rather
//! than being folded into a default class.

use std::fmt;
use thiserror::Error;

/// Errors produced when classifying a character.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The character is outside printable ASCII.
    #[error("character {character:?} (U+{code:04X}) is not printable ASCII", code = code_point(.character))]
    Unclassifiable {
        /// The offending character.
        character: char,
    },
}

fn code_point(character: &char) -> u32 {
    u32::from(*character)
}

/// One of the four character classes.
///
/// Variant order is the enumeration order used for tie-breaking
/// throughout the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    /// `A`..=`Z`
    Upper,
    /// `a`..=`z`
    Lower,
    /// `0`..=`9`
    Digit,
    /// Printable ASCII punctuation.
    Symbol,
}

impl CharClass {
    /// All classes in enumeration order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// Number of classes.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of the class in [`CharClass::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CharClass::Upper => 0,
            CharClass::Lower => 1,
            CharClass::Digit => 2,
            CharClass::Symbol => 3,
        }
    }

    /// Contribution of the class to the effective pool size.
    #[inline]
    pub const fn pool_weight(self) -> usize {
        match self {
            CharClass::Upper | CharClass::Lower => 26,
            CharClass::Digit => 10,
            CharClass::Symbol => 32,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            CharClass::Upper => "uppercase",
            CharClass::Lower => "lowercase",
            CharClass::Digit => "digit",
            CharClass::Symbol => "symbol",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<char> for CharClass {
    type Error = ClassifyError;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        classify(character)
    }
}

/// Maps a character to its class.
///
/// # Errors
///
/// Returns [`ClassifyError::Unclassifiable`] for whitespace, control
/// characters and anything beyond `~` (126).
pub fn classify(character: char) -> Result<CharClass, ClassifyError> {
    match character as u32 {
        65..=90 => Ok(CharClass::Upper),
        97..=122 => Ok(CharClass::Lower),
        48..=57 => Ok(CharClass::Digit),
        33..=47 | 58..=64 | 91..=96 | 123..=126 => Ok(CharClass::Symbol),
        _ => Err(ClassifyError::Unclassifiable { character }),
    }
}

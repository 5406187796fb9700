//! Strength labels and brute-force search space.

use std::fmt;

/// Coarse strength label for an entropy value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthRating {
    /// Below 36 bits.
    Weak,
    /// 36 to 59 bits.
    Fair,
    /// 60 to 127 bits.
    Strong,
    /// 128 bits and above.
    VeryStrong,
}

impl StrengthRating {
    /// Rates an entropy value in bits.
    pub fn from_bits(bits: f64) -> Self {
        match bits as u32 {
            0..=35 => StrengthRating::Weak,
            36..=59 => StrengthRating::Fair,
            60..=127 => StrengthRating::Strong,
            _ => StrengthRating::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthRating::Weak => "Weak",
            StrengthRating::Fair => "Fair",
            StrengthRating::Strong => "Strong",
            StrengthRating::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// Number of guesses needed to exhaust a space of `bits` bits.
pub fn search_space(bits: f64) -> f64 {
    bits.exp2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(StrengthRating::from_bits(0.0), StrengthRating::Weak);
        assert_eq!(StrengthRating::from_bits(35.9), StrengthRating::Weak);
        assert_eq!(StrengthRating::from_bits(36.0), StrengthRating::Fair);
        assert_eq!(StrengthRating::from_bits(59.9), StrengthRating::Fair);
        assert_eq!(StrengthRating::from_bits(60.0), StrengthRating::Strong);
        assert_eq!(StrengthRating::from_bits(128.0), StrengthRating::VeryStrong);
    }

    #[test]
    fn test_search_space() {
        assert_eq!(search_space(0.0), 1.0);
        assert_eq!(search_space(10.0), 1024.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(StrengthRating::VeryStrong.to_string(), "Very Strong");
    }
}

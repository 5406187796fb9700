//! Pool-based entropy estimate.
//!
//! A password of length `L` drawn from an effective pool of `R`
//! characters has `L * log2(R)` bits of entropy. The effective pool is
//! the sum of the fixed weights of the classes that actually occur:
//!
//! | class  | weight |
//! |--------|--------|
//! | upper  | 26     |
//! | lower  | 26     |
//! | digit  | 10     |
//! | symbol | 32     |
//!
//! A class contributes its weight once no matter how often it occurs.

use super::stats::ClassStats;
use crate::charset::ClassifyError;

/// Size of the pool when every class is present.
pub const FULL_POOL_SIZE: usize = 94;

/// Bits for `length` characters drawn from a pool of `pool_size`.
///
/// An empty pool yields `0.0` rather than `-inf`/`NaN`.
#[inline]
pub fn pool_entropy(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

/// Highest entropy a password of `length` characters can reach.
pub fn max_entropy(length: usize) -> f64 {
    pool_entropy(length, FULL_POOL_SIZE)
}

impl ClassStats {
    /// Sum of the weights of the classes present.
    pub fn effective_pool_size(&self) -> usize {
        self.present().map(|class| class.pool_weight()).sum()
    }

    /// Entropy of a password with these class counts.
    pub fn entropy_bits(&self) -> f64 {
        pool_entropy(self.total(), self.effective_pool_size())
    }
}

/// Effective pool size of `password`.
pub fn effective_pool_size(password: &str) -> Result<usize, ClassifyError> {
    Ok(super::char_stats(password)?.effective_pool_size())
}

/// Entropy estimate of `password` in bits.
///
/// Equal to `max_entropy(len)` exactly when all four classes occur.
///
/// # Errors
///
/// Returns [`ClassifyError`] if the password holds a character outside
/// printable ASCII.
pub fn entropy_bits(password: &str) -> Result<f64, ClassifyError> {
    Ok(super::char_stats(password)?.entropy_bits())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_uppercase() {
        let bits = entropy_bits("ABCD").unwrap();
        assert!((bits - 4.0 * 26f64.log2()).abs() < 1e-12);
        assert!((bits - 18.80).abs() < 0.01);
    }

    #[test]
    fn test_one_of_each_reaches_max() {
        let bits = entropy_bits("Ab1!").unwrap();
        assert_eq!(bits, max_entropy(4));
        assert!((bits - 26.22).abs() < 0.01);
    }

    #[test]
    fn test_class_weight_counted_once() {
        assert_eq!(effective_pool_size("aaaa").unwrap(), 26);
        assert_eq!(effective_pool_size("a1a1").unwrap(), 36);
        assert_eq!(effective_pool_size("a1!A").unwrap(), 94);
        assert_eq!(effective_pool_size("!!??").unwrap(), 32);
    }

    #[test]
    fn test_empty_password_is_zero_not_nan() {
        let bits = entropy_bits("").unwrap();
        assert_eq!(bits, 0.0);
        assert!(!bits.is_nan());
    }

    #[test]
    fn test_zero_pool_sentinel() {
        assert_eq!(pool_entropy(10, 0), 0.0);
    }

    #[test]
    fn test_max_entropy_scales_with_length() {
        assert_eq!(max_entropy(0), 0.0);
        assert!((max_entropy(18) - 18.0 * 94f64.log2()).abs() < 1e-12);
        assert!(max_entropy(8) < max_entropy(9));
    }

    #[test]
    fn test_unclassifiable_propagates() {
        assert!(entropy_bits("tab\there").is_err());
    }

    #[test]
    fn test_adding_classes_never_lowers_entropy() {
        let steps = ["aaaaaaaa", "aaaaaaa1", "aaaaaa!1", "Aaaaaa!1"];
        let bits: Vec<f64> = steps.iter().map(|p| entropy_bits(p).unwrap()).collect();

        for w in bits.windows(2) {
            assert!(w[0] <= w[1]);
        }
        assert_eq!(bits[3], max_entropy(8));
    }
}

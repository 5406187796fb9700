//! Password analysis: class statistics and entropy.
//!
//! The entropy figures here are a pool-size model, not a measure of
//! how the password was actually produced.

mod entropy;
mod rating;
mod stats;

pub use entropy::{
    effective_pool_size, entropy_bits, max_entropy, pool_entropy, FULL_POOL_SIZE,
};
pub use rating::{search_space, StrengthRating};
pub use stats::{char_stats, ClassStats};

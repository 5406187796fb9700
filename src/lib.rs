//! Entropass Library
//!
//! Generates random passwords and strengthens them until they reach the
//! highest entropy their length allows under a character-pool model.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! generation → strengthening → finished password
//!                   ↓
//!        charset + analysis (classify, count, score)
//! ```
//!
//! Duplicate repair (`strengthening::remove_adjacent_duplicates`) is an
//! independent post-processing step over the same pools.
//!
//! # Entropy Model
//!
//! Each of the four character classes contributes a fixed weight to the
//! effective pool once it occurs: uppercase 26, lowercase 26, digits 10,
//! symbols 32. A password of length `L` with pool `R` scores
//! `L * log2(R)` bits; the maximum is `L * log2(94)`.
//!
//! # Design Principles
//!
//! - **One random source**: a ChaCha20 generator seeded once and passed
//!   explicitly to every component that samples
//! - **Bounded loops**: strengthening runs at most four passes, duplicate
//!   repair at most a fixed number of draws per position
//! - **No silent fallbacks**: characters outside printable ASCII are an
//!   error, not a guess
//! - **No cryptographic claims**: the entropy figure is a pool-size model
//!
//! # Example
//!
//! ```
//! use entropass::{entropy_bits, max_entropy, PasswordGenerator};
//!
//! let mut generator = PasswordGenerator::from_os_entropy();
//! let password = generator.generate(18).unwrap();
//!
//! assert_eq!(password.len(), 18);
//! assert_eq!(entropy_bits(&password).unwrap(), max_entropy(18));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod charset;
pub mod generation;
pub mod metrics;
pub mod rng;
pub mod strengthening;

// Re-export commonly used types at crate root
pub use analysis::{
    char_stats, entropy_bits, max_entropy, search_space, ClassStats, StrengthRating,
};
pub use charset::{classify, CharClass, CharPool, ClassPools, ClassifyError};
pub use generation::{generate_password, GenerateError, PasswordGenerator};
pub use rng::{random_int, PasswordRng, RangeError};
pub use strengthening::{
    has_adjacent_duplicates, remove_adjacent_duplicates, strengthen, Coverage, DedupReport,
    DuplicateError, StrengthenReport,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

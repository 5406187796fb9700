//! Password mutation: class-coverage strengthening and adjacent
//! duplicate repair.
//!
//! Both operate on a caller-owned buffer and draw replacement
//! characters from an injected random source.

mod duplicates;
mod engine;

pub use duplicates::{
    has_adjacent_duplicates, remove_adjacent_duplicates, remove_adjacent_duplicates_chars,
    DedupReport, DuplicateError, MAX_RESAMPLE_ATTEMPTS,
};
pub use engine::{
    strengthen, strengthen_chars, Coverage, StrengthenError, StrengthenReport, MAX_ITERATIONS,
};

//! Random source shared by generation and duplicate repair.
//!
//! This module provides a ChaCha20 generator seeded once per
//! process and a bounds-checked integer helper.

mod csprng;

pub use csprng::{random_int, PasswordRng, RangeError};

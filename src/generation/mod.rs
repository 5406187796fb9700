//! Password generation and its configuration.

mod config;
mod generator;

pub use config::{ConfigError, FileConfig, GeneratorConfig, OutputConfig, DEFAULT_LENGTH};
pub use generator::{generate_password, GenerateError, PasswordGenerator, MAX_REPAIR_ROUNDS};

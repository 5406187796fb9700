//! Generator configuration.
//!
//! The only policy knob is the password length. Everything else here
//! controls how many passwords the CLI prints and how.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default password length.
pub const DEFAULT_LENGTH: usize = 16;

/// Settings for password generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Characters per password.
    pub length: usize,
    /// Passwords to produce per run.
    pub count: usize,
    /// Fixed RNG seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            count: 1,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration for passwords of `length` characters.
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length == 0 {
            return Err(ConfigError::InvalidLength);
        }
        if self.count == 0 {
            return Err(ConfigError::InvalidCount);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// `length` is zero.
    #[error("password length must be at least 1")]
    InvalidLength,
    /// `count` is zero.
    #[error("password count must be at least 1")]
    InvalidCount,
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The file is not valid TOML for this format.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Break up adjacent repeated characters after generation.
    pub remove_duplicates: bool,
    /// Print entropy alongside each password.
    pub show_entropy: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            remove_duplicates: false,
            show_entropy: true,
        }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// `[generator]` section.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// `[output]` section.
    #[serde(default)]
    pub output: OutputConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.generator.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.length, DEFAULT_LENGTH);
    }

    #[test]
    fn test_zero_length_invalid() {
        let config = GeneratorConfig::with_length(0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidLength)));
    }

    #[test]
    fn test_zero_count_invalid() {
        let config = GeneratorConfig {
            count: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCount)));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = FileConfig::from_toml("[generator]\nlength = 24\n").unwrap();

        assert_eq!(config.generator.length, 24);
        assert_eq!(config.generator.count, 1);
        assert_eq!(config.generator.seed, None);
        assert!(config.output.show_entropy);
        assert!(!config.output.remove_duplicates);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = FileConfig::from_toml("").unwrap();
        assert_eq!(config.generator.length, DEFAULT_LENGTH);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(matches!(
            FileConfig::from_toml("[generator\nlength = 3"),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            FileConfig::from_toml("[generator]\nlength = 0\n"),
            Err(ConfigError::InvalidLength)
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(
            file,
            "[generator]\nlength = 12\ncount = 3\nseed = 99\n\n[output]\nremove_duplicates = true"
        )
        .expect("Failed to write");

        let config = FileConfig::from_file(file.path()).unwrap();

        assert_eq!(config.generator.length, 12);
        assert_eq!(config.generator.count, 3);
        assert_eq!(config.generator.seed, Some(99));
        assert!(config.output.remove_duplicates);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            FileConfig::from_file("/nonexistent/entropass.toml"),
            Err(ConfigError::FileReadError(_))
        ));
    }
}

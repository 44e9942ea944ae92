// src/config.rs

//! Defines the configuration structures for `color-list`.
//!
//! Nothing here is read from a file, the command line or the environment.
//! The values are fixed at build time and exposed through `CONFIG`, so the
//! rest of the program reads its parameters from one place.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Relative path the color list is written to.
pub const DEFAULT_OUTPUT_PATH: &str = "./testing.txt";

/// Process-wide configuration, built on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// Represents the complete configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Output file settings.
    pub output: OutputConfig,
}

/// Where and how the color list is written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// File to create or truncate, relative to the working directory.
    pub path: PathBuf,
    /// Terminate the last line with `\n` as well.
    pub trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            trailing_newline: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn default_output_is_testing_txt_without_trailing_newline() {
        assert_eq!(CONFIG.output.path, PathBuf::from("./testing.txt"));
        assert!(!CONFIG.output.trailing_newline);
    }

    #[test_log::test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"output": {}}"#).unwrap();
        assert_eq!(config.output, OutputConfig::default());
    }
}

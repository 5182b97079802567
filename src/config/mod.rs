//! Configuration loading for the block parser.
//!
//! Settings are read from the "bru-parser" key of a settings JSON value (or
//! file) and merged with defaults. There is no global configuration: the
//! loaded [`ParserConfig`] is passed to the parser explicitly, so parsing
//! stays a pure function of the text and the configuration.

pub mod schema;

pub use schema::ParserConfig;

use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

/// Key under which parser settings live in a settings object.
pub const SETTINGS_KEY: &str = "bru-parser";

/// Errors that can occur while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The settings file could not be read.
    Io {
        /// Path of the settings file
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },

    /// The settings file is not valid JSON.
    InvalidJson {
        /// Path of the settings file
        path: PathBuf,
        /// Underlying parse error message
        message: String,
    },

    /// The merged configuration failed validation.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "Failed to read settings file '{}': {}", path.display(), message)
            }
            ConfigError::InvalidJson { path, message } => {
                write!(
                    f,
                    "Settings file '{}' is not valid JSON: {}",
                    path.display(),
                    message
                )
            }
            ConfigError::Invalid(message) => write!(f, "Invalid configuration: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Loads parser configuration from a settings JSON value.
///
/// Reads the "bru-parser" section, merges it with defaults and validates the
/// result. A section that cannot be deserialized is logged and ignored.
///
/// # Example
///
/// ```
/// use bru_syntax::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "bru-parser": {
///         "textBlockNames": ["body:json", "docs"],
///         "codeBlockNames": []
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert!(config.is_text_block("docs"));
/// assert!(!config.is_code_block("tests"));
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<ParserConfig, ConfigError> {
    let mut config = ParserConfig::default();

    if let Some(section) = settings_json.as_ref().and_then(|s| s.get(SETTINGS_KEY)) {
        match serde_json::from_value::<ParserConfig>(section.clone()) {
            Ok(user_config) => {
                config = config.merge(&user_config);
            }
            Err(e) => {
                log::warn!(
                    "Failed to parse {} settings: {}. Using defaults.",
                    SETTINGS_KEY,
                    e
                );
            }
        }
    }

    config.validate().map_err(ConfigError::Invalid)?;

    Ok(config)
}

/// Loads parser configuration from a settings JSON file.
pub fn load_config_file(path: &Path) -> Result<ParserConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let settings: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    log::debug!("Loaded parser settings from {}", path.display());
    load_config(Some(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_load_config_with_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, ParserConfig::default());
    }

    #[test]
    fn test_load_config_with_user_settings() {
        let settings = json!({
            "bru-parser": {
                "textBlockNames": ["body:json", "notes", "script:custom"],
                "codeBlockNames": ["script:custom"]
            }
        });

        let config = load_config(Some(settings)).unwrap();
        assert!(config.is_text_block("notes"));
        assert!(config.is_code_block("script:custom"));
        assert!(!config.is_code_block("tests"));
    }

    #[test]
    fn test_load_config_invalid_section_falls_back() {
        let settings = json!({
            "bru-parser": {
                "textBlockNames": "not-a-list"
            }
        });

        let config = load_config(Some(settings)).unwrap();
        assert_eq!(config, ParserConfig::default());
    }

    #[test]
    fn test_load_config_validation_error() {
        let settings = json!({
            "bru-parser": {
                "textBlockNames": ["docs"],
                "codeBlockNames": ["tests"]
            }
        });

        let result = load_config(Some(settings));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("code block 'tests' must also be listed"));
    }

    #[test]
    fn test_no_parser_key() {
        let settings = json!({
            "other-extension": {
                "someSetting": true
            }
        });

        let config = load_config(Some(settings)).unwrap();
        assert_eq!(config, ParserConfig::default());
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "bru-parser": {{ "textBlockNames": ["docs"], "codeBlockNames": [] }} }}"#
        )
        .unwrap();

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config.text_block_names, vec!["docs".to_string()]);
        assert!(config.code_block_names.is_empty());
    }

    #[test]
    fn test_load_config_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_file(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_config_file_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = load_config_file(file.path());
        assert!(matches!(result, Err(ConfigError::InvalidJson { .. })));
    }
}

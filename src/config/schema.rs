//! Configuration schema for the block parser.
//!
//! This module defines the parser settings and their validation. Settings only
//! affect how `{`-delimited blocks are classified; the block grammar itself is
//! fixed.

use crate::parser::block_names;
use crate::parser::patterns::BLOCK_NAME_REGEX;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Parser settings.
///
/// Can be configured under the "bru-parser" key of a settings JSON value.
/// Missing settings fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserConfig {
    /// Names of `{` blocks whose content is kept as opaque text.
    ///
    /// Every other `{` block is parsed as a dictionary. Defaults to the body,
    /// script, tests and docs blocks of request files.
    #[serde(default = "default_text_block_names")]
    pub text_block_names: Vec<String>,

    /// Names of text blocks that contain script code.
    ///
    /// Variable references in these blocks are found through the script
    /// syntax tree instead of `{{name}}` interpolation. Every entry must also
    /// be listed in `text_block_names`.
    #[serde(default = "default_code_block_names")]
    pub code_block_names: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            text_block_names: default_text_block_names(),
            code_block_names: default_code_block_names(),
        }
    }
}

impl ParserConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are valid, or `Err` with a descriptive error message.
    pub fn validate(&self) -> Result<(), String> {
        for (setting, names) in [
            ("textBlockNames", &self.text_block_names),
            ("codeBlockNames", &self.code_block_names),
        ] {
            let mut seen = HashSet::new();
            for name in names {
                if !BLOCK_NAME_REGEX.is_match(name) {
                    return Err(format!("{} contains an invalid block name '{}'", setting, name));
                }
                if !seen.insert(name.as_str()) {
                    return Err(format!("{} lists '{}' more than once", setting, name));
                }
            }
        }

        if let Some(name) = self
            .code_block_names
            .iter()
            .find(|name| !self.text_block_names.contains(name))
        {
            return Err(format!(
                "code block '{}' must also be listed in textBlockNames",
                name
            ));
        }

        Ok(())
    }

    /// Merges this configuration with another, using values from `other`.
    ///
    /// This is useful for applying user settings on top of defaults.
    pub fn merge(&self, other: &ParserConfig) -> Self {
        Self {
            text_block_names: other.text_block_names.clone(),
            code_block_names: other.code_block_names.clone(),
        }
    }

    pub fn is_text_block(&self, name: &str) -> bool {
        self.text_block_names.iter().any(|candidate| candidate == name)
    }

    pub fn is_code_block(&self, name: &str) -> bool {
        self.code_block_names.iter().any(|candidate| candidate == name)
    }
}

// Default value functions for serde

fn default_text_block_names() -> Vec<String> {
    block_names::DEFAULT_TEXT_BLOCK_NAMES
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn default_code_block_names() -> Vec<String> {
    block_names::DEFAULT_CODE_BLOCK_NAMES
        .iter()
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert!(config.is_text_block("body:json"));
        assert!(config.is_text_block("docs"));
        assert!(config.is_code_block("tests"));
        assert!(config.is_code_block("script:pre-request"));
        assert!(!config.is_text_block("headers"));
        assert!(!config.is_code_block("body:json"));
    }

    #[test]
    fn test_config_validation_valid() {
        assert!(ParserConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_code_block_not_text_block() {
        let mut config = ParserConfig::default();
        config.code_block_names.push("script:custom".to_string());

        assert_eq!(
            config.validate().unwrap_err(),
            "code block 'script:custom' must also be listed in textBlockNames"
        );
    }

    #[test]
    fn test_config_validation_invalid_name() {
        let mut config = ParserConfig::default();
        config.text_block_names.push("body json".to_string());

        let err = config.validate().unwrap_err();
        assert!(err.contains("invalid block name 'body json'"));
    }

    #[test]
    fn test_config_validation_duplicate_name() {
        let mut config = ParserConfig::default();
        config.text_block_names.push("docs".to_string());

        let err = config.validate().unwrap_err();
        assert!(err.contains("more than once"));
    }

    #[test]
    fn test_merge_config() {
        let base = ParserConfig::default();
        let custom = ParserConfig {
            text_block_names: vec!["notes".to_string()],
            code_block_names: Vec::new(),
        };

        let merged = base.merge(&custom);
        assert_eq!(merged.text_block_names, vec!["notes".to_string()]);
        assert!(merged.code_block_names.is_empty());
    }

    #[test]
    fn test_deserialization_with_defaults() {
        let json = r#"{ "codeBlockNames": ["tests"] }"#;

        let config: ParserConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.code_block_names, vec!["tests".to_string()]);
        assert_eq!(config.text_block_names, default_text_block_names());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ParserConfig::default()).unwrap();
        assert!(json.contains("textBlockNames"));
        assert!(json.contains("codeBlockNames"));
        assert!(json.contains("body:graphql:vars"));
    }
}

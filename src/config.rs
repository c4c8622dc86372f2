//! Generation settings
//!
//! Settings shared by the rules and the naming strategy. Defaults match the
//! conventions of the wider generator; a JSON file can override any subset.

use crate::error::{Error, Result};
use crate::packages::IdentifierPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default schema keyword holding the ignored-fields list
pub const DEFAULT_IGNORE_KEYWORD: &str = "ignoredFields";

/// Settings controlling rule application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Schema keyword whose array value lists fields to ignore
    pub ignore_keyword: String,

    /// Characters that separate words in property names
    pub property_word_delimiters: Vec<char>,

    /// How strictly schema ids are checked before becoming package paths
    pub identifier_policy: IdentifierPolicy,

    /// Maximum schema file size in bytes
    pub max_schema_size: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            ignore_keyword: DEFAULT_IGNORE_KEYWORD.to_string(),
            property_word_delimiters: vec!['-', '_'],
            identifier_policy: IdentifierPolicy::default(),
            max_schema_size: 10 * 1024 * 1024, // 10 MB
        }
    }
}

impl GenerationConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the ignore keyword
    pub fn with_ignore_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.ignore_keyword = keyword.into();
        self
    }

    /// Set the property word delimiters
    pub fn with_property_word_delimiters(mut self, delimiters: impl IntoIterator<Item = char>) -> Self {
        self.property_word_delimiters = delimiters.into_iter().collect();
        self
    }

    /// Set the identifier policy
    pub fn with_identifier_policy(mut self, policy: IdentifierPolicy) -> Self {
        self.identifier_policy = policy;
        self
    }

    /// Set the maximum schema size
    pub fn with_max_schema_size(mut self, size: usize) -> Self {
        self.max_schema_size = size;
        self
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.ignore_keyword.is_empty() {
            return Err(Error::Config("ignoreKeyword must not be empty".to_string()));
        }
        if self.max_schema_size == 0 {
            return Err(Error::Config("maxSchemaSize must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.ignore_keyword, "ignoredFields");
        assert_eq!(config.property_word_delimiters, vec!['-', '_']);
        assert_eq!(config.identifier_policy, IdentifierPolicy::Legacy);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GenerationConfig::new()
            .with_ignore_keyword("x-ignore")
            .with_property_word_delimiters([' '])
            .with_identifier_policy(IdentifierPolicy::Strict);
        assert_eq!(config.ignore_keyword, "x-ignore");
        assert_eq!(config.property_word_delimiters, vec![' ']);
        assert_eq!(config.identifier_policy, IdentifierPolicy::Strict);
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"ignoreKeyword": "skip", "identifierPolicy": "strict"}}"#).unwrap();

        let config = GenerationConfig::from_file(file.path()).unwrap();
        assert_eq!(config.ignore_keyword, "skip");
        assert_eq!(config.identifier_policy, IdentifierPolicy::Strict);
        assert_eq!(config.property_word_delimiters, vec!['-', '_']);
    }

    #[test]
    fn test_from_file_rejects_empty_keyword() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"ignoreKeyword": ""}}"#).unwrap();
        assert!(matches!(
            GenerationConfig::from_file(file.path()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_from_missing_file() {
        let result = GenerationConfig::from_file("/nonexistent/schemagen.json");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}

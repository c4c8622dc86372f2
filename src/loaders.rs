//! Schema loading
//!
//! Loads schema documents named by a locator. Only file-backed locators are
//! read; remote protocols resolve to a URL but fetching them is left to the
//! surrounding generator.

use crate::config::GenerationConfig;
use crate::error::{Error, Result};
use crate::locations::{file_from_url, parse_protocol, parse_url};
use crate::model::GeneratedModel;
use crate::schema::{Schema, SchemaNode};
use std::fs;
use std::path::Path;

/// Loader for schema and model documents
#[derive(Debug, Clone)]
pub struct Loader {
    /// Maximum document size in bytes
    max_size: usize,
}

impl Loader {
    /// Create a new loader with default settings
    pub fn new() -> Self {
        Self::from_config(&GenerationConfig::default())
    }

    /// Create a loader honouring the configured size limit
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            max_size: config.max_schema_size,
        }
    }

    /// Set the maximum document size
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Read a local file, enforcing the size limit
    fn read_file(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Resource(format!("Failed to read file '{}': {}", path.display(), e))
        })?;
        if content.len() > self.max_size {
            return Err(Error::Resource(format!(
                "Document size {} bytes exceeds maximum {} bytes",
                content.len(),
                self.max_size
            )));
        }
        Ok(content)
    }

    /// Load a schema from a locator (path or URL)
    pub fn load_schema(&self, locator: &str) -> Result<Schema> {
        let url = parse_url(locator)?;
        if parse_protocol(locator).is_remote() {
            return Err(Error::Resource(format!(
                "Remote resources are not fetched: {}",
                url
            )));
        }
        if url.scheme() != "file" {
            return Err(Error::Resource(format!(
                "Loading '{}' resources is not supported: {}",
                url.scheme(),
                url
            )));
        }

        let path = file_from_url(&url)?;
        tracing::debug!(path = %path.display(), "loading schema");
        let content = self.read_file(&path)?;
        Ok(Schema::new(Some(url), SchemaNode::from_str(&content)?))
    }

    /// Load a generated model from a JSON file
    pub fn load_model(&self, path: impl AsRef<Path>) -> Result<GeneratedModel> {
        let content = self.read_file(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

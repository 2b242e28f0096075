//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::diff::ParserOptions;
use crate::error::{DiffError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DiffError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DiffError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| DiffError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| DiffError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// - `trace_path`, when set, must not be empty
    pub fn validate(&self) -> Result<()> {
        if self
            .trace_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(DiffError::UserError(
                "config validation failed: trace_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Parser options derived from this config.
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            missing_range_count: self.missing_range_count.as_count(),
        }
    }
}

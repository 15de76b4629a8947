//! Config loading, validation, and serialization.

use super::model::ExecConfig;
use crate::error::{ExecError, Result};
use std::path::Path;

impl ExecConfig {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are kept in `extra`.
    ///
    /// # Returns
    ///
    /// * `Ok(ExecConfig)` - Successfully loaded and validated config
    /// * `Err(ExecError::Config)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ExecError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load(path)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document parses to unit, not to a map of defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ExecConfig = serde_yaml::from_str(yaml)
            .map_err(|e| ExecError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ExecError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `working_directory`, `interpreter`, `shell` must be non-empty
    /// - `default_target_name` must be non-empty and free of NUL bytes
    pub fn validate(&self) -> Result<()> {
        if self.working_directory.as_os_str().is_empty() {
            return Err(ExecError::Config(
                "config validation failed: working_directory must not be empty".to_string(),
            ));
        }

        if self.interpreter.trim().is_empty() {
            return Err(ExecError::Config(
                "config validation failed: interpreter must not be empty".to_string(),
            ));
        }

        if self.shell.trim().is_empty() {
            return Err(ExecError::Config(
                "config validation failed: shell must not be empty".to_string(),
            ));
        }

        if self.default_target_name.trim().is_empty() {
            return Err(ExecError::Config(
                "config validation failed: default_target_name must not be empty".to_string(),
            ));
        }

        if self.default_target_name.contains('\0') {
            return Err(ExecError::Config(
                "config validation failed: default_target_name must not contain NUL bytes"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

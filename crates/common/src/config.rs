use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Settings for the execution device that backs column buffers.
///
/// ```toml
/// memory_limit_bytes = 1048576
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceConfig {
    /// Upper bound on the bytes a single allocation may request.
    pub memory_limit_bytes: Option<usize>,
}

impl DeviceConfig {
    pub fn with_memory_limit(mut self, bytes: usize) -> Self {
        self.memory_limit_bytes = Some(bytes);
        self
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: DeviceConfig =
            toml::from_str(source).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        if self.memory_limit_bytes == Some(0) {
            return Err(Error::invalid_argument("memory_limit_bytes must be positive"));
        }
        Ok(())
    }
}

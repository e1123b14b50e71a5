//! TOML config file (layer 2)
//!
//! ```toml
//! [logs]
//! root = "~/workspace/pim-matmul-benchmarks/scratch"
//! ```

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Parsed config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub logs: LogsSection,
}

/// `[logs]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogsSection {
    /// Log root; a leading `~/` is expanded
    pub root: Option<String>,
}

impl ConfigFile {
    /// Load a config file from a specific path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse config from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

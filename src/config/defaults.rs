//! Built-in defaults (layer 1)

use std::path::{Path, PathBuf};

/// Built-in default configuration values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinDefaults {
    /// Log root relative to the user's home directory
    pub home_relative_root: &'static str,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            home_relative_root: "workspace/pim-matmul-benchmarks/scratch",
        }
    }
}

impl BuiltinDefaults {
    /// Absolute log root under `home`
    pub fn log_root(&self, home: &Path) -> PathBuf {
        home.join(self.home_relative_root)
    }
}

//! Run configuration
//!
//! The log root is resolved from three layers, lowest precedence first:
//! 1. Built-in default (`~/workspace/pim-matmul-benchmarks/scratch`)
//! 2. Optional TOML config file (`[logs] root = "..."`)
//! 3. CLI flag (`--log-root`)

mod defaults;
mod file;

pub use defaults::BuiltinDefaults;
pub use file::{ConfigFile, LogsSection};

use std::path::{Path, PathBuf};

/// Subdirectory of the log root holding compilation logs
pub const COMPILE_LOG_DIR: &str = "compile_logs";

/// Subdirectory of the log root holding runtime logs
pub const RUNTIME_LOG_DIR: &str = "runtime_logs";

/// Suffix every log file carries
pub const LOG_SUFFIX: &str = ".log";

/// Configuration handed to the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory containing `compile_logs/` and `runtime_logs/`
    pub log_root: PathBuf,
}

impl RunConfig {
    pub fn new(log_root: impl Into<PathBuf>) -> Self {
        Self {
            log_root: log_root.into(),
        }
    }

    /// Merge the built-in default, an optional config file and an optional
    /// CLI override.
    pub fn resolve(
        config_path: Option<&Path>,
        cli_log_root: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(root) = cli_log_root {
            return Ok(Self::new(root));
        }

        let home = home_dir();
        if let Some(path) = config_path {
            let file = ConfigFile::load(path)?;
            if let Some(root) = file.logs.root {
                return Ok(Self::new(expand_home(&root, home.as_deref())?));
            }
        }

        let home = home.ok_or(ConfigError::HomeNotSet)?;
        Ok(Self::new(BuiltinDefaults::default().log_root(&home)))
    }

    pub fn compile_log_dir(&self) -> PathBuf {
        self.log_root.join(COMPILE_LOG_DIR)
    }

    pub fn runtime_log_dir(&self) -> PathBuf {
        self.log_root.join(RUNTIME_LOG_DIR)
    }

    /// Compilation log path for a test
    pub fn compile_log(&self, test_name: &str) -> PathBuf {
        self.compile_log_dir().join(format!("{test_name}{LOG_SUFFIX}"))
    }

    /// Runtime log path for a test
    pub fn runtime_log(&self, test_name: &str) -> PathBuf {
        self.runtime_log_dir().join(format!("{test_name}{LOG_SUFFIX}"))
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Expand a leading `~/` against `home`
fn expand_home(raw: &str, home: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if raw == "~" || raw.starts_with("~/") {
        let home = home.ok_or(ConfigError::HomeNotSet)?;
        let rest = raw.trim_start_matches('~').trim_start_matches('/');
        return Ok(if rest.is_empty() {
            home.to_path_buf()
        } else {
            home.join(rest)
        });
    }
    Ok(PathBuf::from(raw))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOME environment variable not set")]
    HomeNotSet,

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_override_wins() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("scan.toml");
        fs::write(&config_path, "[logs]\nroot = \"/from/file\"\n").unwrap();

        let config =
            RunConfig::resolve(Some(&config_path), Some(PathBuf::from("/from/cli"))).unwrap();
        assert_eq!(config.log_root, PathBuf::from("/from/cli"));
    }

    #[test]
    fn test_config_file_root() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("scan.toml");
        fs::write(&config_path, "[logs]\nroot = \"/srv/ci/scratch\"\n").unwrap();

        let config = RunConfig::resolve(Some(&config_path), None).unwrap();
        assert_eq!(config.log_root, PathBuf::from("/srv/ci/scratch"));
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = RunConfig::resolve(Some(&dir.path().join("nope.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_expand_home() {
        let home = Path::new("/home/ci");
        assert_eq!(
            expand_home("~/logs", Some(home)).unwrap(),
            PathBuf::from("/home/ci/logs")
        );
        assert_eq!(expand_home("~", Some(home)).unwrap(), PathBuf::from("/home/ci"));
        assert_eq!(
            expand_home("/abs/logs", None).unwrap(),
            PathBuf::from("/abs/logs")
        );
        assert!(matches!(
            expand_home("~/logs", None),
            Err(ConfigError::HomeNotSet)
        ));
    }

    #[test]
    fn test_log_paths() {
        let config = RunConfig::new("/scratch");
        assert_eq!(
            config.compile_log("matrix-op-unittests"),
            PathBuf::from("/scratch/compile_logs/matrix-op-unittests.log")
        );
        assert_eq!(
            config.runtime_log("matrix-op-unittests"),
            PathBuf::from("/scratch/runtime_logs/matrix-op-unittests.log")
        );
    }
}

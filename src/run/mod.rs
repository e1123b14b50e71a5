//! Run orchestrator
//!
//! Discovers test names from the compilation-log directory and classifies each
//! test in order: compilation first, then the runtime log unless compilation
//! failed outright. A missing compilation log does not block the runtime
//! check. Report text goes to any `Write` sink, so two runs over the same
//! logs produce identical bytes.

mod render;

use std::io::Write;

use walkdir::WalkDir;

use crate::compile::{classify_compilation, CompilationStatus};
use crate::config::{RunConfig, LOG_SUFFIX};
use crate::error::ScanError;
use crate::runtime::classify_test_results;
use crate::summary::{ExitCode, OverallSummary};

/// Drives a full scan of one log root
#[derive(Debug, Clone)]
pub struct Orchestrator {
    config: RunConfig,
}

impl Orchestrator {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Test names found in the compilation-log directory, sorted.
    ///
    /// Returns `Ok(None)` when the directory does not exist.
    pub fn discover_tests(&self) -> Result<Option<Vec<String>>, ScanError> {
        let dir = self.config.compile_log_dir();
        if !dir.is_dir() {
            return Ok(None);
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry?;
            let Some(file_name) = entry.file_name().to_str() else {
                tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 log name");
                continue;
            };
            if let Some(name) = file_name.strip_suffix(LOG_SUFFIX) {
                names.push(name.to_string());
            }
        }
        names.sort();

        tracing::debug!(dir = %dir.display(), count = names.len(), "discovered tests");
        Ok(Some(names))
    }

    /// Scan every test, write the report to `out` and return the exit code
    pub fn run<W: Write>(&self, out: &mut W) -> Result<ExitCode, ScanError> {
        render::banner(out).map_err(ScanError::Report)?;

        let names = match self.discover_tests()? {
            Some(names) => names,
            None => {
                render::missing_compile_dir(out, &self.config.compile_log_dir())
                    .map_err(ScanError::Report)?;
                return Ok(ExitCode::Failure);
            }
        };
        if names.is_empty() {
            render::no_tests_found(out).map_err(ScanError::Report)?;
            return Ok(ExitCode::Failure);
        }

        let mut summary = OverallSummary::new();
        for name in &names {
            let compilation = classify_compilation(&self.config.compile_log(name))?;
            summary.record_compilation(compilation.status);

            let tests = if compilation.status == CompilationStatus::Failed {
                None
            } else {
                let tests = classify_test_results(&self.config.runtime_log(name))?;
                summary.record_tests(tests.status);
                Some(tests)
            };

            render::test_block(out, name, &compilation, tests.as_ref())
                .map_err(ScanError::Report)?;
        }

        render::overall(out, &summary).map_err(ScanError::Report)?;
        tracing::debug!(
            tests = summary.tests_seen(),
            success = summary.is_success(),
            "scan finished"
        );
        Ok(summary.exit_code())
    }
}

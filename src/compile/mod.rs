//! Compilation log classifier
//!
//! Decides whether a test compiled, compiled with warnings, or failed, and
//! keeps the lines that explain a failure.

use std::fmt;
use std::path::Path;

use crate::error::ScanError;
use crate::logfile::{normalize_newlines, read_lossy};
use crate::patterns::{matching_lines, PatternRegistry};

/// Outcome of a compilation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilationStatus {
    /// No compilation log was written
    NoLog,
    /// Compiler or linker errors were found
    Failed,
    /// Warnings but no errors
    SuccessWithWarnings,
    /// Neither errors nor warnings
    Success,
}

impl CompilationStatus {
    /// Name used in the report
    pub fn as_str(&self) -> &'static str {
        match self {
            CompilationStatus::NoLog => "NO_LOG",
            CompilationStatus::Failed => "FAILED",
            CompilationStatus::SuccessWithWarnings => "SUCCESS_WITH_WARNINGS",
            CompilationStatus::Success => "SUCCESS",
        }
    }
}

impl fmt::Display for CompilationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of one compilation log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationResult {
    pub status: CompilationStatus,
    /// Trimmed error and linker-error lines, in log order
    pub offending_lines: Vec<String>,
}

impl CompilationResult {
    fn no_log() -> Self {
        Self {
            status: CompilationStatus::NoLog,
            offending_lines: vec![],
        }
    }
}

/// Classify the compilation log at `path`
pub fn classify_compilation(path: &Path) -> Result<CompilationResult, ScanError> {
    let result = match read_lossy(path)? {
        Some(content) => classify_compilation_text(PatternRegistry::global(), &content),
        None => CompilationResult::no_log(),
    };
    tracing::debug!(path = %path.display(), status = %result.status, "classified compilation log");
    Ok(result)
}

/// Classify compilation log text already in memory
pub fn classify_compilation_text(patterns: &PatternRegistry, content: &str) -> CompilationResult {
    let content = normalize_newlines(content);
    let content = content.as_ref();
    let errors = patterns.count_errors(content);
    let warnings = patterns.count_warnings(content);
    let offending_lines = matching_lines(content, |line| patterns.is_error_line(line));

    tracing::trace!(errors, warnings, "compilation markers");

    let status = if errors > 0 {
        CompilationStatus::Failed
    } else if warnings > 0 {
        CompilationStatus::SuccessWithWarnings
    } else {
        CompilationStatus::Success
    };

    CompilationResult {
        status,
        offending_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn classify(text: &str) -> CompilationResult {
        classify_compilation_text(&PatternRegistry::new(), text)
    }

    #[test]
    fn test_clean_log_is_success() {
        let result = classify("gcc -O2 -c matrix.c\nbuilt target matrix\n");
        assert_eq!(result.status, CompilationStatus::Success);
        assert!(result.offending_lines.is_empty());
    }

    #[test]
    fn test_empty_log_is_success() {
        assert_eq!(classify("").status, CompilationStatus::Success);
    }

    #[test]
    fn test_warning_only() {
        let result = classify("matrix.c:10:5: warning: unused variable 'x'\n");
        assert_eq!(result.status, CompilationStatus::SuccessWithWarnings);
        assert!(result.offending_lines.is_empty());
    }

    #[test]
    fn test_error_lines_in_order_with_duplicates() {
        let text = "\
matrix.c:1:1: ERROR: first
  note: something
   matrix.c:1:1: ERROR: first
matrix.c:9:2: warning: later
matrix.c:12:3: Error: second
";
        let result = classify(text);
        assert_eq!(result.status, CompilationStatus::Failed);
        assert_eq!(
            result.offending_lines,
            vec![
                "matrix.c:1:1: ERROR: first",
                "matrix.c:1:1: ERROR: first",
                "matrix.c:12:3: Error: second",
            ]
        );
    }

    #[test]
    fn test_linker_error_without_error_prefix_fails() {
        let result = classify("main.o: In function `main':\nmain.c:(.text+0x1): undefined reference to `dpu_alloc'\n");
        assert_eq!(result.status, CompilationStatus::Failed);
        assert_eq!(
            result.offending_lines,
            vec!["main.c:(.text+0x1): undefined reference to `dpu_alloc'"]
        );
    }

    #[test]
    fn test_error_wins_over_warning() {
        let result = classify("warning: a\nerror: b\nwarning: c\n");
        assert_eq!(result.status, CompilationStatus::Failed);
        assert_eq!(result.offending_lines, vec!["error: b"]);
    }

    #[test]
    fn test_carriage_return_ends_an_error_line() {
        let result = classify("[ 40%] building\rmatrix.c:2:1: error: bad\r[ 80%] linking\r\ndone\r");
        assert_eq!(result.status, CompilationStatus::Failed);
        assert_eq!(result.offending_lines, vec!["matrix.c:2:1: error: bad"]);
    }

    #[test]
    fn test_missing_file_is_no_log() {
        let dir = TempDir::new().unwrap();
        let result = classify_compilation(&dir.path().join("missing.log")).unwrap();
        assert_eq!(result.status, CompilationStatus::NoLog);
        assert!(result.offending_lines.is_empty());
    }

    #[test]
    fn test_reads_file_with_invalid_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.log");
        fs::write(&path, b"\x00\xff\xfe junk\nld: symbol(s) not found\n").unwrap();

        let result = classify_compilation(&path).unwrap();
        assert_eq!(result.status, CompilationStatus::Failed);
        assert_eq!(result.offending_lines, vec!["ld: symbol(s) not found"]);
    }

    #[test]
    fn test_status_names() {
        assert_eq!(CompilationStatus::SuccessWithWarnings.to_string(), "SUCCESS_WITH_WARNINGS");
        assert_eq!(CompilationStatus::NoLog.to_string(), "NO_LOG");
    }
}

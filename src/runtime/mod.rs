//! Runtime log classifier
//!
//! Counts `[PASS]`/`[FAIL]` markers and reads the aggregate summary line to
//! decide whether a test binary passed.

use std::fmt;
use std::path::Path;

use crate::error::ScanError;
use crate::logfile::{normalize_newlines, read_lossy};
use crate::patterns::{matching_lines, PatternRegistry};

/// Explanation recorded when a runtime log has no content
pub const EMPTY_LOG_MESSAGE: &str = "Runtime log is empty - test may have crashed or not run";

/// Outcome of running one test binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    /// No runtime log was written
    NoLog,
    /// The runtime log holds only whitespace
    EmptyLog,
    /// Every test passed
    AllPassed,
    /// At least one test failed
    SomeFailed,
    /// The log has no recognizable results
    NoTests,
}

impl TestStatus {
    /// Name used in the report
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::NoLog => "NO_LOG",
            TestStatus::EmptyLog => "EMPTY_LOG",
            TestStatus::AllPassed => "ALL_PASSED",
            TestStatus::SomeFailed => "SOME_FAILED",
            TestStatus::NoTests => "NO_TESTS",
        }
    }

    /// Whether this status makes the overall run fail
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            TestStatus::NoLog | TestStatus::EmptyLog | TestStatus::SomeFailed
        )
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of one runtime log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub status: TestStatus,
    /// Occurrences of `[PASS]`
    pub pass_count: usize,
    /// Occurrences of `[FAIL]`
    pub fail_count: usize,
    /// Trimmed `[FAIL]` lines, in log order
    pub failure_lines: Vec<String>,
}

impl TestResult {
    fn no_log() -> Self {
        Self {
            status: TestStatus::NoLog,
            pass_count: 0,
            fail_count: 0,
            failure_lines: vec![],
        }
    }

    fn empty_log() -> Self {
        Self {
            status: TestStatus::EmptyLog,
            pass_count: 0,
            fail_count: 0,
            failure_lines: vec![EMPTY_LOG_MESSAGE.to_string()],
        }
    }
}

/// Classify the runtime log at `path`
pub fn classify_test_results(path: &Path) -> Result<TestResult, ScanError> {
    let result = match read_lossy(path)? {
        Some(content) => classify_test_text(PatternRegistry::global(), &content),
        None => TestResult::no_log(),
    };
    tracing::debug!(
        path = %path.display(),
        status = %result.status,
        passed = result.pass_count,
        failed = result.fail_count,
        "classified runtime log"
    );
    Ok(result)
}

/// Classify runtime log text already in memory
pub fn classify_test_text(patterns: &PatternRegistry, content: &str) -> TestResult {
    let content = normalize_newlines(content);
    let content = content.as_ref();
    if content.trim().is_empty() {
        return TestResult::empty_log();
    }

    let pass_count = patterns.count_passes(content);
    let fail_count = patterns.count_failures(content);
    let failure_lines = matching_lines(content, |line| patterns.is_failure_line(line));

    // The aggregate summary line outranks individual markers.
    let status = if patterns.has_all_passed_summary(content) {
        TestStatus::AllPassed
    } else if patterns.has_tests_failed_summary(content) || fail_count > 0 {
        TestStatus::SomeFailed
    } else if pass_count > 0 {
        TestStatus::AllPassed
    } else {
        TestStatus::NoTests
    };

    TestResult {
        status,
        pass_count,
        fail_count,
        failure_lines,
    }
}

//! Aggregated success flag and stable exit codes

use crate::compile::CompilationStatus;
use crate::runtime::TestStatus;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every test compiled and passed
    Success = 0,
    /// A test failed, or there was nothing to scan
    Failure = 1,
}

impl ExitCode {
    /// Get the integer value of the exit code
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }
}

/// Running verdict, updated once per test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverallSummary {
    success: bool,
    tests_seen: usize,
}

impl OverallSummary {
    pub fn new() -> Self {
        Self {
            success: true,
            tests_seen: 0,
        }
    }

    /// Record a compilation outcome. Only `FAILED` counts against the run.
    pub fn record_compilation(&mut self, status: CompilationStatus) {
        self.tests_seen += 1;
        if status == CompilationStatus::Failed {
            self.success = false;
        }
    }

    /// Record a runtime outcome for a test that was already counted
    pub fn record_tests(&mut self, status: TestStatus) {
        if status.is_failure() {
            self.success = false;
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Number of tests recorded so far
    pub fn tests_seen(&self) -> usize {
        self.tests_seen
    }

    /// Human-readable verdict line
    pub fn message(&self) -> &'static str {
        if self.success {
            "All tests compiled and passed successfully!"
        } else {
            "Some tests failed to compile or had test failures."
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::Success
        } else {
            ExitCode::Failure
        }
    }
}

impl Default for OverallSummary {
    fn default() -> Self {
        Self::new()
    }
}

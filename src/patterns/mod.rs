//! Pattern registry for compilation and runtime logs
//!
//! Every recognizer the classifiers rely on lives here, so a change in log
//! format only touches this module. All patterns are case-insensitive and
//! `.` never crosses a line boundary.

use std::sync::OnceLock;

use regex_lite::Regex;

/// `error:` anywhere in a line
const ERROR_PATTERN: &str = r"(?i)error:";
/// `warning:` anywhere in a line
const WARNING_PATTERN: &str = r"(?i)warning:";
/// Linker failures that do not carry an `error:` prefix
const LINKER_ERROR_PATTERN: &str = r"(?i)undefined reference|ld: symbol|cannot find";
/// Per-test pass marker
const PASS_PATTERN: &str = r"(?i)\[PASS\]";
/// Per-test fail marker
const FAIL_PATTERN: &str = r"(?i)\[FAIL\]";
/// Aggregate failure line, e.g. "3 of 10 tests failed"
const TESTS_FAILED_PATTERN: &str = r"(?i)(\d+) .* tests? failed";
/// Aggregate success line, e.g. "All 12 tests passed"
const ALL_PASSED_PATTERN: &str = r"(?i)All .* tests passed";

static REGISTRY: OnceLock<PatternRegistry> = OnceLock::new();

/// Compiled recognizers shared by both classifiers
#[derive(Debug)]
pub struct PatternRegistry {
    error_marker: Regex,
    warning_marker: Regex,
    linker_error_marker: Regex,
    pass_marker: Regex,
    fail_marker: Regex,
    tests_failed_summary: Regex,
    all_passed_summary: Regex,
}

impl PatternRegistry {
    /// Compile the fixed pattern set
    pub fn new() -> Self {
        Self {
            error_marker: compile(ERROR_PATTERN),
            warning_marker: compile(WARNING_PATTERN),
            linker_error_marker: compile(LINKER_ERROR_PATTERN),
            pass_marker: compile(PASS_PATTERN),
            fail_marker: compile(FAIL_PATTERN),
            tests_failed_summary: compile(TESTS_FAILED_PATTERN),
            all_passed_summary: compile(ALL_PASSED_PATTERN),
        }
    }

    /// Process-wide registry, compiled on first use
    pub fn global() -> &'static PatternRegistry {
        REGISTRY.get_or_init(PatternRegistry::new)
    }

    /// Occurrences of compiler or linker errors in `text`
    pub fn count_errors(&self, text: &str) -> usize {
        self.error_marker.find_iter(text).count() + self.linker_error_marker.find_iter(text).count()
    }

    /// Occurrences of compiler warnings in `text`
    pub fn count_warnings(&self, text: &str) -> usize {
        self.warning_marker.find_iter(text).count()
    }

    /// Occurrences of the `[PASS]` marker in `text`
    pub fn count_passes(&self, text: &str) -> usize {
        self.pass_marker.find_iter(text).count()
    }

    /// Occurrences of the `[FAIL]` marker in `text`
    pub fn count_failures(&self, text: &str) -> usize {
        self.fail_marker.find_iter(text).count()
    }

    /// Whether a single line reports a compiler or linker error
    pub fn is_error_line(&self, line: &str) -> bool {
        self.error_marker.is_match(line) || self.linker_error_marker.is_match(line)
    }

    /// Whether a single line carries the `[FAIL]` marker
    pub fn is_failure_line(&self, line: &str) -> bool {
        self.fail_marker.is_match(line)
    }

    /// Whether `text` contains an "All ... tests passed" line
    pub fn has_all_passed_summary(&self, text: &str) -> bool {
        self.all_passed_summary.is_match(text)
    }

    /// Whether `text` contains an "<n> ... test(s) failed" line
    pub fn has_tests_failed_summary(&self, text: &str) -> bool {
        self.tests_failed_summary.is_match(text)
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// The patterns are compile-time literals covered by the tests below.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in log pattern must compile")
}

/// Trimmed copies of the lines in `text` accepted by `keep`, in order
pub fn matching_lines<F>(text: &str, keep: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    text.split('\n')
        .filter(|line| keep(line))
        .map(|line| line.trim().to_string())
        .collect()
}

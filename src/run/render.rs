//! Plain-text report rendering

use std::io::{self, Write};
use std::path::Path;

use crate::compile::{CompilationResult, CompilationStatus};
use crate::runtime::{TestResult, TestStatus};
use crate::summary::OverallSummary;

/// Lines shown per excerpt before collapsing the rest into a count
pub const EXCERPT_LIMIT: usize = 5;

pub fn banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "==== UNITTEST COMPILATION AND TEST RESULTS ====")?;
    writeln!(out)
}

pub fn missing_compile_dir<W: Write>(out: &mut W, dir: &Path) -> io::Result<()> {
    writeln!(out, "Compile log directory not found: {}", dir.display())
}

pub fn no_tests_found<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "No test logs found.")
}

/// One test's block. `tests` is `None` when compilation failed.
pub fn test_block<W: Write>(
    out: &mut W,
    name: &str,
    compilation: &CompilationResult,
    tests: Option<&TestResult>,
) -> io::Result<()> {
    writeln!(out, "=== {} ===", name)?;
    writeln!(out, "Compilation: {}", compilation.status)?;

    match compilation.status {
        CompilationStatus::Failed => {
            writeln!(out, "Compilation errors:")?;
            excerpt(out, &compilation.offending_lines, "errors")?;
            writeln!(out, "Skipping runtime check due to compilation failure.")?;
        }
        CompilationStatus::SuccessWithWarnings => {
            writeln!(out, "Compilation succeeded with warnings.")?;
        }
        CompilationStatus::Success | CompilationStatus::NoLog => {}
    }

    if let Some(tests) = tests {
        writeln!(
            out,
            "Tests: {} ({} PASS, {} FAIL)",
            tests.status, tests.pass_count, tests.fail_count
        )?;
        match tests.status {
            TestStatus::SomeFailed => {
                writeln!(out, "Test failures:")?;
                excerpt(out, &tests.failure_lines, "failures")?;
            }
            TestStatus::NoLog => {
                writeln!(out, "No runtime log found - test may not have run.")?;
            }
            TestStatus::EmptyLog => {
                writeln!(out, "Runtime log is empty - test may have crashed or failed to run.")?;
            }
            TestStatus::NoTests => {
                writeln!(out, "No test results found in runtime log.")?;
            }
            TestStatus::AllPassed => {}
        }
    }

    writeln!(out)
}

pub fn overall<W: Write>(out: &mut W, summary: &OverallSummary) -> io::Result<()> {
    writeln!(out, "==== OVERALL SUMMARY ====")?;
    writeln!(out, "{}", summary.message())
}

fn excerpt<W: Write>(out: &mut W, lines: &[String], noun: &str) -> io::Result<()> {
    for line in lines.iter().take(EXCERPT_LIMIT) {
        writeln!(out, "  {}", line)?;
    }
    if lines.len() > EXCERPT_LIMIT {
        writeln!(out, "  ... and {} more {}", lines.len() - EXCERPT_LIMIT, noun)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(compilation: &CompilationResult, tests: Option<&TestResult>) -> String {
        let mut out = Vec::new();
        test_block(&mut out, "matrix", compilation, tests).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_failed_compilation_block() {
        let compilation = CompilationResult {
            status: CompilationStatus::Failed,
            offending_lines: (1..=7).map(|i| format!("m.c:{}: error: e{}", i, i)).collect(),
        };

        let text = render(&compilation, None);
        assert_eq!(
            text,
            "\
=== matrix ===
Compilation: FAILED
Compilation errors:
  m.c:1: error: e1
  m.c:2: error: e2
  m.c:3: error: e3
  m.c:4: error: e4
  m.c:5: error: e5
  ... and 2 more errors
Skipping runtime check due to compilation failure.

"
        );
    }

    #[test]
    fn test_exactly_five_failures_has_no_overflow_line() {
        let compilation = CompilationResult {
            status: CompilationStatus::Success,
            offending_lines: vec![],
        };
        let tests = TestResult {
            status: TestStatus::SomeFailed,
            pass_count: 0,
            fail_count: 5,
            failure_lines: (0..5).map(|i| format!("[FAIL] t{}", i)).collect(),
        };

        let text = render(&compilation, Some(&tests));
        assert!(text.contains("Tests: SOME_FAILED (0 PASS, 5 FAIL)\nTest failures:\n"));
        assert!(text.contains("  [FAIL] t4\n"));
        assert!(!text.contains("more failures"));
    }

    #[test]
    fn test_failure_overflow_line() {
        let compilation = CompilationResult {
            status: CompilationStatus::NoLog,
            offending_lines: vec![],
        };
        let tests = TestResult {
            status: TestStatus::SomeFailed,
            pass_count: 1,
            fail_count: 6,
            failure_lines: (0..6).map(|i| format!("[FAIL] t{}", i)).collect(),
        };

        let text = render(&compilation, Some(&tests));
        assert!(text.starts_with("=== matrix ===\nCompilation: NO_LOG\nTests: SOME_FAILED"));
        assert!(text.contains("  ... and 1 more failures\n"));
        assert!(!text.contains("[FAIL] t5"));
    }

    #[test]
    fn test_empty_log_block() {
        let compilation = CompilationResult {
            status: CompilationStatus::Success,
            offending_lines: vec![],
        };
        let tests = TestResult {
            status: TestStatus::EmptyLog,
            pass_count: 0,
            fail_count: 0,
            failure_lines: vec![crate::runtime::EMPTY_LOG_MESSAGE.to_string()],
        };

        assert_eq!(
            render(&compilation, Some(&tests)),
            "\
=== matrix ===
Compilation: SUCCESS
Tests: EMPTY_LOG (0 PASS, 0 FAIL)
Runtime log is empty - test may have crashed or failed to run.

"
        );
    }
}

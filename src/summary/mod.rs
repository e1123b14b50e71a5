//! Overall verdict across every scanned test
//!
//! Tracks whether any test failed and maps the verdict to a process exit code.

mod overall;

pub use overall::{ExitCode, OverallSummary};

//! Unittest log scanner
//!
//! Reads the per-test compilation and runtime logs a build pipeline leaves
//! under `<root>/compile_logs` and `<root>/runtime_logs`, classifies each
//! test, and renders a plain-text report with an overall exit code.

pub mod compile;
pub mod config;
pub mod error;
pub mod logfile;
pub mod patterns;
pub mod run;
pub mod runtime;
pub mod summary;

pub use compile::{classify_compilation, CompilationResult, CompilationStatus};
pub use config::{ConfigError, RunConfig};
pub use error::ScanError;
pub use patterns::PatternRegistry;
pub use run::Orchestrator;
pub use runtime::{classify_test_results, TestResult, TestStatus};
pub use summary::{ExitCode, OverallSummary};

//! Unittest log scanner CLI
//!
//! Entry point for the `parse-unittest-logs` command-line tool.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use unittest_log_scan::{ExitCode, Orchestrator, RunConfig, ScanError};

#[derive(Parser)]
#[command(name = "parse-unittest-logs")]
#[command(about = "Check unittest compilation status and test results", version)]
struct Cli {
    /// Log root containing compile_logs/ and runtime_logs/
    /// (default: ~/workspace/pim-matmul-benchmarks/scratch)
    #[arg(long)]
    log_root: Option<PathBuf>,

    /// Path to a TOML config file with a [logs] root entry
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match scan(cli) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn scan(cli: Cli) -> Result<ExitCode, ScanError> {
    let config = RunConfig::resolve(cli.config.as_deref(), cli.log_root)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = Orchestrator::new(config).run(&mut out)?;
    out.flush().map_err(ScanError::Report)?;
    Ok(code)
}

/// Debug output on stderr, enabled with `RUST_LOG=unittest_log_scan=debug`
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

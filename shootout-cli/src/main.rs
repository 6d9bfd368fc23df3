// SPDX-License-Identifier: Apache-2.0

//! Shootout CLI
//!
//! Command-line driver: `shootout <file1> [file2 ...]`. Each argument is a
//! JSON document; every file gets one "loaded" line and three result lines
//! on stderr, in fixed contender order. Exits non-zero if any file fails
//! to open.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use shootout_core::{run_shootout, Reporter};

/// Parse and traversal latency shootout for Rust JSON parsers
#[derive(Parser)]
#[command(name = "shootout")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON documents to benchmark, processed in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    let stderr = io::stderr();
    let mut reporter = Reporter::new(stderr.lock());

    match run_shootout(&cli.files, &mut reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "shootout aborted");
            ExitCode::FAILURE
        }
    }
}

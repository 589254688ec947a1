//! `geolod-conformance` validates a geo-lod output tree.
//!
//! Every `.ttl` and `.nt` file is parsed back; vocabulary modules, dataset
//! graphs, collections and the combined graph are then checked for
//! identifier discipline and referential completeness.
//!
//! **Usage:**
//! ```text
//! geolod-conformance [--output <path>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use geolod_conformance::{run_all, OutputPaths, Severity};

/// Run the geo-lod conformance suite.
#[derive(Parser)]
#[command(
    name = "geolod-conformance",
    about = "Validate a geo-lod output tree"
)]
struct Args {
    /// Output root written by `geolod-build`.
    #[arg(long, default_value = "output")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("geolod=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = run_all(&OutputPaths::new(args.output))?;

    println!("geo-lod Conformance Report");
    println!("==========================");
    println!();

    let mut passed = 0usize;
    let mut failed = 0usize;
    let mut warned = 0usize;

    for result in &report.results {
        match result.severity {
            Severity::Pass => passed += 1,
            Severity::Warning => warned += 1,
            Severity::Failure => failed += 1,
        }
        println!("[{}] {}: {}", result.severity, result.validator, result.message);
        for detail in &result.details {
            println!("       {detail}");
        }
    }

    println!();
    println!("Summary: {passed} passed, {warned} warnings, {failed} failed");

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}

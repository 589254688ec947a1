//! `geolod-build` runs the geo-lod pipeline described by a configuration
//! file.
//!
//! **Outputs** (under the configured output root):
//! - `ontology/` static vocabulary modules and the class taxonomy
//! - `<group>/plots/` plot-ready series
//! - `<group>/rdf/<slug>.ttl` one data graph per dataset
//! - `collections/` and `combined/` merged graphs
//! - `report/report.json` and `report/report.txt`
//!
//! **Usage:**
//! ```text
//! geolod-build [--config <file>] [--out <path>] [--no-rdf] [--no-plots] [--clean] [--only <slug>...]
//! ```
//!
//! Exits non-zero on a fatal error or when every dataset failed.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use geolod_graph::ids::Slug;
use geolod_pipeline::{run, PipelineConfig, RunOptions};

/// Build the geo-lod vocabulary, data graphs and plot series.
#[derive(Parser)]
#[command(name = "geolod-build", about = "Build geo-lod Linked Data graphs")]
struct Args {
    /// Pipeline configuration file.
    #[arg(long, default_value = "geolod.toml")]
    config: PathBuf,

    /// Output root; overrides the configuration.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Skip the data graphs; write vocabulary and plot series only.
    #[arg(long)]
    no_rdf: bool,

    /// Skip the plot series.
    #[arg(long)]
    no_plots: bool,

    /// Remove generated files from the output root first.
    #[arg(long)]
    clean: bool,

    /// Build only these datasets (by slug).
    #[arg(long, num_args = 1..)]
    only: Vec<String>,

    /// More log output (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "geolod=info",
        1 => "geolod=debug",
        _ => "geolod=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = PipelineConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;
    if let Some(out) = args.out {
        config.output = out;
    }
    if !args.only.is_empty() {
        let slugs = args
            .only
            .into_iter()
            .map(Slug::new)
            .collect::<Result<Vec<_>, _>>()
            .context("Invalid --only slug")?;
        config.retain_datasets(&slugs)?;
    }

    let options = RunOptions {
        no_rdf: args.no_rdf,
        no_plots: args.no_plots,
        clean: args.clean,
        generated: None,
    };
    let report = run(&config, &options).context("Pipeline run failed")?;

    println!(
        "geo-lod build: {} datasets, {} failed, {} observations (graphs {})",
        report.datasets.len(),
        report.failed(),
        report.observations(),
        report.capability
    );
    for d in &report.datasets {
        match (&d.graph, &d.error) {
            (_, Some(e)) => println!("  FAILED:  {} ({e})", d.slug),
            (Some(graph), None) => println!("  Written: {}", graph.display()),
            (None, None) => println!("  Skipped: {} (no graph)", d.slug),
        }
    }
    for c in &report.collections {
        println!("  Written: {}", c.file.display());
    }
    if let Some(c) = &report.combined {
        println!("  Written: {}", c.turtle.display());
        println!("  Written: {}", c.ntriples.display());
    }
    for e in &report.errors {
        eprintln!("error: {e}");
    }

    if report.all_failed() {
        eprintln!("Build FAILED: no dataset could be built.");
        process::exit(1);
    }
    Ok(())
}

//! `geolod-vocab` writes the static geo-lod vocabulary without building any
//! data graphs.
//!
//! **Outputs:**
//! - `<out>/<module>.ttl`, `.nt` and `.jsonld` for the core vocabulary and
//!   each domain extension
//! - `<out>/geo_lod_taxonomy.mermaid` class taxonomy
//!
//! **Usage:**
//! ```text
//! geolod-vocab [--out <path>] [--rolling-window <n>] [--sg-window <n>] [--sg-polyorder <n>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use geolod_ontology::{Ontology, SmoothingParams};
use geolod_pipeline::{write_vocabulary, VocabularyFormat};

/// Write the geo-lod vocabulary modules.
#[derive(Parser)]
#[command(name = "geolod-vocab", about = "Write the geo-lod vocabulary")]
struct Args {
    /// Output directory for the vocabulary files.
    #[arg(long, default_value = "output/ontology")]
    out: PathBuf,

    /// Rolling-median window declared on the smoothing individual.
    #[arg(long, default_value_t = SmoothingParams::default().rolling_window)]
    rolling_window: usize,

    /// Savitzky-Golay window declared on the smoothing individual.
    #[arg(long, default_value_t = SmoothingParams::default().sg_window)]
    sg_window: usize,

    /// Savitzky-Golay polynomial order declared on the smoothing individual.
    #[arg(long, default_value_t = SmoothingParams::default().sg_polyorder)]
    sg_polyorder: usize,

    /// Skip the Mermaid taxonomy.
    #[arg(long)]
    no_taxonomy: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("geolod=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let out = &args.out;
    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let params = SmoothingParams {
        rolling_window: args.rolling_window,
        sg_window: args.sg_window,
        sg_polyorder: args.sg_polyorder,
    };
    let ontology = Ontology::new(&params);

    println!(
        "geo-lod vocabulary: {} modules, {} classes, {} properties, {} individuals",
        ontology.modules.len(),
        ontology.class_count(),
        ontology.property_count(),
        ontology.individual_count()
    );

    let formats = [
        VocabularyFormat::Turtle,
        VocabularyFormat::NTriples,
        VocabularyFormat::JsonLd,
    ];
    let written = write_vocabulary(out, &ontology, &formats, !args.no_taxonomy)
        .context("Failed to write vocabulary")?;
    for path in &written {
        println!("  Written: {}", path.display());
    }
    Ok(())
}

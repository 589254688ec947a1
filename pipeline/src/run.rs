//! One pipeline run.
//!
//! The run is a single linear pass: vocabularies, then every dataset in
//! configuration order, then collections and the combined graph, then the
//! report. A dataset that fails is recorded and skipped; only fatal errors
//! (see [`PipelineError::is_fatal`]) stop the run.

use std::collections::BTreeSet;

use chrono::{NaiveDate, Utc};
use tracing::{error, info, info_span, warn};

use geolod_graph::assembler::{Assembler, Series};
use geolod_graph::serializer::{to_ntriples, to_turtle};
use geolod_graph::series::{pair, PairedSeries, SmoothingFailure};
use geolod_graph::smoothing::Smoother;
use geolod_graph::{merge, Graph};
use geolod_ontology::{Ontology, SmoothingSpec};

use crate::capability::GraphCapability;
use crate::config::{DatasetConfig, PipelineConfig};
use crate::error::PipelineError;
use crate::input;
use crate::layout::{write_file, OutputLayout};
use crate::plots;
use crate::report::{
    CollectionReport, CombinedReport, DatasetReport, DatasetStatus, RunReport, SeriesReport,
};
use crate::vocabulary::{write_vocabulary, VocabularyFormat};

/// Per-run switches, usually from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Skip data graphs.
    pub no_rdf: bool,
    /// Skip plot series.
    pub no_plots: bool,
    /// Empty the output directories first.
    pub clean: bool,
    /// Generation date; today (UTC) when unset.
    pub generated: Option<NaiveDate>,
}

/// What one dataset produced.
struct Built {
    report: DatasetReport,
    graph: Option<Graph>,
}

/// Shared, read-only state of a run.
struct Context<'a> {
    config: &'a PipelineConfig,
    layout: &'a OutputLayout,
    smoothers: Vec<Box<dyn Smoother>>,
    specs: Vec<SmoothingSpec>,
    plots: bool,
}

/// Runs the pipeline.
///
/// # Errors
///
/// Returns a fatal [`PipelineError`]: an identifier collision, a
/// vocabulary or report that cannot be written, or an output root that
/// cannot be cleaned.
pub fn run(config: &PipelineConfig, options: &RunOptions) -> Result<RunReport, PipelineError> {
    let layout = OutputLayout::new(config.output_root());
    if options.clean {
        let removed = layout
            .clean(config.datasets.iter().map(|d| d.group.as_str()))
            .map_err(|source| PipelineError::Write {
                path: layout.root().to_path_buf(),
                source,
            })?;
        info!(removed, "output cleaned");
    }

    let capability = GraphCapability::detect(config.graph, options.no_rdf);
    if !capability.is_available() {
        warn!(%capability, "data graphs will not be built");
    }
    let generated = options
        .generated
        .unwrap_or_else(|| Utc::now().date_naive());

    let ontology = Ontology::new(&config.smoothing.params);
    let vocabulary = write_vocabulary(
        &layout.ontology_dir(),
        &ontology,
        &[VocabularyFormat::Turtle],
        true,
    )?;

    let smoothers = config.smoothing.smoothers();
    let specs = smoothers.iter().map(|s| s.spec()).collect();
    let ctx = Context {
        config,
        layout: &layout,
        smoothers,
        specs,
        plots: config.plots && !options.no_plots,
    };
    let mut assembler = capability
        .is_available()
        .then(|| Assembler::new(config.smoothing).with_generation_date(generated));

    let mut datasets = Vec::with_capacity(config.datasets.len());
    let mut graphs = Vec::new();
    for d in &config.datasets {
        let _span = info_span!("dataset", slug = %d.metadata.slug).entered();
        match build_dataset(&ctx, d, assembler.as_mut()) {
            Ok(built) => {
                if let Some(g) = built.graph {
                    graphs.push((d.metadata.slug.clone(), g));
                }
                datasets.push(built.report);
            }
            Err(e) if e.is_fatal() => {
                error!(error = %e, "aborting run");
                return Err(e);
            }
            Err(e) => {
                warn!(error = %e, "dataset failed");
                datasets.push(DatasetReport {
                    slug: d.metadata.slug.to_string(),
                    group: d.group.clone(),
                    family: d.metadata.family.to_string(),
                    status: DatasetStatus::Failed,
                    error: Some(e.to_string()),
                    series: Vec::new(),
                    graph: None,
                    triples: 0,
                });
            }
        }
    }

    let mut errors = Vec::new();
    let mut collections = Vec::new();
    let mut combined = None;
    if !graphs.is_empty() {
        let mut all = Graph::new();
        for (_, g) in &graphs {
            all.merge(g);
        }
        for c in &config.collections {
            let members = graphs
                .iter()
                .filter(|(slug, _)| c.includes(slug))
                .map(|(_, g)| g);
            let merged = merge(members, &c.description)?;
            let file = layout.collection(&c.description.id);
            let text = to_turtle(&merged.collection, &c.description.label);
            match write_file(&file, text) {
                Ok(()) => collections.push(CollectionReport {
                    id: c.description.id.clone(),
                    members: merged.members.len(),
                    triples: merged.collection.len(),
                    file,
                }),
                Err(e) => {
                    warn!(file = %file.display(), error = %e, "collection not written");
                    errors.push(format!("{}: {e}", file.display()));
                }
            }
            all.merge(&merged.collection);
        }

        let turtle = layout.combined_turtle();
        let ntriples = layout.combined_ntriples();
        let written = write_file(&turtle, to_turtle(&all, "geo-lod combined graph"))
            .map_err(|e| (turtle.clone(), e))
            .and_then(|()| write_file(&ntriples, to_ntriples(&all)).map_err(|e| (ntriples.clone(), e)));
        match written {
            Ok(()) => {
                info!(datasets = graphs.len(), triples = all.len(), "combined graph written");
                combined = Some(CombinedReport {
                    datasets: graphs.len(),
                    triples: all.len(),
                    turtle,
                    ntriples,
                });
            }
            Err((file, e)) => {
                warn!(file = %file.display(), error = %e, "combined graph not written");
                errors.push(format!("{}: {e}", file.display()));
            }
        }
    }

    let report = RunReport {
        generated: generated.to_string(),
        output: layout.root().to_path_buf(),
        capability,
        smoothing: config.smoothing.params,
        vocabulary,
        datasets,
        collections,
        combined,
        errors,
    };
    report.write(&layout)?;
    info!(
        datasets = report.datasets.len(),
        failed = report.failed(),
        observations = report.observations(),
        "run complete"
    );
    Ok(report)
}

fn build_dataset(
    ctx: &Context<'_>,
    d: &DatasetConfig,
    assembler: Option<&mut Assembler>,
) -> Result<Built, PipelineError> {
    let meta = &d.metadata;
    let mut series = Vec::with_capacity(d.series.len());
    let mut reports = Vec::with_capacity(d.series.len());

    for s in &d.series {
        let m = s.info.measurement;
        let path = ctx.config.resolve(&s.input.path);
        let rows = input::load(&s.input, &path, m)?;
        let paired = pair(rows, &ctx.smoothers);

        let plot = if ctx.plots {
            let file = ctx.layout.plot_series(&d.group, &meta.slug, m);
            let bytes = plots::to_csv(&paired, &ctx.specs).map_err(|source| {
                PipelineError::PlotSeries {
                    path: file.clone(),
                    source,
                }
            })?;
            write_file(&file, bytes).map_err(|source| PipelineError::Write {
                path: file.clone(),
                source,
            })?;
            Some(file)
        } else {
            None
        };

        reports.push(SeriesReport {
            measurement: m.key().to_owned(),
            input: path,
            rows: paired.rows.len(),
            dropped: paired.dropped,
            observations: 0,
            methods: applied(&paired),
            failures: paired.failures.iter().map(describe).collect(),
            plot,
        });
        series.push(Series {
            info: s.info.clone(),
            paired,
        });
    }

    let Some(assembler) = assembler else {
        return Ok(Built {
            report: DatasetReport {
                slug: meta.slug.to_string(),
                group: d.group.clone(),
                family: meta.family.to_string(),
                status: DatasetStatus::SeriesOnly,
                error: None,
                series: reports,
                graph: None,
                triples: 0,
            },
            graph: None,
        });
    };

    let assembly = assembler.assemble(meta, &series)?;
    for (r, s) in reports.iter_mut().zip(&assembly.summary.series) {
        r.observations = s.observations;
    }
    let file = ctx.layout.dataset_graph(&d.group, &meta.slug);
    write_file(&file, to_turtle(&assembly.graph, &meta.title)).map_err(|source| {
        PipelineError::Write {
            path: file.clone(),
            source,
        }
    })?;

    Ok(Built {
        report: DatasetReport {
            slug: meta.slug.to_string(),
            group: d.group.clone(),
            family: meta.family.to_string(),
            status: DatasetStatus::Built,
            error: None,
            series: reports,
            graph: Some(file),
            triples: assembly.graph.len(),
        },
        graph: Some(assembly.graph),
    })
}

/// Local names of the methods applied to at least one row.
fn applied(paired: &PairedSeries) -> Vec<String> {
    let specs: BTreeSet<SmoothingSpec> = paired
        .rows
        .iter()
        .flat_map(|r| r.smoothed.iter().map(|v| v.spec))
        .collect();
    specs.iter().map(SmoothingSpec::local_name).collect()
}

fn describe(f: &SmoothingFailure) -> String {
    match &f.entity {
        Some(e) => format!("{} (entity {e}): {}", f.spec.local_name(), f.error),
        None => format!("{}: {}", f.spec.local_name(), f.error),
    }
}

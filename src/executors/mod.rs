//! Command executors that handle the actual logic for each command

pub mod inspect;
pub mod spotlight;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::warn;

use crate::cli::OutputFormat;
use crate::config::GraphSourceConfig;
use crate::core::{AnalysisReport, DependencyGraph};
use crate::graph::DependencyGraphBuilder;
use crate::manifest::load_manifests;
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    ReportGenerator,
};
use crate::utils::string::pluralize;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Discover, parse and merge the manifests named by `source`
///
/// Returns `None` when no manifest was found at all.
fn load_graph(
    source: &GraphSourceConfig,
    mut progress: Option<&mut ProgressReporter>,
) -> Result<Option<DependencyGraph>> {
    let manifests = load_manifests(
        &source.paths,
        &source.include_patterns,
        progress.as_deref_mut(),
    )
    .wrap_err("Failed to load dependency manifests")?;

    if manifests.is_empty() {
        eprintln!("{} No dependency manifests found to analyze", style("ℹ").blue());
        return Ok(None);
    }

    eprintln!("\n{} Building dependency graph...", style("🔨").blue());
    eprintln!(
        "  {} Include abstract components: {}",
        style("→").dim(),
        if source.include_abstract {
            style("yes").green()
        } else {
            style("no").red()
        }
    );

    let mut builder = DependencyGraphBuilder::new(source.include_abstract);
    builder.add_manifests(&manifests, progress);

    let skipped = builder.skipped_abstract();
    if !skipped.is_empty() {
        warn!(components = ?skipped, "abstract components left out of the graph");
        eprintln!(
            "  {} Skipped {} abstract {}: {}",
            style("→").dim(),
            skipped.len(),
            pluralize("component", skipped.len()),
            skipped.join(", ")
        );
    }

    let graph = builder.into_graph();
    eprintln!(
        "  {} {} {} with {} {}",
        style("→").dim(),
        graph.len(),
        pluralize("component", graph.len()),
        graph.edge_count(),
        pluralize("edge", graph.edge_count())
    );

    Ok(Some(graph))
}

/// Render `report` in the requested format and print it to stdout
fn print_report(
    report: &AnalysisReport,
    format: OutputFormat,
    max_nodes: Option<usize>,
    show_all: bool,
) -> Result<()> {
    let generator: Box<dyn ReportGenerator> = match format {
        OutputFormat::Human => Box::new(HumanReportGenerator::new(max_nodes, show_all)),
        OutputFormat::Json => Box::new(JsonReportGenerator::new()),
        OutputFormat::Junit => Box::new(JunitReportGenerator::new()),
        OutputFormat::GitHub => Box::new(GitHubReportGenerator::new()),
    };

    let output = generator
        .generate_report(report)
        .into_diagnostic()
        .wrap_err("Failed to generate report")?;
    print!("{output}");

    Ok(())
}

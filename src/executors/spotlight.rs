//! Spotlight command executor

use console::style;
use miette::Result;
use tracing::warn;

use super::{load_graph, print_report};
use crate::config::SpotlightConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::ranker::StatisticsRanker;

pub struct SpotlightExecutor;

impl CommandExecutor for SpotlightExecutor {
    type Config = SpotlightConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Analyzing circular dependencies through '{}'...\n",
            style("🔍").cyan(),
            style(&config.node).bold()
        );

        let mut progress = ProgressReporter::for_terminal();

        let Some(graph) = load_graph(&config.source, progress.as_mut())? else {
            return Ok(());
        };

        if !graph.contains_node(&config.node) {
            warn!(node = %config.node, "component not found in the dependency graph");
            eprintln!(
                "{} Component '{}' is not declared in any manifest",
                style("⚠").yellow(),
                config.node
            );
        }

        let ranker = StatisticsRanker::new(config.max_depth);
        let report = ranker.analyze_node(&graph, &config.node);

        print_report(&report, config.format, None, true)
    }
}

//! Inspect command executor

use console::style;
use miette::Result;

use super::{load_graph, print_report};
use crate::config::InspectConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::ranker::StatisticsRanker;

pub struct InspectExecutor;

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Searching for circular dependencies (max depth {})...\n",
            style("🔁").cyan(),
            config.max_depth
        );

        let mut progress = ProgressReporter::for_terminal();

        let Some(graph) = load_graph(&config.source, progress.as_mut())? else {
            return Ok(());
        };

        let ranker = StatisticsRanker::new(config.max_depth);
        let report = ranker.build_report(&graph, progress.as_mut());

        print_report(&report, config.format, config.max_nodes, config.show_all)?;

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && report.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}

//! Command implementations for the depcircle CLI
//!
//! This module contains the implementations for each CLI command:
//! - inspect: Rank every component by its circular dependency chains
//! - spotlight: Show the chains leading back to a single component

pub mod inspect;
pub mod spotlight;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Spotlight { .. } => spotlight::execute_spotlight_command(command),
    }
}

/// Turn the shared CLI arguments into a graph source configuration
pub(crate) fn graph_source(
    common: &crate::common::CommonArgs,
) -> Result<crate::config::GraphSourceConfig, crate::error::DepCircleError> {
    use crate::common::ConfigBuilder;

    crate::config::GraphSourceConfig::builder()
        .with_paths(common.get_paths())
        .with_include_patterns(common.get_include_patterns())
        .with_include_abstract(common.include_abstract)
        .build()
}

//! Inspect command implementation

use miette::{Result, WrapErr};

use super::graph_source;
use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::InspectConfig;
use crate::error::DepCircleError;

impl FromCommand for InspectConfig {
    fn from_command(command: Commands) -> Result<Self, DepCircleError> {
        match command {
            Commands::Inspect {
                common,
                format,
                node_display,
                error_on_cycles,
            } => InspectConfig::builder()
                .with_source(graph_source(&common)?)
                .with_format(format.format)
                .with_max_depth(common.max_depth)
                .with_max_nodes(node_display.max_nodes)
                .with_show_all(node_display.all)
                .with_error_on_cycles(error_on_cycles)
                .build(),
            _ => Err(DepCircleError::ConfigurationError {
                message: "Invalid command type for InspectConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(InspectConfig);

/// Execute the inspect command for ranking every component
pub fn execute_inspect_command(command: Commands) -> Result<()> {
    let config = InspectConfig::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::inspect::InspectExecutor;
    InspectExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, OutputFormat};

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn test_inspect_config_from_command() {
        let command = parse(&[
            "depcircle",
            "inspect",
            "services",
            "--max-depth",
            "6",
            "--max-nodes",
            "3",
            "--format",
            "junit",
            "--error-on-cycles",
        ]);

        let config = InspectConfig::try_from(command).unwrap();

        assert_eq!(config.source.paths, vec![std::path::PathBuf::from("services")]);
        assert_eq!(config.max_depth, 6);
        assert_eq!(config.max_nodes, Some(3));
        assert_eq!(config.format, OutputFormat::Junit);
        assert!(config.error_on_cycles);
        assert!(!config.show_all);
    }

    #[test]
    fn test_inspect_rejects_zero_depth() {
        let command = parse(&["depcircle", "inspect", "--max-depth", "0"]);
        assert!(InspectConfig::from_command(command).is_err());
    }

    #[test]
    fn test_inspect_rejects_other_commands() {
        let command = parse(&["depcircle", "spotlight", "orders"]);
        assert!(InspectConfig::from_command(command).is_err());
    }
}

//! Spotlight command implementation

use miette::{Result, WrapErr};

use super::graph_source;
use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SpotlightConfig;
use crate::error::DepCircleError;

impl FromCommand for SpotlightConfig {
    fn from_command(command: Commands) -> Result<Self, DepCircleError> {
        match command {
            Commands::Spotlight {
                node,
                common,
                format,
            } => SpotlightConfig::builder()
                .with_node(node)
                .with_source(graph_source(&common)?)
                .with_format(format.format)
                .with_max_depth(common.max_depth)
                .build(),
            _ => Err(DepCircleError::ConfigurationError {
                message: "Invalid command type for SpotlightConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpotlightConfig);

/// Execute the spotlight command for a single component
pub fn execute_spotlight_command(command: Commands) -> Result<()> {
    let config = SpotlightConfig::from_command(command)
        .wrap_err("Failed to parse spotlight command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spotlight::SpotlightExecutor;
    SpotlightExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn test_spotlight_config_from_command() {
        let command = Cli::try_parse_from([
            "depcircle",
            "spotlight",
            "payments",
            "--include-abstract",
            "--include",
            "*.a.toml,*.b.toml",
        ])
        .unwrap()
        .command;

        let config = SpotlightConfig::try_from(command).unwrap();

        assert_eq!(config.node, "payments");
        assert!(config.source.include_abstract);
        assert_eq!(config.source.include_patterns, vec!["*.a.toml", "*.b.toml"]);
        assert_eq!(config.source.paths.len(), 1);
    }

    #[test]
    fn test_spotlight_rejects_inspect_command() {
        let command = Cli::try_parse_from(["depcircle", "inspect"])
            .unwrap()
            .command;
        assert!(SpotlightConfig::from_command(command).is_err());
    }
}

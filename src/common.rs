//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::constants::analysis::DEFAULT_MAX_DEPTH;
use crate::constants::discovery::DEFAULT_INCLUDE_PATTERNS;

/// Common arguments shared by multiple commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Manifest files or directories to search (defaults to current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// File name glob selecting manifests inside directories (repeatable)
    #[arg(
        long,
        value_name = "GLOB",
        value_delimiter = ',',
        env = "DEPCIRCLE_INCLUDE"
    )]
    pub include: Vec<String>,

    /// Maximum number of levels to descend below each component
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, env = "DEPCIRCLE_MAX_DEPTH")]
    pub max_depth: usize,

    /// Keep abstract components as nodes of the graph
    #[arg(long, env = "DEPCIRCLE_INCLUDE_ABSTRACT")]
    pub include_abstract: bool,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "DEPCIRCLE_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common node display arguments
#[derive(Args, Debug, Clone)]
pub struct NodeDisplayArgs {
    /// Maximum number of components to display (shows all by default)
    #[arg(long, env = "DEPCIRCLE_MAX_NODES")]
    pub max_nodes: Option<usize>,

    /// Also display components without circular dependencies
    #[arg(long, env = "DEPCIRCLE_ALL")]
    pub all: bool,
}

impl CommonArgs {
    /// Get paths, using current directory if none provided
    pub fn get_paths(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))]
        } else {
            self.paths.clone()
        }
    }

    /// Get include globs, using the default manifest names if none provided
    pub fn get_include_patterns(&self) -> Vec<String> {
        if self.include.is_empty() {
            DEFAULT_INCLUDE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect()
        } else {
            self.include.clone()
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DepCircleError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::DepCircleError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::DepCircleError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(paths: Vec<PathBuf>, include: Vec<String>) -> CommonArgs {
        CommonArgs {
            paths,
            include,
            max_depth: DEFAULT_MAX_DEPTH,
            include_abstract: false,
        }
    }

    #[test]
    fn test_common_args_get_paths_empty() {
        let paths = args(vec![], vec![]).get_paths();

        assert_eq!(paths.len(), 1);
        // Should default to current directory
        assert!(paths[0].is_absolute() || paths[0] == std::path::Path::new("."));
    }

    #[test]
    fn test_common_args_get_paths_with_values() {
        let test_paths = vec![PathBuf::from("/tmp/test1"), PathBuf::from("/tmp/test2")];

        let paths = args(test_paths.clone(), vec![]).get_paths();
        assert_eq!(paths, test_paths);
    }

    #[test]
    fn test_common_args_include_patterns() {
        assert_eq!(
            args(vec![], vec![]).get_include_patterns(),
            DEFAULT_INCLUDE_PATTERNS.to_vec()
        );
        assert_eq!(
            args(vec![], vec!["*.graph.toml".to_string()]).get_include_patterns(),
            vec!["*.graph.toml"]
        );
    }
}

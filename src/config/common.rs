//! Configuration shared by every command that builds a dependency graph

use std::path::PathBuf;

use super::missing_field;
use crate::common::ConfigBuilder;
use crate::error::DepCircleError;

/// Where manifests come from and how they are merged into one graph
#[derive(Debug, Clone)]
pub struct GraphSourceConfig {
    /// Manifest files, or directories to search for manifests
    pub paths: Vec<PathBuf>,
    /// File name globs selecting manifests inside directories
    pub include_patterns: Vec<String>,
    /// Keep abstract components as nodes of the graph
    pub include_abstract: bool,
}

impl GraphSourceConfig {
    pub fn builder() -> GraphSourceConfigBuilder {
        GraphSourceConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct GraphSourceConfigBuilder {
    paths: Option<Vec<PathBuf>>,
    include_patterns: Option<Vec<String>>,
    include_abstract: Option<bool>,
}

impl GraphSourceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_include_patterns(mut self, include_patterns: Vec<String>) -> Self {
        self.include_patterns = Some(include_patterns);
        self
    }

    pub fn with_include_abstract(mut self, include_abstract: bool) -> Self {
        self.include_abstract = Some(include_abstract);
        self
    }
}

impl ConfigBuilder for GraphSourceConfigBuilder {
    type Config = GraphSourceConfig;

    fn build(self) -> Result<Self::Config, DepCircleError> {
        let paths = self.paths.ok_or_else(|| missing_field("paths"))?;
        if paths.is_empty() {
            return Err(DepCircleError::ConfigurationError {
                message: "At least one path is required".to_string(),
            });
        }

        let include_patterns = self
            .include_patterns
            .ok_or_else(|| missing_field("include_patterns"))?;
        if include_patterns.is_empty() {
            return Err(DepCircleError::ConfigurationError {
                message: "At least one include pattern is required".to_string(),
            });
        }

        Ok(GraphSourceConfig {
            paths,
            include_patterns,
            include_abstract: self
                .include_abstract
                .ok_or_else(|| missing_field("include_abstract"))?,
        })
    }
}

//! Spotlight command configuration

use super::{GraphSourceConfig, missing_field, validate_max_depth};
use crate::cli::OutputFormat;
use crate::common::ConfigBuilder;
use crate::error::DepCircleError;

/// Configuration for the spotlight command
#[derive(Debug, Clone)]
pub struct SpotlightConfig {
    /// Component whose chains are searched
    pub node: String,
    /// Manifests to build the graph from
    pub source: GraphSourceConfig,
    /// Output format for the report
    pub format: OutputFormat,
    /// Maximum number of levels searched below the component
    pub max_depth: usize,
}

impl SpotlightConfig {
    pub fn builder() -> SpotlightConfigBuilder {
        SpotlightConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SpotlightConfigBuilder {
    node: Option<String>,
    source: Option<GraphSourceConfig>,
    format: Option<OutputFormat>,
    max_depth: Option<usize>,
}

impl SpotlightConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = Some(node.into());
        self
    }

    pub fn with_source(mut self, source: GraphSourceConfig) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

impl ConfigBuilder for SpotlightConfigBuilder {
    type Config = SpotlightConfig;

    fn build(self) -> Result<Self::Config, DepCircleError> {
        let node = self.node.ok_or_else(|| missing_field("node"))?;
        let node = node.trim().to_string();
        if node.is_empty() {
            return Err(DepCircleError::ConfigurationError {
                message: "Component name must not be empty".to_string(),
            });
        }

        let max_depth = self.max_depth.ok_or_else(|| missing_field("max_depth"))?;

        Ok(SpotlightConfig {
            node,
            source: self.source.ok_or_else(|| missing_field("source"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            max_depth: validate_max_depth(max_depth)?,
        })
    }
}

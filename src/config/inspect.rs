//! Inspect command configuration

use super::{GraphSourceConfig, missing_field, validate_max_depth};
use crate::cli::OutputFormat;
use crate::common::ConfigBuilder;
use crate::error::DepCircleError;

/// Configuration for the inspect command
///
/// This struct contains all options for ranking every component of the
/// graph by its circular dependency chains.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Manifests to build the graph from
    pub source: GraphSourceConfig,
    /// Output format for the report
    pub format: OutputFormat,
    /// Maximum number of levels searched below each component
    pub max_depth: usize,
    /// Maximum number of components to display (None = all)
    pub max_nodes: Option<usize>,
    /// Also display components without circular dependencies
    pub show_all: bool,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
}

impl InspectConfig {
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct InspectConfigBuilder {
    source: Option<GraphSourceConfig>,
    format: Option<OutputFormat>,
    max_depth: Option<usize>,
    max_nodes: Option<Option<usize>>,
    show_all: Option<bool>,
    error_on_cycles: Option<bool>,
}

impl InspectConfigBuilder {
    pub fn new() -> Self {
        Self::default()
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

    pub fn with_max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    pub fn with_show_all(mut self, show_all: bool) -> Self {
        self.show_all = Some(show_all);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }
}

impl ConfigBuilder for InspectConfigBuilder {
    type Config = InspectConfig;

    fn build(self) -> Result<Self::Config, DepCircleError> {
        let max_depth = self.max_depth.ok_or_else(|| missing_field("max_depth"))?;

        Ok(InspectConfig {
            source: self.source.ok_or_else(|| missing_field("source"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            max_depth: validate_max_depth(max_depth)?,
            max_nodes: self.max_nodes.ok_or_else(|| missing_field("max_nodes"))?,
            show_all: self.show_all.ok_or_else(|| missing_field("show_all"))?,
            error_on_cycles: self
                .error_on_cycles
                .ok_or_else(|| missing_field("error_on_cycles"))?,
        })
    }
}

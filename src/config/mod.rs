//! # Configuration Module
//!
//! This module provides configuration structures for all depcircle commands.
//! Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **InspectConfig**: Configuration for the `inspect` command that ranks
//!   every component
//! - **SpotlightConfig**: Configuration for the `spotlight` command that
//!   examines a single component
//! - **GraphSourceConfig**: Where manifests are read from and how they are
//!   merged, shared by both commands
//!
//! ## Example
//!
//! ```
//! use depcircle::cli::OutputFormat;
//! use depcircle::common::ConfigBuilder;
//! use depcircle::config::{GraphSourceConfig, InspectConfig};
//!
//! let source = GraphSourceConfig::builder()
//!     .with_paths(vec!["services".into()])
//!     .with_include_patterns(vec!["*.deps.toml".to_string()])
//!     .with_include_abstract(false)
//!     .build()
//!     .unwrap();
//!
//! let config = InspectConfig::builder()
//!     .with_source(source)
//!     .with_format(OutputFormat::Human)
//!     .with_max_depth(20)
//!     .with_max_nodes(Some(10))
//!     .with_show_all(false)
//!     .with_error_on_cycles(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_depth, 20);
//! ```

pub mod common;
pub mod inspect;
pub mod spotlight;

pub use common::GraphSourceConfig;
pub use inspect::InspectConfig;
pub use spotlight::SpotlightConfig;

use crate::constants::analysis::MAX_DEPTH_LIMIT;
use crate::error::DepCircleError;

pub(crate) fn missing_field(field: &str) -> DepCircleError {
    DepCircleError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

/// Reject depths the search cannot use
pub(crate) fn validate_max_depth(max_depth: usize) -> Result<usize, DepCircleError> {
    if (1..=MAX_DEPTH_LIMIT).contains(&max_depth) {
        Ok(max_depth)
    } else {
        Err(DepCircleError::ConfigurationError {
            message: format!("--max-depth must be between 1 and {MAX_DEPTH_LIMIT}, got {max_depth}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_max_depth_bounds() {
        assert_eq!(validate_max_depth(1).unwrap(), 1);
        assert_eq!(validate_max_depth(MAX_DEPTH_LIMIT).unwrap(), MAX_DEPTH_LIMIT);
        assert!(validate_max_depth(0).is_err());
        assert!(validate_max_depth(MAX_DEPTH_LIMIT + 1).is_err());
    }

    #[test]
    fn test_missing_field_message() {
        let err = missing_field("paths");
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: paths"
        );
    }
}

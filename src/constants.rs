//! Configuration constants for depcircle
//!
//! This module contains the defaults used throughout the application. Most of
//! them can be overridden through command line flags or their `DEPCIRCLE_*`
//! environment variables.

use std::time::Duration;

/// Cycle search configuration
pub mod analysis {
    /// Default number of levels the cycle search descends below a node
    pub const DEFAULT_MAX_DEPTH: usize = 20;

    /// Largest depth accepted from the command line
    pub const MAX_DEPTH_LIMIT: usize = 1024;
}

/// Manifest discovery configuration
pub mod discovery {
    /// File name globs used when walking directories
    pub const DEFAULT_INCLUDE_PATTERNS: &[&str] = &[
        "*.deps.toml",
        "*.deps.json",
        "dependencies.toml",
        "dependencies.json",
    ];

    /// Directories never descended into
    pub const SKIPPED_DIRS: &[&str] = &["target", ".git", "node_modules"];
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the circling arrows animation
    pub const SPINNER_FRAMES: &[&str] = &["◜", "◠", "◝", "◞", "◡", "◟"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Separator used when printing flattened cycle chains
    pub const CHAIN_SEPARATOR: &str = "->";
}

/// Logging configuration
pub mod logging {
    /// Environment variable holding the tracing filter directives
    pub const FILTER_ENV: &str = "DEPCIRCLE_LOG";

    /// Environment variable selecting `compact` or `json` log lines
    pub const FORMAT_ENV: &str = "DEPCIRCLE_LOG_FORMAT";

    /// Filter used when no directives are given
    pub const DEFAULT_FILTER: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_constants() {
        assert_eq!(analysis::DEFAULT_MAX_DEPTH, 20);
        assert!(analysis::DEFAULT_MAX_DEPTH <= analysis::MAX_DEPTH_LIMIT);
    }

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 6);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
        assert_eq!(output::CHAIN_SEPARATOR, "->");
    }
}

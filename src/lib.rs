//! # depcircle - Rank Components by Circular Dependencies
//!
//! depcircle reads component dependency manifests, searches every component
//! for dependency chains that lead back to it, and ranks the components by
//! how entangled they are.
//!
//! ## Main Components
//!
//! - **Manifest**: Discovers and parses TOML/JSON dependency manifests
//! - **Graph**: Merges manifests into one dependency graph
//! - **Detector**: Depth-bounded search for chains leading back to a
//!   component
//! - **Ranker**: Runs the detector over every component and orders the
//!   results
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Ranking an in-memory graph
//!
//! ```
//! use depcircle::core::DependencyGraph;
//! use depcircle::ranker::StatisticsRanker;
//! use depcircle::reports::{JsonReportGenerator, ReportGenerator};
//!
//! # fn main() -> Result<(), depcircle::error::DepCircleError> {
//! let graph: DependencyGraph = [
//!     ("api", vec!["auth", "billing"]),
//!     ("auth", vec!["api"]),
//!     ("billing", vec![]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let report = StatisticsRanker::new(20).build_report(&graph, None);
//!
//! // api -> auth -> api and auth -> api -> auth, three names each
//! assert_eq!(report.total_circular_dependency_count(), 6);
//! assert_eq!(report.nodes()[0].name(), "api");
//!
//! let json = JsonReportGenerator::new().generate_report(&report)?;
//! assert!(json.contains("\"has_cycles\": true"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Analyzing manifests on disk
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use depcircle::graph::DependencyGraphBuilder;
//! use depcircle::manifest::load_manifests;
//! use depcircle::ranker::StatisticsRanker;
//! use depcircle::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let patterns = vec!["*.deps.toml".to_string()];
//! let manifests = load_manifests(&[PathBuf::from("services")], &patterns, None)?;
//!
//! let mut builder = DependencyGraphBuilder::new(false);
//! builder.add_manifests(&manifests, None);
//!
//! let report = StatisticsRanker::new(20).build_report(builder.graph(), None);
//!
//! // Show the ten most entangled components
//! let human = HumanReportGenerator::new(Some(10), false);
//! println!("{}", human.generate_report(&report)?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Spotlighting one component
//!
//! ```
//! use depcircle::core::DependencyGraph;
//! use depcircle::detector::find_cycles;
//!
//! let graph: DependencyGraph = [("a", vec!["b"]), ("b", vec!["c"]), ("c", vec!["a"])]
//!     .into_iter()
//!     .collect();
//!
//! let chains = find_cycles(&graph, "b", 20);
//! assert_eq!(chains.len(), 1);
//! assert_eq!(chains[0].to_string(), "b -> c -> a -> b");
//! ```

// Private modules
mod constants;
mod discovery;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod manifest;
pub mod ranker;
pub mod reports;

/// Install the stderr log subscriber
///
/// Directives come from `DEPCIRCLE_LOG` (default `warn`); setting
/// `DEPCIRCLE_LOG_FORMAT=json` switches to one JSON object per line.
fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{EnvFilter, fmt};

    use crate::constants::logging::{DEFAULT_FILTER, FILTER_ENV, FORMAT_ENV};

    let filter = EnvFilter::try_from_env(FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let format = std::env::var(FORMAT_ENV).unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // A subscriber may already be installed when embedded
    let _ = match format.as_str() {
        "json" => registry
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        _ => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
    };
}

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    init_tracing();

    let cli = Cli::parse();
    execute_command(cli.command)
}

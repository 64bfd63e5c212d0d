//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions annotations

pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use crate::core::AnalysisReport;
use crate::error::DepCircleError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Render a ranked analysis report
    fn generate_report(&self, report: &AnalysisReport) -> Result<String, DepCircleError>;
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;

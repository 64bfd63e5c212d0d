//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::constants::output::CHAIN_SEPARATOR;
use crate::core::AnalysisReport;
use crate::error::DepCircleError;
use crate::utils::string::pluralize;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, report: &AnalysisReport) -> Result<String, DepCircleError> {
        let mut output = String::new();

        if !report.has_cycles() {
            writeln!(
                output,
                "::notice title=Dependency Check::No circular dependencies detected! ✅"
            )?;
            return Ok(output);
        }

        let cyclic = report.cyclic_node_count();
        writeln!(
            output,
            "::error title=Circular Dependencies::{} {} on circular dependency chains (total \
             count {})",
            cyclic,
            pluralize("node", cyclic),
            report.total_circular_dependency_count()
        )?;

        for node in report.cyclic_nodes() {
            writeln!(
                output,
                "::warning title=#{} {}::{}",
                node.circular_dependency_count(),
                node.name(),
                node.circle_description(CHAIN_SEPARATOR)
            )?;
        }

        writeln!(
            output,
            "::notice title=Recommendation::Break the chains of the highest ranked nodes first; \
             each removed dependency clears every chain that runs through it."
        )?;

        Ok(output)
    }
}

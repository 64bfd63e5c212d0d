//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::constants::output::CHAIN_SEPARATOR;
use crate::core::{AnalysisReport, NodeDependencyInfo};
use crate::error::DepCircleError;
use crate::utils::string::{join_or_dash, pluralize};

pub struct HumanReportGenerator {
    max_nodes: Option<usize>,
    show_all: bool,
}

impl HumanReportGenerator {
    /// # Arguments
    /// * `max_nodes` - Print at most this many nodes (all when `None`)
    /// * `show_all` - Also print nodes without circular dependencies
    pub fn new(max_nodes: Option<usize>, show_all: bool) -> Self {
        Self {
            max_nodes,
            show_all,
        }
    }

    fn write_node(&self, output: &mut String, node: &NodeDependencyInfo) -> std::fmt::Result {
        let count = if node.has_cycles() {
            style(format!("#{}", node.circular_dependency_count()))
                .red()
                .bold()
        } else {
            style(format!("#{}", node.circular_dependency_count())).green()
        };

        writeln!(output, "== {} {}", count, style(node.name()).bold())?;
        writeln!(
            output,
            "  {} {}",
            style("injected:").dim(),
            join_or_dash(node.dependency_names())
        )?;

        let circle = if node.has_cycles() {
            node.circle_description(CHAIN_SEPARATOR)
        } else {
            "-".to_string()
        };
        writeln!(output, "  {}   {}", style("circle:").dim(), style(circle).yellow())?;

        if node.chain_count() > 1 {
            writeln!(
                output,
                "  {}   {} {}",
                style("chains:").dim(),
                node.chain_count(),
                pluralize("chain", node.chain_count())
            )?;
        }

        writeln!(output)
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &AnalysisReport) -> Result<String, DepCircleError> {
        let mut output = String::new();

        if !report.has_cycles() {
            write!(
                output,
                "\n{} No circular dependencies detected across {} {} (max depth {}).\n",
                style("✅").green().bold(),
                report.node_count(),
                pluralize("node", report.node_count()),
                report.max_depth()
            )?;
            if !self.show_all {
                return Ok(output);
            }
            writeln!(output)?;
        } else {
            write!(
                output,
                "\n{} Found circular dependencies through {} of {} {} (total count {}, max depth \
                 {}):\n\n",
                style("❌").red().bold(),
                style(report.cyclic_node_count()).red().bold(),
                report.node_count(),
                pluralize("node", report.node_count()),
                style(report.total_circular_dependency_count()).red().bold(),
                report.max_depth()
            )?;
        }

        let listed: Vec<&NodeDependencyInfo> = report
            .nodes()
            .iter()
            .filter(|node| self.show_all || node.has_cycles())
            .collect();
        let total_listed = listed.len();
        let showing = self.max_nodes.map_or(total_listed, |limit| limit.min(total_listed));

        for node in listed.into_iter().take(showing) {
            self.write_node(&mut output, node)?;
        }

        if showing < total_listed {
            writeln!(
                output,
                "{} Showing {} of {} nodes. Use --max-nodes to see more.",
                style("ℹ️").blue(),
                style(showing).yellow(),
                style(total_listed).yellow()
            )?;
        }

        if report.has_cycles() {
            writeln!(
                output,
                "\n{} The count is the number of names across every chain through a node, so \
                 nodes on long or repeated chains rank higher.",
                style("💡").yellow()
            )?;
            writeln!(
                output,
                "{} Start with the nodes at the top of the list: breaking one of their \
                 dependencies removes the most chains.",
                style("💡").yellow()
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use console::strip_ansi_codes;
    use predicates::prelude::*;

    use super::*;
    use crate::reports::test_support::{clean_report, sample_report};

    fn render(generator: &HumanReportGenerator, report: &AnalysisReport) -> String {
        let output = generator.generate_report(report).unwrap();
        strip_ansi_codes(&output).to_string()
    }

    #[test]
    fn test_human_report_no_cycles() {
        let output = render(&HumanReportGenerator::new(None, false), &clean_report());

        assert!(output.contains("No circular dependencies detected across 2 nodes"));
        assert!(!output.contains("=="));
    }

    #[test]
    fn test_human_report_lists_cyclic_nodes_in_rank_order() {
        let output = render(&HumanReportGenerator::new(None, false), &sample_report());

        assert!(output.contains("through 4 of 5 nodes (total count 15, max depth 20)"));
        let ledger = output.find("== #4 ledger").unwrap();
        let orders = output.find("== #4 orders").unwrap();
        let payments = output.find("== #4 payments").unwrap();
        let cache = output.find("== #3 cache").unwrap();
        assert!(ledger < orders && orders < payments && payments < cache);
        assert!(!output.contains("web"));
    }

    #[test]
    fn test_human_report_node_details() {
        let output = render(&HumanReportGenerator::new(None, false), &sample_report());

        let contains_orders = predicate::str::contains("injected: payments")
            .and(predicate::str::contains("circle:   orders->payments->ledger->orders"))
            .and(predicate::str::contains("circle:   cache->cache->cache"));
        assert!(contains_orders.eval(output.as_str()));
    }

    #[test]
    fn test_human_report_show_all_includes_clean_nodes() {
        let output = render(&HumanReportGenerator::new(None, true), &sample_report());

        assert!(output.contains("== #0 web"));
        assert!(output.contains("injected: orders"));
    }

    #[test]
    fn test_human_report_truncates() {
        let output = render(&HumanReportGenerator::new(Some(2), false), &sample_report());

        assert!(output.contains("== #4 ledger"));
        assert!(output.contains("== #4 orders"));
        assert!(!output.contains("== #4 payments"));
        assert!(output.contains("Showing 2 of 4 nodes"));
    }
}

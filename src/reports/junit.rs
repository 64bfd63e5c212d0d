//! JUnit XML format report generation
//!
//! Every analyzed node becomes a test case; nodes with circular dependencies
//! fail with their chains in the failure body.

use std::fmt::Write;

use super::ReportGenerator;
use crate::core::AnalysisReport;
use crate::error::DepCircleError;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, report: &AnalysisReport) -> Result<String, DepCircleError> {
        let mut output = String::new();
        let tests = report.node_count();
        let failures = report.cyclic_node_count();

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="depcircle" tests="{tests}" failures="{failures}">"#
        )?;
        writeln!(
            output,
            r#"  <testsuite name="circular-dependencies" tests="{tests}" failures="{failures}">"#
        )?;

        for node in report.nodes() {
            let name = escape_xml(node.name());

            if !node.has_cycles() {
                writeln!(
                    output,
                    r#"    <testcase name="{name}" classname="depcircle"/>"#
                )?;
                continue;
            }

            writeln!(
                output,
                r#"    <testcase name="{name}" classname="depcircle">"#
            )?;
            writeln!(
                output,
                r#"      <failure message="{} circular dependency chains (count {})">"#,
                node.chain_count(),
                node.circular_dependency_count()
            )?;
            for chain in node.chains() {
                writeln!(output, "{}", escape_xml(&chain.to_string()))?;
            }
            writeln!(output, "      </failure>")?;
            writeln!(output, "    </testcase>")?;
        }

        writeln!(output, "  </testsuite>")?;
        writeln!(output, "</testsuites>")?;

        Ok(output)
    }
}

//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::core::AnalysisReport;
use crate::error::DepCircleError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &AnalysisReport) -> Result<String, DepCircleError> {
        let nodes = serde_json::to_value(report.nodes())?;

        let output = json!({
            "has_cycles": report.has_cycles(),
            "max_depth": report.max_depth(),
            "node_count": report.node_count(),
            "cyclic_node_count": report.cyclic_node_count(),
            "total_circular_dependency_count": report.total_circular_dependency_count(),
            "nodes": nodes,
        });

        serde_json::to_string_pretty(&output).map_err(DepCircleError::Json)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::reports::test_support::{clean_report, sample_report};

    #[test]
    fn test_json_report_no_cycles() {
        let generator = JsonReportGenerator::new();

        let output = generator.generate_report(&clean_report()).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["has_cycles"], false);
        assert_eq!(json["total_circular_dependency_count"], 0);
        assert_eq!(json["nodes"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_json_report_keeps_rank_order() {
        let generator = JsonReportGenerator::new();

        let output = generator.generate_report(&sample_report()).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["has_cycles"], true);
        assert_eq!(json["max_depth"], 20);
        assert_eq!(json["cyclic_node_count"], 4);
        assert_eq!(json["total_circular_dependency_count"], 15);

        let names: Vec<&str> = json["nodes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["ledger", "orders", "payments", "cache", "web"]);
    }

    #[test]
    fn test_json_report_node_structure() {
        let generator = JsonReportGenerator::new();

        let output = generator.generate_report(&sample_report()).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        let orders = &json["nodes"][1];
        assert_eq!(orders["name"], "orders");
        assert_eq!(orders["dependency_count"], 1);
        assert_eq!(orders["dependency_names"], serde_json::json!(["payments"]));
        assert_eq!(orders["circular_dependency_count"], 4);
        assert_eq!(
            orders["circular_dependency_descriptions"],
            serde_json::json!(["orders", "payments", "ledger", "orders"])
        );
        assert_eq!(
            orders["chains"],
            serde_json::json!([["orders", "payments", "ledger", "orders"]])
        );
    }

    #[test]
    fn test_json_report_default_trait() {
        let report = sample_report();
        let report1 = JsonReportGenerator.generate_report(&report).unwrap();
        let report2 = JsonReportGenerator::new().generate_report(&report).unwrap();

        assert_eq!(report1, report2);
    }
}

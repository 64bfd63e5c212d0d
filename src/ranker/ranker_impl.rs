use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::core::{AnalysisReport, DependencyGraph, NodeDependencyInfo};
use crate::detector::CycleDetector;
use crate::graph::cyclic_nodes;
use crate::progress::ProgressReporter;

/// Analyze every node of `graph` and rank them by circular dependency count
pub fn build_report(graph: &DependencyGraph, max_depth: usize) -> AnalysisReport {
    StatisticsRanker::new(max_depth).build_report(graph, None)
}

/// Runs the cycle detector over a whole graph and ranks the results
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsRanker {
    detector: CycleDetector,
}

impl StatisticsRanker {
    pub fn new(max_depth: usize) -> Self {
        Self {
            detector: CycleDetector::new(max_depth),
        }
    }

    pub fn detector(&self) -> &CycleDetector {
        &self.detector
    }

    /// Build the ranked report for every node in `graph`
    ///
    /// Nodes are analyzed in lexicographic order. Only nodes that lie on some
    /// cycle are searched; the rest cannot lead back to themselves and get an
    /// empty result directly.
    pub fn build_report(
        &self,
        graph: &DependencyGraph,
        mut progress: Option<&mut ProgressReporter>,
    ) -> AnalysisReport {
        let cyclic = cyclic_nodes(graph);
        debug!(
            nodes = graph.len(),
            cyclic = cyclic.len(),
            "strongly connected component pass finished"
        );

        if let Some(p) = progress.as_deref_mut() {
            p.start_cycle_analysis(graph.len());
        }

        let mut nodes = Vec::with_capacity(graph.len());
        for (name, dependencies) in graph.iter() {
            let chains = if cyclic.contains(name) {
                self.detector.find_cycles(graph, name)
            } else {
                Vec::new()
            };
            nodes.push(NodeDependencyInfo::new(name.as_str(), dependencies, chains));

            if let Some(p) = progress.as_deref() {
                p.update_analysis_progress(name);
            }
        }

        rank(&mut nodes);
        let report = AnalysisReport::new(self.detector.max_depth(), nodes);

        if let Some(p) = progress.as_deref_mut() {
            p.finish_cycle_analysis(report.cyclic_node_count());
        }

        info!(
            nodes = report.node_count(),
            cyclic_nodes = report.cyclic_node_count(),
            total = report.total_circular_dependency_count(),
            "analysis complete"
        );

        report
    }

    /// Build a report holding only `name`
    ///
    /// A name that is not a node of the graph is reported with no
    /// dependencies and no cycles.
    pub fn analyze_node(&self, graph: &DependencyGraph, name: &str) -> AnalysisReport {
        let empty = BTreeSet::new();
        let dependencies = graph.dependencies_of(name).unwrap_or(&empty);
        let chains = self.detector.find_cycles(graph, name);

        AnalysisReport::new(
            self.detector.max_depth(),
            vec![NodeDependencyInfo::new(name, dependencies, chains)],
        )
    }
}

/// Most circular dependencies first, ties broken by name
fn rank(nodes: &mut [NodeDependencyInfo]) {
    nodes.sort_by(|a, b| {
        b.circular_dependency_count()
            .cmp(&a.circular_dependency_count())
            .then_with(|| a.name().cmp(b.name()))
    });
}

use std::collections::BTreeSet;

use tracing::debug;

use crate::core::DependencyGraph;
use crate::manifest::{GraphManifest, LoadedManifest};
use crate::progress::ProgressReporter;

/// Builder for merging manifests into a single dependency graph
///
/// Components declared in several manifests get the union of their
/// dependencies. Abstract components are left out as nodes unless
/// `include_abstract` is set; they can still appear as (dangling) dependencies
/// of other components.
pub struct DependencyGraphBuilder {
    graph: DependencyGraph,
    include_abstract: bool,
    abstract_names: BTreeSet<String>,
}

impl Default for DependencyGraphBuilder {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DependencyGraphBuilder {
    /// Create a new dependency graph builder
    ///
    /// # Arguments
    /// * `include_abstract` - Keep abstract components as nodes of the graph
    pub fn new(include_abstract: bool) -> Self {
        Self {
            graph: DependencyGraph::new(),
            include_abstract,
            abstract_names: BTreeSet::new(),
        }
    }

    /// Merge one manifest into the graph
    pub fn add_manifest(&mut self, manifest: &GraphManifest) {
        for (name, entry) in &manifest.components {
            if entry.is_abstract() && !self.include_abstract {
                self.abstract_names.insert(name.clone());
                continue;
            }
            self.graph
                .extend_dependencies(name.as_str(), entry.dependencies().iter().map(String::as_str));
        }
    }

    /// Merge loaded manifests in order, reporting progress per file
    pub fn add_manifests(
        &mut self,
        manifests: &[LoadedManifest],
        mut progress: Option<&mut ProgressReporter>,
    ) {
        if let Some(p) = progress.as_deref_mut() {
            p.start_graph_building(manifests.len());
        }

        for loaded in manifests {
            self.add_manifest(&loaded.manifest);
            if let Some(p) = progress.as_deref() {
                p.update_graph_progress(&loaded.path);
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish_graph_building();
        }

        debug!(
            manifests = manifests.len(),
            nodes = self.graph.len(),
            edges = self.graph.edge_count(),
            "dependency graph built"
        );
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn into_graph(self) -> DependencyGraph {
        self.graph
    }

    /// Abstract components that never received a concrete declaration
    pub fn skipped_abstract(&self) -> Vec<&str> {
        self.abstract_names
            .iter()
            .filter(|name| !self.graph.contains_node(name))
            .map(String::as_str)
            .collect()
    }
}

//! # Graph Construction Module
//!
//! This module turns parsed manifests into the [`DependencyGraph`] consumed
//! by the detector and ranker, and provides component-level helpers on top of
//! petgraph.
//!
//! ## Components
//!
//! - **DependencyGraphBuilder**: Merges manifests into one graph, skipping
//!   abstract components
//! - **cyclic_nodes**: Tarjan SCC pass that finds every node lying on a cycle
//!
//! ## Example
//!
//! ```
//! use depcircle::graph::{DependencyGraphBuilder, cyclic_nodes};
//! use depcircle::manifest::{GraphManifest, ManifestFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manifest = GraphManifest::parse_str(
//!     r#"
//! [components]
//! api = ["store"]
//! store = ["api"]
//! cli = ["api"]
//! "#,
//!     ManifestFormat::Toml,
//!     "app.deps.toml",
//! )?;
//!
//! let mut builder = DependencyGraphBuilder::new(false);
//! builder.add_manifest(&manifest);
//!
//! let cyclic = cyclic_nodes(builder.graph());
//! assert!(cyclic.contains("api"));
//! assert!(cyclic.contains("store"));
//! assert!(!cyclic.contains("cli"));
//! # Ok(())
//! # }
//! ```
//!
//! [`DependencyGraph`]: crate::core::DependencyGraph

mod builder;
mod components;

pub use builder::DependencyGraphBuilder;
pub use components::{cyclic_nodes, to_digraph};

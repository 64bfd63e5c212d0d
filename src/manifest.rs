//! Dependency manifest parsing
//!
//! A manifest declares components and their direct dependencies under a
//! `components` table, in TOML or JSON:
//!
//! ```toml
//! [components]
//! orderService = ["paymentService"]
//!
//! [components.paymentService]
//! depends_on = ["orderService"]
//!
//! [components.baseRepository]
//! abstract = true
//! depends_on = ["dataSource"]
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use miette::{NamedSource, Result, SourceSpan, WrapErr};
use rayon::prelude::*;
use serde::Deserialize;
use tracing::debug;

use crate::discovery::ManifestDiscovery;
use crate::error::{DepCircleError, ManifestParseError, ManifestSyntaxError};
use crate::progress::ProgressReporter;

/// Syntax a manifest is written in, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Json,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(ManifestFormat::Toml),
            "json" => Some(ManifestFormat::Json),
            _ => None,
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestFormat::Toml => write!(f, "TOML"),
            ManifestFormat::Json => write!(f, "JSON"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphManifest {
    #[serde(default)]
    pub components: BTreeMap<String, ComponentEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ComponentEntry {
    Simple(Vec<String>),
    Detailed(DetailedComponent),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailedComponent {
    #[serde(default, alias = "depends-on")]
    pub depends_on: Vec<String>,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
}

impl ComponentEntry {
    pub fn dependencies(&self) -> &[String] {
        match self {
            ComponentEntry::Simple(deps) => deps,
            ComponentEntry::Detailed(detailed) => &detailed.depends_on,
        }
    }

    pub fn is_abstract(&self) -> bool {
        match self {
            ComponentEntry::Simple(_) => false,
            ComponentEntry::Detailed(detailed) => detailed.is_abstract,
        }
    }
}

/// A parsed manifest together with the file it came from
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub path: PathBuf,
    pub manifest: GraphManifest,
}

impl GraphManifest {
    pub fn parse_file(path: &Path) -> Result<Self, DepCircleError> {
        let format =
            ManifestFormat::from_path(path).ok_or_else(|| DepCircleError::UnsupportedManifest {
                path: path.to_path_buf(),
            })?;

        let content =
            std::fs::read_to_string(path).map_err(|e| DepCircleError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(&content, format, &path.display().to_string())
    }

    /// Parse manifest text, labelling errors with `name`
    pub fn parse_str(
        content: &str,
        format: ManifestFormat,
        name: &str,
    ) -> Result<Self, DepCircleError> {
        let parsed = match format {
            ManifestFormat::Toml => toml::from_str(content).map_err(|e| {
                let span = e
                    .span()
                    .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));
                (span, ManifestSyntaxError::from(e))
            }),
            ManifestFormat::Json => serde_json::from_str(content).map_err(|e| {
                let span = json_error_offset(content, e.line(), e.column())
                    .map(|offset| SourceSpan::new(offset.into(), 1));
                (span, ManifestSyntaxError::from(e))
            }),
        };

        parsed.map_err(|(span, source)| {
            DepCircleError::ManifestParseError(Box::new(ManifestParseError {
                file: name.to_string(),
                format,
                source_code: NamedSource::new(name, content.to_string()),
                span,
                source,
            }))
        })
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

/// Convert serde_json's one-based line/column into a byte offset
fn json_error_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();

    let offset = line_start + column.saturating_sub(1);
    if content.is_empty() {
        None
    } else {
        Some(offset.min(content.len() - 1))
    }
}

/// Discover and parse every manifest under `paths`
///
/// Files are parsed in parallel and returned sorted by path, so the merged
/// graph does not depend on thread scheduling.
pub fn load_manifests(
    paths: &[PathBuf],
    include_patterns: &[String],
    mut progress: Option<&mut ProgressReporter>,
) -> Result<Vec<LoadedManifest>> {
    if let Some(p) = progress.as_deref_mut() {
        p.start_discovery();
    }

    let mut discovery = ManifestDiscovery::new(include_patterns)?;
    let files = discovery
        .discover(paths, progress.as_deref())
        .wrap_err("Failed to discover dependency manifests")?;

    if let Some(p) = progress.as_deref_mut() {
        p.finish_discovery(files.len());
    }

    let mut manifests = files
        .into_par_iter()
        .map(|path| {
            let manifest = GraphManifest::parse_file(&path)?;
            debug!(
                path = %path.display(),
                components = manifest.component_count(),
                "parsed manifest"
            );
            Ok(LoadedManifest { path, manifest })
        })
        .collect::<Result<Vec<_>, DepCircleError>>()?;

    manifests.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(manifests)
}

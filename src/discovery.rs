use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob::Pattern;
use miette::Result;
use walkdir::WalkDir;

use crate::constants::discovery::SKIPPED_DIRS;
use crate::error::DepCircleError;
use crate::progress::ProgressReporter;

/// Finds manifest files under a set of paths
pub struct ManifestDiscovery {
    patterns: Vec<Pattern>,
    seen: HashSet<PathBuf>,
}

impl ManifestDiscovery {
    /// Compile the file name globs used to select manifests inside directories
    pub fn new(patterns: &[String]) -> Result<Self, DepCircleError> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| DepCircleError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            patterns,
            seen: HashSet::new(),
        })
    }

    /// Collect manifest files from `paths`
    ///
    /// Files named explicitly are always taken. Directories are walked and
    /// only files matching one of the patterns are kept. Missing paths are
    /// reported and skipped.
    pub fn discover(
        &mut self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();

        for path in paths {
            if !path.exists() {
                eprintln!(
                    "{} Path '{}' does not exist",
                    console::style("⚠").yellow(),
                    path.display()
                );
                continue;
            }

            if path.is_file() {
                if self.seen.insert(path.clone()) {
                    found.push(path.clone());
                }
                continue;
            }

            self.discover_in_dir(path, &mut found, progress);
        }

        found.sort();

        Ok(found)
    }

    fn discover_in_dir(
        &mut self,
        dir: &Path,
        found: &mut Vec<PathBuf>,
        progress: Option<&ProgressReporter>,
    ) {
        let candidates = WalkDir::new(dir)
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || !e.file_type().is_dir()
                    || !SKIPPED_DIRS.iter().any(|skipped| e.file_name() == *skipped)
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches(&e.file_name().to_string_lossy()))
            .map(|e| e.into_path())
            .collect::<Vec<_>>();

        for path in candidates {
            if let Some(p) = progress {
                p.checking_manifest(&path);
            }
            if self.seen.insert(path.clone()) {
                found.push(path);
            }
        }
    }

    fn matches(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(file_name))
    }
}

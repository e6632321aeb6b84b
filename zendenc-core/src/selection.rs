//! File selection: named include/exclude glob sets over a base directory.
//!
//! A selection resolves lazily, exactly once, to an ordered list of paths
//! relative to its base directory. Resolution matches directory entries of
//! any type against the patterns; filtering out non-regular files is the
//! driver's responsibility, so a directory whose name happens to match a
//! pattern is reported here and skipped there.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use once_cell::unsync::OnceCell;
use walkdir::WalkDir;

use crate::error::{CoreError, CoreResult};

/// A named, pattern-based set of files resolved relative to a base directory.
///
/// An empty include list selects every entry under the base directory.
/// Exclude patterns win over include patterns. Patterns are
/// separator-aware: `*.php` matches only the top level, `**/*.php` matches
/// the whole tree.
#[derive(Debug)]
pub struct FileSelection {
    name: String,
    base_dir: PathBuf,
    include: Vec<String>,
    exclude: Vec<String>,
    resolved: OnceCell<Vec<PathBuf>>,
}

impl FileSelection {
    pub fn new(
        name: &str,
        base_dir: PathBuf,
        include: Vec<String>,
        exclude: Vec<String>,
    ) -> Self {
        Self {
            name: name.to_string(),
            base_dir,
            include,
            exclude,
            resolved: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the matched paths, relative to the base directory and sorted
    /// lexicographically.
    ///
    /// The underlying directory scan runs at most once per selection; later
    /// calls return the memoized list.
    pub fn resolve(&self) -> CoreResult<&[PathBuf]> {
        self.resolved
            .get_or_try_init(|| self.scan())
            .map(Vec::as_slice)
    }

    fn scan(&self) -> CoreResult<Vec<PathBuf>> {
        if !self.base_dir.is_dir() {
            return Err(CoreError::Config(format!(
                "fileset '{}' base directory does not exist: {}",
                self.name,
                self.base_dir.display()
            )));
        }

        let include = build_globset(&self.name, &self.include)?;
        let exclude = build_globset(&self.name, &self.exclude)?;

        let mut matched: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(&self.base_dir).min_depth(1) {
            let entry = entry?;
            let rel = entry
                .path()
                .strip_prefix(&self.base_dir)
                .map_err(|_| {
                    CoreError::PathError(format!(
                        "entry {} escapes base directory {}",
                        entry.path().display(),
                        self.base_dir.display()
                    ))
                })?;

            if exclude.as_ref().is_some_and(|set| set.is_match(rel)) {
                continue;
            }

            let included = match &include {
                Some(set) => set.is_match(rel),
                None => true,
            };
            if included {
                matched.push(rel.to_path_buf());
            }
        }

        matched.sort();

        log::debug!(
            "Fileset '{}' matched {} entries under {}",
            self.name,
            matched.len(),
            self.base_dir.display()
        );

        Ok(matched)
    }
}

fn build_globset(selection: &str, patterns: &[String]) -> CoreResult<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| {
                CoreError::Config(format!(
                    "invalid glob pattern '{}' in fileset '{}': {}",
                    pattern, selection, e
                ))
            })?;
        builder.add(glob);
    }

    builder.build().map(Some).map_err(|e| {
        CoreError::Config(format!(
            "failed to compile glob patterns for fileset '{}': {}",
            selection, e
        ))
    })
}

//! Resolver - resolves content patterns to the set of files to scan
//!
//! Each positive pattern expansion is walked independently (in parallel) from
//! its literal directory prefix. Matches are unioned, exclusions (`!pattern`)
//! are removed per spelling, and the result is deduplicated by canonical path.
//! A file survives as long as one of its spellings is not excluded.
//!
//! # Examples
//!
//! ```no_run
//! use stylecfg::content::{ContentPattern, Resolver};
//!
//! let resolver = Resolver::new(".").unwrap();
//! let patterns = ContentPattern::parse_all(&["src/**/*.rs", "*.html"]).unwrap();
//! let files = resolver.resolve(&patterns).unwrap();
//! for path in files.iter() {
//!     println!("{}", path.display());
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

use super::ResolveError;
use super::pattern::{ContentPattern, GlobExpansion};

/// Directories pruned from every walk unless configured otherwise
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[".git", "node_modules"];

/// A deduplicated set of files, relative to the resolution root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedFileSet {
    /// Root the paths are relative to
    root: PathBuf,

    /// Matched files
    files: BTreeSet<PathBuf>,
}

impl ResolvedFileSet {
    /// Root the paths are relative to
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of files
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True when no file matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Check whether a root-relative path is in the set
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.files.contains(path.as_ref())
    }

    /// Iterate over root-relative paths in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    /// Absolute paths, in the same order as [`ResolvedFileSet::iter`]
    #[must_use]
    pub fn absolute_paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|p| self.root.join(p)).collect()
    }

    /// Consume the set, returning the relative paths
    #[must_use]
    pub fn into_paths(self) -> BTreeSet<PathBuf> {
        self.files
    }
}

/// Resolver for turning content patterns into files
#[derive(Debug, Clone)]
pub struct Resolver {
    /// Root directory patterns are relative to
    root: PathBuf,

    /// Directory names pruned from walks
    ignored_dirs: Vec<String>,

    /// Optional bound on total resolution time
    timeout: Option<Duration>,
}

/// A matched file: relative spelling and canonical identity
type Hit = (PathBuf, PathBuf);

impl Resolver {
    /// Create a new resolver rooted at the given directory
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::RootNotFound`] if the root does not exist and
    /// [`ResolveError::NotADirectory`] if it is a file.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ResolveError> {
        let root = root.as_ref().to_path_buf();

        if !root.exists() {
            return Err(ResolveError::RootNotFound(root));
        }
        if !root.is_dir() {
            return Err(ResolveError::NotADirectory(root));
        }

        Ok(Self {
            root,
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(ToString::to_string).collect(),
            timeout: None,
        })
    }

    /// Replace the list of pruned directory names
    #[must_use]
    pub fn with_ignored_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Bound the total time a resolution may take
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the root path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the pruned directory names
    #[must_use]
    pub fn ignored_dirs(&self) -> &[String] {
        &self.ignored_dirs
    }

    /// Resolve patterns into a deduplicated file set
    ///
    /// An empty result is not an error. Pattern order does not affect the
    /// result.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::NoPatterns`] if no positive pattern is given
    /// - [`ResolveError::Timeout`] if the configured bound is exceeded
    /// - [`ResolveError::Io`] / [`ResolveError::WalkDir`] on filesystem errors
    pub fn resolve(&self, patterns: &[ContentPattern]) -> Result<ResolvedFileSet, ResolveError> {
        let (exclusions, includes): (Vec<&ContentPattern>, Vec<&ContentPattern>) =
            patterns.iter().partition(|p| p.is_negated());
        if includes.is_empty() {
            return Err(ResolveError::NoPatterns);
        }

        let deadline = self.timeout.map(|t| Instant::now() + t);
        let expansions: Vec<&GlobExpansion> =
            includes.iter().copied().flat_map(ContentPattern::expansions).collect();

        let batches = expansions
            .par_iter()
            .map(|glob| self.walk_expansion(glob, deadline))
            .collect::<Result<Vec<Vec<Hit>>, ResolveError>>()?;

        // canonical path -> smallest surviving relative spelling
        let mut by_canonical: BTreeMap<PathBuf, PathBuf> = BTreeMap::new();
        for (relative, canonical) in batches.into_iter().flatten() {
            if exclusions.iter().any(|p| p.matches(&relative)) {
                continue;
            }
            by_canonical
                .entry(canonical)
                .and_modify(|existing| {
                    if relative < *existing {
                        existing.clone_from(&relative);
                    }
                })
                .or_insert(relative);
        }

        let files: BTreeSet<PathBuf> = by_canonical.into_values().collect();

        if files.is_empty() {
            warn!("content patterns matched no files under {}", self.root.display());
        } else {
            debug!("resolved {} file(s) under {}", files.len(), self.root.display());
        }

        Ok(ResolvedFileSet {
            root: self.root.clone(),
            files,
        })
    }

    /// Walk one expansion from its base directory
    fn walk_expansion(
        &self,
        glob: &GlobExpansion,
        deadline: Option<Instant>,
    ) -> Result<Vec<Hit>, ResolveError> {
        let start = self.root.join(glob.base());
        let mut hits = Vec::new();

        if glob.is_literal() {
            let relative = PathBuf::from(glob.source());
            let absolute = self.root.join(&relative);
            if absolute.is_file() {
                hits.push((relative, self.canonical(&absolute)));
            }
            return Ok(hits);
        }

        if !start.is_dir() {
            debug!("skipping `{}`: {} is not a directory", glob.source(), start.display());
            return Ok(hits);
        }

        let mut walker = WalkDir::new(&start).min_depth(1).follow_links(true);
        if let Some(depth) = glob.max_depth() {
            walker = walker.max_depth(depth);
        }

        for entry in walker.into_iter().filter_entry(|e| !self.is_ignored(e)) {
            if deadline.is_some_and(|limit| Instant::now() >= limit) {
                return Err(ResolveError::Timeout(self.timeout.unwrap_or_default()));
            }

            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.loop_ancestor().is_some() => {
                    warn!("skipping symlink loop: {err}");
                    continue;
                },
                Err(err) if is_dangling_link(&err) => {
                    warn!("skipping dangling symlink: {err}");
                    continue;
                },
                Err(err) => return Err(err.into()),
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Ok(relative) = path.strip_prefix(&self.root) else {
                continue;
            };
            if glob.matches(relative) {
                hits.push((relative.to_path_buf(), self.canonical(path)));
            }
        }

        debug!("`{}` matched {} file(s)", glob.source(), hits.len());
        Ok(hits)
    }

    /// Check if a directory entry is pruned by name
    fn is_ignored(&self, entry: &walkdir::DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.ignored_dirs.iter().any(|d| d == name))
    }

    fn canonical(&self, path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap_or_else(|_| self.root.join(path))
    }
}

/// A followed symlink whose target is gone
fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.io_error().is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
        && err.path().is_some_and(Path::is_symlink)
}

//! Content file resolution
//!
//! Turns the `content` glob list of a configuration into the concrete set of
//! files a CSS generator scans for class usage.
//!
//! - [`ContentPattern`] - a parsed, brace-expanded, compiled pattern
//! - [`Resolver`] - walks the filesystem for a set of patterns
//! - [`ResolvedFileSet`] - the deduplicated result

mod pattern;
mod resolver;

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

pub use pattern::{ContentPattern, GlobExpansion};
pub use resolver::{DEFAULT_IGNORED_DIRS, ResolvedFileSet, Resolver};

/// Errors that can occur during resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A pattern cannot be compiled
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The pattern as written
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// Root path does not exist
    #[error("root path does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Root path is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// No positive pattern was given
    #[error("no content patterns to resolve")]
    NoPatterns,

    /// Resolution exceeded the caller's bound
    #[error("resolution timed out after {0:?}")]
    Timeout(Duration),

    /// IO error during file operations
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Parse `patterns` and resolve them against `root`
///
/// # Errors
///
/// See [`ContentPattern::parse`], [`Resolver::new`] and [`Resolver::resolve`].
pub fn resolve<S: AsRef<str>>(
    patterns: &[S],
    root: impl AsRef<Path>,
) -> Result<ResolvedFileSet, ResolveError> {
    let resolver = Resolver::new(root)?;
    let patterns = ContentPattern::parse_all(patterns)?;
    resolver.resolve(&patterns)
}

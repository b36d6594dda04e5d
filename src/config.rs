//! Build configuration loading
//!
//! The configuration lives in `stylecfg.toml` (or a `.json` file with the same
//! shape) and declares three things:
//!
//! - `content` - glob patterns for the files to scan
//! - `theme` - category overrides, plus `theme.extend` for deep-merged tokens
//! - `plugins` - plugin identifiers, carried through untouched
//!
//! A `[scan]` table tunes the resolver (pruned directories, time bound).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::{ContentPattern, DEFAULT_IGNORED_DIRS, ResolveError, Resolver};
use crate::theme::{ThemeConfig, ThemeError, merge, merge_strict, replace_categories};

/// Configuration filename searched for by [`find_config`]
pub const CONFIG_FILE: &str = "stylecfg.toml";

/// Starter configuration written by `stylecfg init`
pub const TEMPLATE: &str = r##"# stylecfg build configuration

# Files scanned for class usage. `**` crosses directories, `*` does not.
# Prefix a pattern with `!` to exclude matches.
content = [
    "*.html",
    "src/*.rs",
    "src/components/**/*.rs",
]

# Plugin identifiers, passed through to the generator
plugins = []

[theme.extend.colors.primary]
100 = "#EE05F2"
200 = "#AF13F2"
300 = "#A01AD9"
400 = "#6805F2"

[theme.extend.colors.background]
DEFAULT = "#444444"
card = "#333333"

[theme.extend.backgroundImage]
gradient-primary = "linear-gradient(120deg, #EE05F2, #6805F2)"

[scan]
ignore_dirs = [".git", "node_modules", "target"]
# timeout_ms = 5000
"##;

/// Errors raised while loading configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// TOML syntax or shape error
    #[error("invalid TOML in {path}: {source}")]
    Toml {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// JSON syntax or shape error
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },
}

/// A parsed build configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Content glob patterns, in declaration order
    #[serde(default)]
    pub content: Vec<String>,

    /// Theme section
    #[serde(default)]
    pub theme: ThemeSection,

    /// Plugin identifiers
    #[serde(default)]
    pub plugins: Vec<String>,

    /// Resolver settings
    #[serde(default)]
    pub scan: ScanConfig,
}

/// The `theme` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeSection {
    /// Tokens deep-merged into the base theme
    #[serde(default)]
    pub extend: ThemeConfig,

    /// Categories that replace the base category outright
    #[serde(flatten)]
    pub overrides: ThemeConfig,
}

/// The `scan` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory names pruned from every walk
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,

    /// Bound on content resolution time, in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

fn default_ignore_dirs() -> Vec<String> {
    DEFAULT_IGNORED_DIRS.iter().map(ToString::to_string).collect()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore_dirs: default_ignore_dirs(),
            timeout_ms: None,
        }
    }
}

impl ScanConfig {
    /// Configured time bound, if any
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl StyleConfig {
    /// Load a configuration file; `.json` files are parsed as JSON, all others
    /// as TOML
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("loading configuration from {}", path.display());
        parse_file(path)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Compute the effective theme on top of `base`
    ///
    /// Category overrides are applied first, then `theme.extend` is merged.
    #[must_use]
    pub fn resolve_theme(&self, base: &ThemeConfig) -> ThemeConfig {
        let replaced = replace_categories(base, &self.theme.overrides);
        merge(&replaced, &self.theme.extend)
    }

    /// Like [`StyleConfig::resolve_theme`], validating every resulting leaf
    pub fn resolve_theme_strict(&self, base: &ThemeConfig) -> Result<ThemeConfig, ThemeError> {
        let replaced = replace_categories(base, &self.theme.overrides);
        merge_strict(&replaced, &self.theme.extend)
    }

    /// Parse the `content` list
    pub fn content_patterns(&self) -> Result<Vec<ContentPattern>, ResolveError> {
        ContentPattern::parse_all(&self.content)
    }

    /// Build a resolver for `root` using the `[scan]` settings
    ///
    /// `timeout` overrides `scan.timeout_ms` when given.
    pub fn resolver(
        &self,
        root: &Path,
        timeout: Option<Duration>,
    ) -> Result<Resolver, ResolveError> {
        Ok(Resolver::new(root)?
            .with_ignored_dirs(self.scan.ignore_dirs.iter().cloned())
            .with_timeout(timeout.or_else(|| self.scan.timeout())))
    }
}

/// Load a standalone theme file (used as an alternative merge base)
pub fn load_theme_file(path: &Path) -> Result<ThemeConfig, ConfigError> {
    debug!("loading base theme from {}", path.display());
    parse_file(path)
}

fn parse_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Find the nearest `stylecfg.toml` from `from` up to the repository root
#[must_use]
pub fn find_config(from: &Path) -> Option<PathBuf> {
    let mut current = from.to_path_buf();

    // Normalize: if it's a file, start from parent
    if current.is_file() {
        current = current.parent().unwrap_or(from).to_path_buf();
    }

    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Stop at repo root (.git) or filesystem root
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

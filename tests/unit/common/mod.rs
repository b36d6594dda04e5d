//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing stylecfg components.

use std::fs;
use std::path::Path;

use stylecfg::theme::ThemeConfig;
use tempfile::TempDir;

/// A test project with a standard directory structure
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new test project with standard structure:
    /// ```text
    /// /
    /// ├── index.html
    /// ├── README.md
    /// └── src/
    ///     ├── main.rs
    ///     ├── app.rs
    ///     ├── lib/
    ///     │   └── util.rs
    ///     └── components/
    ///         ├── current.rs
    ///         └── forecast/
    ///             └── card.rs
    /// ```
    pub fn new() -> Self {
        let repo = Self::empty();
        repo.add_file("index.html", "<div class=\"bg-primary-100\"></div>\n");
        repo.add_file("README.md", "# Test\n");
        repo.add_file("src/main.rs", "fn main() {}\n");
        repo.add_file("src/app.rs", "pub fn app() {}\n");
        repo.add_file("src/lib/util.rs", "pub fn util() {}\n");
        repo.add_file("src/components/current.rs", "pub fn current() {}\n");
        repo.add_file("src/components/forecast/card.rs", "pub fn card() {}\n");
        repo
    }

    /// Create an empty test project
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Get the root path of the test project
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories
    pub fn add_file(&self, path: &str, content: &str) {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// The base theme used by merge scenarios: four primary shades
pub fn primary_base() -> ThemeConfig {
    ThemeConfig::new()
        .with_token("colors.primary.100", "#000000")
        .with_token("colors.primary.200", "#111111")
        .with_token("colors.primary.300", "#222222")
        .with_token("colors.primary.400", "#333333")
}

//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::content::ResolvedFileSet;
use crate::theme::{ThemeConfig, TokenValue};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a theme operation
#[derive(Debug, Serialize)]
pub struct ThemeResult {
    /// Merged theme tree
    pub theme: ThemeConfig,
    /// Flattened tokens
    pub tokens: Vec<TokenEntry>,
}

/// A flattened token for display
#[derive(Debug, Serialize)]
pub struct TokenEntry {
    /// Dotted path
    pub path: String,
    /// Utility suffix (`primary-100`)
    pub utility: String,
    /// Leaf value
    pub value: TokenValue,
}

/// Result of a single token lookup
#[derive(Debug, Serialize)]
pub struct TokenLookupResult {
    /// Requested dotted path
    pub path: String,
    /// Value found, if any
    pub value: Option<TokenValue>,
}

/// Result of a content resolution
#[derive(Debug, Serialize)]
pub struct ContentResult {
    /// Root the files are relative to
    pub root: String,
    /// Number of files
    pub count: usize,
    /// Root-relative file paths, sorted
    pub files: Vec<String>,
}

/// Result of a configuration check
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether the configuration is usable
    pub passed: bool,
    /// Configuration file that was checked
    pub config: String,
    /// Number of tokens in the merged theme
    pub tokens: usize,
    /// Number of content files resolved
    pub files: usize,
    /// Declared plugin identifiers
    pub plugins: Vec<String>,
    /// Non-fatal findings
    pub warnings: Vec<String>,
    /// Fatal findings
    pub errors: Vec<String>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl ThemeResult {
    /// Build a result from a merged theme
    #[must_use]
    pub fn new(theme: ThemeConfig) -> Self {
        let tokens = theme
            .tokens()
            .into_iter()
            .map(|t| TokenEntry {
                path: t.dotted(),
                utility: t.utility_name(),
                value: t.value,
            })
            .collect();
        Self { theme, tokens }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.tokens.is_empty() {
            println!("No tokens defined.");
            return;
        }

        let mut category = "";
        for token in &self.tokens {
            let current = token.path.split('.').next().unwrap_or_default();
            if current != category {
                if !category.is_empty() {
                    println!();
                }
                println!("{}:", current.bold());
                category = current;
            }
            println!("  {} = {}", token.path.cyan(), token.value);
        }
        println!("\n{} token(s).", self.tokens.len());
    }
}

impl TokenLookupResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.value {
                Some(value) => println!("{value}"),
                None => println!("No token at `{}`.", self.path),
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl ContentResult {
    /// Build a result from a resolved file set
    #[must_use]
    pub fn new(files: &ResolvedFileSet) -> Self {
        Self {
            root: files.root().display().to_string(),
            count: files.len(),
            files: files.iter().map(|p| p.to_string_lossy().replace('\\', "/")).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.files.is_empty() {
            println!("{} no files matched the content patterns.", "warning:".yellow().bold());
            return;
        }
        for file in &self.files {
            println!("{file}");
        }
    }
}

impl CheckReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Checking {}...\n", self.config);
        println!("  tokens:  {}", self.tokens);
        println!("  files:   {}", self.files);
        if self.plugins.is_empty() {
            println!("  plugins: none");
        } else {
            println!("  plugins: {}", self.plugins.join(", "));
        }

        for warning in &self.warnings {
            println!("\n{} {warning}", "warning:".yellow().bold());
        }
        for error in &self.errors {
            println!("\n{} {error}", "error:".red().bold());
        }

        if self.passed {
            println!("\n{}", "Configuration OK.".green());
        } else {
            println!("\n{}", "Configuration has errors.".red());
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

//! Integration tests for the stylecfg CLI
//!
//! These tests run the binary against real project trees, covering the
//! full cycle of: init → theme → content → check

mod cli_test;

use assert_cmd::cargo;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a stylecfg command
fn stylecfg() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("stylecfg"))
}

/// Helper to write a file, creating parent directories
fn write(root: &Path, path: &str, content: &str) {
    let full = root.join(path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full, content).unwrap();
}

/// Project with the sample page layout and a given configuration
fn project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "stylecfg.toml", config);
    write(root, "index.html", "<body class=\"bg-background\"></body>\n");
    write(root, "src/main.rs", "fn main() {}\n");
    write(root, "src/app.rs", "pub fn app() {}\n");
    write(root, "src/components/current.rs", "pub fn current() {}\n");
    write(root, "src/components/forecast/card.rs", "pub fn card() {}\n");
    temp
}

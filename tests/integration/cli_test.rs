//! End-to-end CLI tests

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use super::{project, stylecfg};

const CONFIG: &str = r##"
content = ["*.html", "src/*.rs", "src/components/**/*.rs"]
plugins = ["typography"]

[theme.extend.colors.primary]
100 = "#EE05F2"
200 = "#AF13F2"

[theme.extend.backgroundImage]
gradient-primary = "linear-gradient(120deg, #EE05F2, #6805F2)"
"##;

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    stylecfg()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stylecfg"));
}

#[test]
fn test_version_json() {
    stylecfg()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_no_args_shows_info() {
    stylecfg().assert().success().stdout(predicate::str::contains("stylecfg init"));
}

// =============================================================================
// INIT
// =============================================================================

#[test]
fn test_init_writes_template() {
    let temp = TempDir::new().unwrap();

    stylecfg()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created stylecfg.toml"));

    let content = fs::read_to_string(temp.path().join("stylecfg.toml")).unwrap();
    assert!(content.contains("[theme.extend.colors.primary]"));
}

#[test]
fn test_init_does_not_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("stylecfg.toml"), "content = []\n").unwrap();

    stylecfg()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Already initialized"))
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(temp.path().join("stylecfg.toml")).unwrap(), "content = []\n");

    stylecfg().args(["init", "--force"]).current_dir(temp.path()).assert().success();
    assert_ne!(fs::read_to_string(temp.path().join("stylecfg.toml")).unwrap(), "content = []\n");
}

// =============================================================================
// THEME
// =============================================================================

#[test]
fn test_theme_lists_merged_tokens() {
    let temp = project(CONFIG);

    stylecfg()
        .arg("theme")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("#EE05F2"))
        .stdout(predicate::str::contains("#6b7280"));
}

#[test]
fn test_theme_get_single_token() {
    let temp = project(CONFIG);

    stylecfg()
        .args(["theme", "--get", "colors.primary.200"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("#AF13F2\n"));
}

#[test]
fn test_theme_get_missing_token_fails() {
    let temp = project(CONFIG);

    stylecfg()
        .args(["theme", "--get", "colors.primary.900"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_theme_json_is_machine_readable() {
    let temp = project(CONFIG);

    let output = stylecfg().args(["--json", "theme"]).current_dir(temp.path()).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["theme"]["colors"]["primary"]["100"], "#EE05F2");
    assert_eq!(json["theme"]["colors"]["white"], "#fff");
}

#[test]
fn test_theme_strict_rejects_bad_value() {
    let temp = project("content = [\"*.html\"]\n[theme.extend.colors]\nbroken = \"#12\"\n");

    stylecfg()
        .args(["theme", "--strict"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("colors.broken"));
}

#[test]
fn test_theme_with_custom_base() {
    let temp = project(CONFIG);
    fs::write(temp.path().join("base.toml"), "[colors.primary]\n300 = \"#A01AD9\"\n").unwrap();

    let output = stylecfg()
        .args(["--json", "theme", "--base", "base.toml"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["theme"]["colors"]["primary"]["300"], "#A01AD9");
    assert_eq!(json["theme"]["colors"]["primary"]["100"], "#EE05F2");
    assert!(json["theme"]["colors"]["gray"].is_null());
}

// =============================================================================
// CONTENT
// =============================================================================

#[test]
fn test_content_lists_matching_files() {
    let temp = project(CONFIG);

    stylecfg()
        .arg("content")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "index.html\nsrc/app.rs\nsrc/components/current.rs\nsrc/components/forecast/card.rs\nsrc/main.rs\n",
        ));
}

#[test]
fn test_content_from_subdirectory_uses_config_dir() {
    let temp = project(CONFIG);

    stylecfg()
        .arg("content")
        .current_dir(temp.path().join("src/components"))
        .assert()
        .success()
        .stdout(predicate::str::contains("index.html"));
}

#[test]
fn test_content_json() {
    let temp = project(CONFIG);

    let output = stylecfg().args(["--json", "content"]).current_dir(temp.path()).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 5);
}

#[test]
fn test_content_timeout_flag_overrides_config() {
    let temp = project("content = [\"src/**/*.rs\"]\n[scan]\ntimeout_ms = 60000\n");

    stylecfg().arg("content").current_dir(temp.path()).assert().success();

    stylecfg()
        .args(["content", "--timeout-ms", "0"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("timed out"));
}

#[test]
fn test_content_missing_root_fails() {
    let temp = project(CONFIG);

    stylecfg()
        .args(["content", "--root", "does-not-exist"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("root path does not exist"));
}

#[test]
fn test_content_invalid_pattern_fails() {
    let temp = project("content = [\"src/[ab.rs\"]\n");

    stylecfg()
        .arg("content")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern"));
}

#[test]
fn test_content_without_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".git")).unwrap();

    stylecfg()
        .arg("content")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no stylecfg.toml found"));
}

#[test]
fn test_explicit_config_path() {
    let temp = project(CONFIG);
    fs::write(temp.path().join("other.toml"), "content = [\"src/components/*.rs\"]\n").unwrap();

    stylecfg()
        .args(["--config", "other.toml", "content"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("src/components/current.rs\n"));
}

// =============================================================================
// CHECK
// =============================================================================

#[test]
fn test_check_passes_for_valid_config() {
    let temp = project(CONFIG);

    stylecfg()
        .arg("check")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration OK."))
        .stdout(predicate::str::contains("typography"));
}

#[test]
fn test_check_warns_on_empty_file_set() {
    let temp = project("content = [\"**/*.vue\"]\n");

    let output = stylecfg().args(["--json", "check"]).current_dir(temp.path()).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], true);
    assert_eq!(json["files"], 0);
    assert_eq!(json["warnings"][0], "content patterns matched no files");
}

#[test]
fn test_check_fails_on_malformed_token() {
    let temp = project("content = [\"*.html\"]\n[theme.extend.backgroundImage]\nhero = \"url(\"\n");

    stylecfg()
        .args(["--json", "check"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"passed\": false"))
        .stdout(predicate::str::contains("backgroundImage.hero"));
}

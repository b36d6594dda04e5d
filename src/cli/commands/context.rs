//! Configuration lookup shared by commands

use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};
use stylecfg::config::{CONFIG_FILE, StyleConfig, find_config, load_theme_file};
use stylecfg::theme::{ThemeConfig, default_theme};

/// A loaded configuration and where it came from
#[derive(Debug)]
pub struct Loaded {
    /// Configuration file path
    pub path: PathBuf,
    /// Directory containing the configuration file
    pub dir: PathBuf,
    /// Parsed configuration
    pub config: StyleConfig,
}

/// Load `--config`, or the nearest stylecfg.toml from the current directory
pub fn load(config: Option<&Path>) -> anyhow::Result<Loaded> {
    let path = match config {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = std::env::current_dir()?;
            find_config(&cwd).with_context(|| {
                format!("no {CONFIG_FILE} found; run 'stylecfg init' or pass --config")
            })?
        },
    };
    debug!("using configuration {}", path.display());

    let config = StyleConfig::load(&path)?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

    Ok(Loaded { path, dir, config })
}

/// Load the merge base: a `--base` file, or the built-in theme
pub fn base_theme(base: Option<&Path>) -> anyhow::Result<ThemeConfig> {
    let theme = match base {
        Some(path) => load_theme_file(path)?,
        None => default_theme(),
    };
    if theme.is_empty() {
        warn!("base theme is empty; only configured tokens will be available");
    }
    Ok(theme)
}

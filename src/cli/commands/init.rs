//! Write a starter configuration

use std::fs;
use std::path::Path;

use stylecfg::config::{CONFIG_FILE, TEMPLATE};
use stylecfg::output::{OperationResult, OutputMode};

/// Write `stylecfg.toml` in the current directory
///
/// Fails without `force` when the file already exists.
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!("Already initialized ({CONFIG_FILE} exists). Use --force to overwrite."),
        }
        .render(mode);
        anyhow::bail!("{CONFIG_FILE} already exists");
    }

    fs::write(path, TEMPLATE)?;

    OperationResult {
        success: true,
        message: format!(
            "Created {CONFIG_FILE}\n\nNext steps:\n  stylecfg content   # list scanned files\n  stylecfg theme     # show merged tokens"
        ),
    }
    .render(mode);
    Ok(())
}

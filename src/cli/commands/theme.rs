//! Print the merged theme

use std::path::Path;

use stylecfg::output::{OutputMode, ThemeResult, TokenLookupResult};

use super::context;

/// Merge the configured theme into the base and print it
pub fn theme(
    config: Option<&Path>,
    base: Option<&Path>,
    strict: bool,
    get: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let loaded = context::load(config)?;
    let base = context::base_theme(base)?;

    let merged = if strict {
        loaded.config.resolve_theme_strict(&base)?
    } else {
        loaded.config.resolve_theme(&base)
    };

    if let Some(path) = get {
        let result = TokenLookupResult {
            path: path.to_string(),
            value: merged.get(path).cloned(),
        };
        result.render(mode);
        if result.value.is_none() {
            anyhow::bail!("token `{path}` not found");
        }
        return Ok(());
    }

    ThemeResult::new(merged).render(mode);
    Ok(())
}

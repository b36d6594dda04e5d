//! Validate a configuration end to end

use std::path::Path;

use stylecfg::output::{CheckReport, OutputMode};

use super::context;

/// Run a strict theme merge and a content resolution, reporting both
pub fn check(
    config: Option<&Path>,
    root: Option<&Path>,
    base: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let loaded = context::load(config)?;
    let base = context::base_theme(base)?;
    let root = root.unwrap_or(loaded.dir.as_path());

    let mut report = CheckReport {
        passed: true,
        config: loaded.path.display().to_string(),
        tokens: 0,
        files: 0,
        plugins: loaded.config.plugins.clone(),
        warnings: Vec::new(),
        errors: Vec::new(),
    };

    match loaded.config.resolve_theme_strict(&base) {
        Ok(theme) => report.tokens = theme.token_count(),
        Err(err) => report.errors.push(err.to_string()),
    }

    if loaded.config.content.is_empty() {
        report.errors.push("`content` is empty; nothing would be scanned".to_string());
    } else {
        let resolved = loaded
            .config
            .content_patterns()
            .and_then(|patterns| loaded.config.resolver(root, None)?.resolve(&patterns));
        match resolved {
            Ok(files) if files.is_empty() => {
                report.warnings.push("content patterns matched no files".to_string());
            },
            Ok(files) => report.files = files.len(),
            Err(err) => report.errors.push(err.to_string()),
        }
    }

    report.passed = report.errors.is_empty();
    report.render(mode);

    if !report.passed {
        anyhow::bail!("configuration check failed");
    }
    Ok(())
}

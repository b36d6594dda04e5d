//! Print the resolved content files

use std::path::Path;
use std::time::Duration;

use stylecfg::output::{ContentResult, OutputMode};

use super::context;

/// Resolve the configured content patterns and print the matches
pub fn content(
    config: Option<&Path>,
    root: Option<&Path>,
    timeout_ms: Option<u64>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let loaded = context::load(config)?;
    let root = root.unwrap_or(loaded.dir.as_path());

    let patterns = loaded.config.content_patterns()?;
    let resolver = loaded.config.resolver(root, timeout_ms.map(Duration::from_millis))?;
    let files = resolver.resolve(&patterns)?;

    ContentResult::new(&files).render(mode);
    Ok(())
}

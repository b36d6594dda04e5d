//! Theme merging
//!
//! [`merge`] deep-merges a user extension into a base theme. The most
//! specific path wins: a leaf in the extension replaces the base leaf at the
//! same path, while sibling keys inherited from the base are kept.
//!
//! # Examples
//!
//! ```
//! use stylecfg::theme::{ThemeConfig, merge};
//!
//! let base = ThemeConfig::new()
//!     .with_token("colors.primary.100", "#000000")
//!     .with_token("colors.primary.200", "#111111");
//! let extension = ThemeConfig::new().with_token("colors.primary.100", "#EE05F2");
//!
//! let merged = merge(&base, &extension);
//! assert_eq!(merged.get("colors.primary.100").and_then(|v| v.as_str()), Some("#EE05F2"));
//! assert_eq!(merged.get("colors.primary.200").and_then(|v| v.as_str()), Some("#111111"));
//! ```

use log::debug;

use super::ThemeError;
use super::config::ThemeConfig;
use super::validate::validate_theme;
use super::value::{TokenMap, TokenValue};

/// Deep-merge `extension` into `base`, returning a new theme
///
/// Neither input is modified. Categories missing from `extension` are
/// copied from `base` unchanged; unknown categories pass through.
#[must_use]
pub fn merge(base: &ThemeConfig, extension: &ThemeConfig) -> ThemeConfig {
    if base.is_empty() {
        debug!("merging into an empty base theme");
    }
    let merged = ThemeConfig::from_map(merge_maps(base.as_map(), extension.as_map()));
    debug!(
        "merged {} base token(s) with {} extension token(s) into {}",
        base.token_count(),
        extension.token_count(),
        merged.token_count()
    );
    merged
}

/// Like [`merge`], then validate every leaf of the result as a CSS value
///
/// # Errors
///
/// Returns [`ThemeError::MalformedToken`] for the first leaf (in path order)
/// that is not a usable CSS value expression.
pub fn merge_strict(base: &ThemeConfig, extension: &ThemeConfig) -> Result<ThemeConfig, ThemeError> {
    let merged = merge(base, extension);
    validate_theme(&merged)?;
    Ok(merged)
}

/// Replace whole base categories with the ones declared in `overrides`
///
/// This is the non-`extend` form of a theme section: declaring
/// `theme.colors` drops every default color.
#[must_use]
pub fn replace_categories(base: &ThemeConfig, overrides: &ThemeConfig) -> ThemeConfig {
    let mut map = base.as_map().clone();
    for (category, value) in overrides.as_map() {
        debug!("replacing theme category `{category}`");
        map.insert(category.clone(), value.clone());
    }
    ThemeConfig::from_map(map)
}

fn merge_maps(base: &TokenMap, extension: &TokenMap) -> TokenMap {
    let mut out = base.clone();
    for (key, ext_value) in extension {
        let next = match (out.get(key), ext_value) {
            (Some(TokenValue::Map(base_inner)), TokenValue::Map(ext_inner)) => {
                TokenValue::Map(merge_maps(base_inner, ext_inner))
            },
            _ => ext_value.clone(),
        };
        out.insert(key.clone(), next);
    }
    out
}

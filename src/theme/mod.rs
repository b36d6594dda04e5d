//! Design-token themes
//!
//! Pure data and merge logic with no I/O:
//!
//! - [`TokenValue`] - tagged node of a token tree
//! - [`ThemeConfig`] - category name to token tree
//! - [`DesignToken`] - a flattened leaf with its dotted path
//! - [`merge`] / [`merge_strict`] - deep merge of a base theme and an extension
//! - [`default_theme`] - built-in base palette

mod config;
mod defaults;
mod merge;
mod validate;
mod value;

use thiserror::Error;

pub use config::{DEFAULT_KEY, DesignToken, ThemeConfig};
pub use defaults::default_theme;
pub use merge::{merge, merge_strict, replace_categories};
pub use validate::{check_css_value, validate_theme};
pub use value::{TokenMap, TokenValue};

/// Errors raised while merging themes
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A leaf value is not a usable CSS value expression
    #[error("malformed token `{path}` = `{value}`: {reason}")]
    MalformedToken {
        /// Dotted path of the offending token
        path: String,
        /// The rejected value
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

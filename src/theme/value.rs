//! Token tree values
//!
//! A [`TokenValue`] is one node of a design-token tree. Leaves are strings,
//! numbers or sequences; interior nodes are maps keyed by token name.
//!
//! # Examples
//!
//! ```
//! use stylecfg::theme::{TokenMap, TokenValue};
//!
//! let mut shades = TokenMap::new();
//! shades.insert("100".to_string(), TokenValue::from("#EE05F2"));
//! let primary = TokenValue::Map(shades);
//!
//! assert!(!primary.is_leaf());
//! assert_eq!(primary.as_map().and_then(|m| m.get("100")).and_then(TokenValue::as_str), Some("#EE05F2"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Nested token mapping, keyed by nominal token names
///
/// Numeric-looking keys such as `100` are plain strings; no ordinal meaning
/// is attached to them.
pub type TokenMap = BTreeMap<String, TokenValue>;

/// A node in a design-token tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Literal CSS value (`#EE05F2`, `linear-gradient(...)`)
    String(String),
    /// Integer value (line heights, z-index, opacity steps)
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Ordered list of values, e.g. a font stack. Merged as a single leaf.
    Sequence(Vec<TokenValue>),
    /// Nested group of tokens
    Map(TokenMap),
}

impl TokenValue {
    /// Whether this value is a leaf (anything but a map)
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        !matches!(self, Self::Map(_))
    }

    /// Get the string value, if this is a string leaf
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the nested map, if this is a map
    #[must_use]
    pub const fn as_map(&self) -> Option<&TokenMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Human-readable name of the variant, used in error messages
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Sequence(_) => "sequence",
            Self::Map(_) => "map",
        }
    }
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Sequence(items) => {
                let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "{}", rendered.join(", "))
            },
            Self::Map(map) => {
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                write!(f, "{{{}}}", keys.join(", "))
            },
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for TokenValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<TokenMap> for TokenValue {
    fn from(value: TokenMap) -> Self {
        Self::Map(value)
    }
}

impl From<Vec<TokenValue>> for TokenValue {
    fn from(value: Vec<TokenValue>) -> Self {
        Self::Sequence(value)
    }
}

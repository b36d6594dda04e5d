//! Theme configuration and design tokens
//!
//! A [`ThemeConfig`] maps category names (`colors`, `backgroundImage`, ...) to
//! token trees. [`DesignToken`]s are the flattened leaves of that tree.
//!
//! # Examples
//!
//! ```
//! use stylecfg::theme::ThemeConfig;
//!
//! let theme = ThemeConfig::new()
//!     .with_token("colors.primary.100", "#EE05F2")
//!     .with_token("colors.background.DEFAULT", "#444444");
//!
//! assert_eq!(theme.get("colors.primary.100").and_then(|v| v.as_str()), Some("#EE05F2"));
//!
//! let names: Vec<String> = theme.tokens().iter().map(|t| t.utility_name()).collect();
//! assert_eq!(names, vec!["background", "primary-100"]);
//! ```

use serde::{Deserialize, Serialize};

use super::value::{TokenMap, TokenValue};

/// Segment name that marks the default entry of a token group
pub const DEFAULT_KEY: &str = "DEFAULT";

/// A theme: category name to token tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeConfig(TokenMap);

/// A single named leaf of a theme
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignToken {
    /// Path segments, starting with the category (`["colors", "primary", "100"]`)
    pub path: Vec<String>,
    /// Leaf value
    pub value: TokenValue,
}

impl ThemeConfig {
    /// Create an empty theme
    #[must_use]
    pub const fn new() -> Self {
        Self(TokenMap::new())
    }

    /// Wrap an existing category map
    #[must_use]
    pub const fn from_map(map: TokenMap) -> Self {
        Self(map)
    }

    /// Borrow the underlying category map
    #[must_use]
    pub const fn as_map(&self) -> &TokenMap {
        &self.0
    }

    /// Consume the theme, returning the category map
    #[must_use]
    pub fn into_map(self) -> TokenMap {
        self.0
    }

    /// True when the theme declares no categories
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Category names in sorted order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Get a category's token tree
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&TokenValue> {
        self.0.get(name)
    }

    /// Look up a value by dotted path (`colors.primary.100`)
    ///
    /// Keys that themselves contain dots must be looked up with
    /// [`ThemeConfig::get_path`].
    #[must_use]
    pub fn get(&self, dotted: &str) -> Option<&TokenValue> {
        let segments: Vec<&str> = dotted.split('.').collect();
        self.get_path(&segments)
    }

    /// Look up a value by explicit path segments
    #[must_use]
    pub fn get_path(&self, segments: &[&str]) -> Option<&TokenValue> {
        let (first, rest) = segments.split_first()?;
        let mut current = self.0.get(*first)?;
        for segment in rest {
            current = current.as_map()?.get(*segment)?;
        }
        Some(current)
    }

    /// Insert a value at a dotted path, creating intermediate groups
    ///
    /// A leaf sitting where a group is needed is replaced by the group.
    #[must_use]
    pub fn with_token(mut self, dotted: &str, value: impl Into<TokenValue>) -> Self {
        let segments: Vec<&str> = dotted.split('.').collect();
        insert_path(&mut self.0, &segments, value.into());
        self
    }

    /// Replace a whole category
    #[must_use]
    pub fn with_category(mut self, name: &str, value: impl Into<TokenValue>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    /// Flatten the theme into its leaf tokens, sorted by path
    #[must_use]
    pub fn tokens(&self) -> Vec<DesignToken> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        collect_leaves(&self.0, &mut prefix, &mut out);
        out
    }

    /// Number of leaf tokens
    #[must_use]
    pub fn token_count(&self) -> usize {
        fn count(map: &TokenMap) -> usize {
            map.values()
                .map(|v| match v {
                    TokenValue::Map(inner) => count(inner),
                    _ => 1,
                })
                .sum()
        }
        count(&self.0)
    }
}

fn insert_path(map: &mut TokenMap, segments: &[&str], value: TokenValue) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };
    if rest.is_empty() {
        map.insert((*first).to_string(), value);
        return;
    }
    let entry =
        map.entry((*first).to_string()).or_insert_with(|| TokenValue::Map(TokenMap::new()));
    if !matches!(entry, TokenValue::Map(_)) {
        *entry = TokenValue::Map(TokenMap::new());
    }
    if let TokenValue::Map(inner) = entry {
        insert_path(inner, rest, value);
    }
}

fn collect_leaves(map: &TokenMap, prefix: &mut Vec<String>, out: &mut Vec<DesignToken>) {
    for (key, value) in map {
        prefix.push(key.clone());
        match value {
            TokenValue::Map(inner) => collect_leaves(inner, prefix, out),
            leaf => out.push(DesignToken {
                path: prefix.clone(),
                value: leaf.clone(),
            }),
        }
        prefix.pop();
    }
}

impl DesignToken {
    /// Create a token from a dotted path
    #[must_use]
    pub fn new(dotted: &str, value: impl Into<TokenValue>) -> Self {
        Self {
            path: dotted.split('.').map(String::from).collect(),
            value: value.into(),
        }
    }

    /// Dotted form of the path (`colors.primary.100`)
    #[must_use]
    pub fn dotted(&self) -> String {
        self.path.join(".")
    }

    /// Category this token belongs to
    #[must_use]
    pub fn category(&self) -> &str {
        self.path.first().map_or("", String::as_str)
    }

    /// Suffix a generator appends to a utility prefix
    ///
    /// The category is dropped and the remaining segments are joined with
    /// `-`. A trailing `DEFAULT` segment is dropped as well, so
    /// `colors.background.DEFAULT` yields `background`. An empty string means
    /// the bare utility (`borderRadius.DEFAULT`).
    #[must_use]
    pub fn utility_name(&self) -> String {
        let mut segments: Vec<&str> = self.path.iter().skip(1).map(String::as_str).collect();
        if segments.last() == Some(&DEFAULT_KEY) {
            segments.pop();
        }
        segments.join("-")
    }
}

impl std::fmt::Display for DesignToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.dotted(), self.value)
    }
}

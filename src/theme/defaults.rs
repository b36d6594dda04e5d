//! Built-in base theme
//!
//! A compact default palette used as the merge base when no `--base` file is
//! given. User configuration extends or replaces these categories.

use super::config::ThemeConfig;
use super::value::{TokenMap, TokenValue};

const GRAY: [(&str, &str); 10] = [
    ("50", "#f9fafb"),
    ("100", "#f3f4f6"),
    ("200", "#e5e7eb"),
    ("300", "#d1d5db"),
    ("400", "#9ca3af"),
    ("500", "#6b7280"),
    ("600", "#4b5563"),
    ("700", "#374151"),
    ("800", "#1f2937"),
    ("900", "#111827"),
];

const RED: [(&str, &str); 10] = [
    ("50", "#fef2f2"),
    ("100", "#fee2e2"),
    ("200", "#fecaca"),
    ("300", "#fca5a5"),
    ("400", "#f87171"),
    ("500", "#ef4444"),
    ("600", "#dc2626"),
    ("700", "#b91c1c"),
    ("800", "#991b1b"),
    ("900", "#7f1d1d"),
];

const BLUE: [(&str, &str); 10] = [
    ("50", "#eff6ff"),
    ("100", "#dbeafe"),
    ("200", "#bfdbfe"),
    ("300", "#93c5fd"),
    ("400", "#60a5fa"),
    ("500", "#3b82f6"),
    ("600", "#2563eb"),
    ("700", "#1d4ed8"),
    ("800", "#1e40af"),
    ("900", "#1e3a8a"),
];

fn scale(entries: &[(&str, &str)]) -> TokenValue {
    let map: TokenMap =
        entries.iter().map(|(k, v)| ((*k).to_string(), TokenValue::from(*v))).collect();
    TokenValue::Map(map)
}

/// The default base theme
#[must_use]
pub fn default_theme() -> ThemeConfig {
    let mut colors = TokenMap::new();
    colors.insert("inherit".to_string(), TokenValue::from("inherit"));
    colors.insert("current".to_string(), TokenValue::from("currentColor"));
    colors.insert("transparent".to_string(), TokenValue::from("transparent"));
    colors.insert("black".to_string(), TokenValue::from("#000"));
    colors.insert("white".to_string(), TokenValue::from("#fff"));
    colors.insert("gray".to_string(), scale(&GRAY));
    colors.insert("red".to_string(), scale(&RED));
    colors.insert("blue".to_string(), scale(&BLUE));

    ThemeConfig::new()
        .with_category("colors", colors)
        .with_token("backgroundImage.none", "none")
}

//! CSS value validation for strict merges
//!
//! This is a shallow syntactic check, not a CSS parser. A value is split into
//! top-level components (on whitespace, `,` and `/`, respecting parentheses and
//! quotes) and each component must look like one of:
//!
//! - a hex color (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`)
//! - a number or dimension (`120deg`, `0.5rem`, `50%`)
//! - an identifier or custom property (`transparent`, `--brand`)
//! - a quoted string
//! - a function call whose arguments are themselves valid (`rgb(0 0 0 / 50%)`)
//! - an arithmetic operator inside `calc()` and friends

use std::sync::LazyLock;

use regex::Regex;

use super::ThemeError;
use super::config::ThemeConfig;
use super::value::TokenValue;

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("hex regex is valid")
});

static DIMENSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?(?:%|[a-zA-Z]+)?$")
        .expect("dimension regex is valid")
});

static IDENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:--|-)?[a-zA-Z_][a-zA-Z0-9_-]*$").expect("identifier regex is valid")
});

static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(-?[a-zA-Z_][a-zA-Z0-9_-]*)\((.*)\)$").expect("function regex is valid")
});

/// Validate every string leaf of a theme, in path order
///
/// # Errors
///
/// Returns [`ThemeError::MalformedToken`] for the first invalid leaf.
pub fn validate_theme(theme: &ThemeConfig) -> Result<(), ThemeError> {
    for token in theme.tokens() {
        validate_leaf(&token.value).map_err(|reason| ThemeError::MalformedToken {
            path: token.dotted(),
            value: token.value.to_string(),
            reason,
        })?;
    }
    Ok(())
}

fn validate_leaf(value: &TokenValue) -> Result<(), String> {
    match value {
        TokenValue::String(s) => check_css_value(s),
        TokenValue::Integer(_) | TokenValue::Float(_) => Ok(()),
        TokenValue::Sequence(items) => {
            if items.is_empty() {
                return Err("empty sequence".to_string());
            }
            items.iter().try_for_each(validate_leaf)
        },
        TokenValue::Map(_) => Err("nested group where a value was expected".to_string()),
    }
}

/// Check that a string is a plausible CSS value expression
///
/// # Errors
///
/// Returns a short human-readable reason when the value is rejected.
pub fn check_css_value(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty value".to_string());
    }
    for component in split_components(trimmed)? {
        check_component(component)?;
    }
    Ok(())
}

fn check_component(component: &str) -> Result<(), String> {
    if is_quoted(component)
        || HEX_RE.is_match(component)
        || DIMENSION_RE.is_match(component)
        || IDENT_RE.is_match(component)
        || matches!(component, "+" | "-" | "*")
    {
        return Ok(());
    }

    if component.starts_with('#') {
        return Err(format!("invalid hex color `{component}`"));
    }

    if let Some(caps) = FUNCTION_RE.captures(component) {
        let name = &caps[1];
        let args = caps[2].trim();
        if args.is_empty() {
            return Err(format!("`{name}()` has no arguments"));
        }
        // url() takes an opaque argument
        if name.eq_ignore_ascii_case("url") {
            return Ok(());
        }
        return check_css_value(args);
    }

    Err(format!("unrecognized component `{component}`"))
}

fn is_quoted(component: &str) -> bool {
    component.len() >= 2
        && ((component.starts_with('"') && component.ends_with('"'))
            || (component.starts_with('\'') && component.ends_with('\'')))
}

/// Split a value on top-level separators
fn split_components(value: &str) -> Result<Vec<&str>, String> {
    let mut components = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start: Option<usize> = None;

    for (i, c) in value.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => {
                quote = Some(c);
                start.get_or_insert(i);
            },
            '(' => {
                depth += 1;
                start.get_or_insert(i);
            },
            ')' => {
                if depth == 0 {
                    return Err("unbalanced `)`".to_string());
                }
                depth -= 1;
            },
            '{' | '}' | ';' if depth == 0 => {
                return Err(format!("unexpected `{c}`"));
            },
            c if depth == 0 && (c.is_whitespace() || c == ',' || c == '/') => {
                if let Some(s) = start.take() {
                    components.push(&value[s..i]);
                }
            },
            _ => {
                start.get_or_insert(i);
            },
        }
    }

    if quote.is_some() {
        return Err("unterminated string".to_string());
    }
    if depth > 0 {
        return Err("unclosed `(`".to_string());
    }
    if let Some(s) = start {
        components.push(&value[s..]);
    }
    Ok(components)
}

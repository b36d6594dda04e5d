//! Content pattern parsing
//!
//! A [`ContentPattern`] is one entry of the `content` list, compiled into one
//! or more glob expansions. Supported syntax:
//!
//! - `*` matches within one path segment, `?` one character, `[...]` a class
//! - `**` matches zero or more whole segments
//! - `{a,b}` brace alternatives, expanded before compiling
//! - a leading `!` turns the pattern into an exclusion
//! - a trailing `/` means everything below that directory
//!
//! A `**` that is not a whole segment (`src/*/**.rs`) is read as a single `*`.
//!
//! # Examples
//!
//! ```
//! use stylecfg::content::ContentPattern;
//!
//! let p = ContentPattern::parse("src/**/*.{rs,html}").unwrap();
//! assert_eq!(p.expansions().len(), 2);
//! assert!(p.matches("src/components/card.rs"));
//! assert!(p.matches("src/index.html"));
//! assert!(!p.matches("tests/app.rs"));
//!
//! let single = ContentPattern::parse("src/*.rs").unwrap();
//! assert!(single.matches("src/main.rs"));
//! assert!(!single.matches("src/lib/util.rs"));
//! ```

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use log::debug;

use super::ResolveError;

/// Upper bound on brace expansions for a single pattern
const MAX_EXPANSIONS: usize = 256;

/// Match options shared by every expansion
pub(crate) const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// A parsed entry of the `content` list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPattern {
    /// The pattern as written
    raw: String,

    /// Whether this is an exclusion (`!pattern`)
    negated: bool,

    /// Brace-expanded, compiled globs
    expansions: Vec<GlobExpansion>,
}

/// One compiled glob produced from a [`ContentPattern`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobExpansion {
    /// Normalized glob text
    source: String,

    /// Compiled matcher
    pattern: Pattern,

    /// Literal directory prefix, relative to the root
    base: PathBuf,

    /// Walk depth below `base`; `None` when the glob contains `**`
    max_depth: Option<usize>,

    /// True when the glob has no wildcards at all
    literal: bool,
}

impl ContentPattern {
    /// Parse and compile a pattern
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidPattern`] if the pattern is empty, is
    /// absolute, climbs out of the root with `..`, has unbalanced braces, or
    /// cannot be compiled as a glob.
    pub fn parse(raw: &str) -> Result<Self, ResolveError> {
        let trimmed = raw.trim();
        let invalid = |reason: &str| ResolveError::InvalidPattern {
            pattern: raw.to_string(),
            reason: reason.to_string(),
        };

        let (negated, body) = trimmed
            .strip_prefix('!')
            .map_or((false, trimmed), |rest| (true, rest.trim_start()));

        let mut body = body.replace('\\', "/");
        while body.contains("//") {
            body = body.replace("//", "/");
        }
        while let Some(rest) = body.strip_prefix("./") {
            body = rest.to_string();
        }
        if body.is_empty() {
            return Err(invalid("empty pattern"));
        }
        if body.starts_with('/') {
            return Err(invalid("pattern must be relative to the root"));
        }
        if body.split('/').any(|segment| segment == "..") {
            return Err(invalid("pattern must not leave the root"));
        }
        if body.ends_with('/') {
            body.push_str("**");
        }

        let expanded = expand_braces(&body).map_err(|reason| invalid(&reason))?;
        let mut expansions = Vec::with_capacity(expanded.len());
        for source in expanded {
            let source = normalize_double_star(&source);
            let pattern = Pattern::new(&source).map_err(|e| invalid(e.msg))?;
            let (base, max_depth, literal) = walk_bounds(&source);
            debug!("content pattern `{raw}` -> `{source}` (base `{}`)", base.display());
            expansions.push(GlobExpansion {
                source,
                pattern,
                base,
                max_depth,
                literal,
            });
        }

        Ok(Self {
            raw: raw.to_string(),
            negated,
            expansions,
        })
    }

    /// Parse a list of patterns, failing on the first invalid one
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidPattern`] for the first bad entry.
    pub fn parse_all<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Self>, ResolveError> {
        patterns.iter().map(|p| Self::parse(p.as_ref())).collect()
    }

    /// The pattern as written
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether this pattern excludes files
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Compiled expansions
    #[must_use]
    pub fn expansions(&self) -> &[GlobExpansion] {
        &self.expansions
    }

    /// Check whether a root-relative path matches any expansion
    ///
    /// The `!` prefix is ignored here; callers decide what a match means.
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let normalized = normalize_path(path.as_ref());
        self.expansions.iter().any(|g| g.matches_str(&normalized))
    }
}

impl GlobExpansion {
    /// Normalized glob text
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Directory the walk starts from, relative to the root
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Maximum walk depth below [`GlobExpansion::base`]
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// True when the glob names a single file without wildcards
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        self.literal
    }

    /// Check a root-relative path against this glob
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        self.matches_str(&normalize_path(path.as_ref()))
    }

    fn matches_str(&self, path: &str) -> bool {
        self.pattern.matches_with(path, MATCH_OPTIONS)
    }
}

impl std::fmt::Display for ContentPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn has_meta(segment: &str) -> bool {
    segment.contains(['*', '?', '['])
}

/// Literal directory prefix, depth bound and literal flag for a glob
fn walk_bounds(source: &str) -> (PathBuf, Option<usize>, bool) {
    let segments: Vec<&str> = source.split('/').filter(|s| !s.is_empty()).collect();
    let dirs = &segments[..segments.len().saturating_sub(1)];
    let literal_dirs = dirs.iter().take_while(|s| !has_meta(s)).count();

    let base: PathBuf = segments[..literal_dirs].iter().collect();
    let rest = &segments[literal_dirs..];
    let literal = !rest.iter().any(|s| has_meta(s));
    let max_depth = if rest.contains(&"**") { None } else { Some(rest.len()) };
    (base, max_depth, literal)
}

/// Read `**` that is not a whole segment as `*`
fn normalize_double_star(source: &str) -> String {
    source
        .split('/')
        .map(|segment| {
            if segment == "**" || !segment.contains("**") {
                segment.to_string()
            } else {
                let mut out = String::with_capacity(segment.len());
                let mut prev_star = false;
                for c in segment.chars() {
                    if c == '*' && prev_star {
                        continue;
                    }
                    prev_star = c == '*';
                    out.push(c);
                }
                out
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Expand `{a,b}` alternatives, innermost groups included
fn expand_braces(pattern: &str) -> Result<Vec<String>, String> {
    let Some(open) = pattern.find('{') else {
        if pattern.contains('}') {
            return Err("unbalanced `}`".to_string());
        }
        return Ok(vec![pattern.to_string()]);
    };
    if pattern[..open].contains('}') {
        return Err("unbalanced `}`".to_string());
    }

    let mut depth = 0usize;
    let mut close = None;
    let mut splits = Vec::new();
    for (i, c) in pattern[open..].char_indices() {
        let idx = open + i;
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(idx);
                    break;
                }
            },
            ',' if depth == 1 => splits.push(idx),
            _ => {},
        }
    }
    let close = close.ok_or_else(|| "unbalanced `{`".to_string())?;

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    let mut bounds = vec![open];
    bounds.extend(splits);
    bounds.push(close);

    let mut out = Vec::new();
    for pair in bounds.windows(2) {
        let alternative = &pattern[pair[0] + 1..pair[1]];
        for expanded in expand_braces(&format!("{prefix}{alternative}{suffix}"))? {
            if out.len() >= MAX_EXPANSIONS {
                return Err(format!("more than {MAX_EXPANSIONS} brace expansions"));
            }
            out.push(expanded);
        }
    }
    Ok(out)
}

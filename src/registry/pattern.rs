//! Route pattern parsing and path splitting.
//!
//! A pattern is a `/`-separated template. Segments prefixed with `:` are
//! variables that bind exactly one path segment; everything else is a literal
//! compared byte-for-byte. Empty segments are dropped on both sides, so
//! `/creators/` and `//creators` behave like `/creators`.

use std::collections::HashSet;
use std::fmt;

use super::error::RouteError;

/// Prefix marking a variable segment, e.g. `:projectId`.
const PARAM_SIGIL: char = ':';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Segment {
    Literal(String),
    Param(String),
}

/// Parsed route pattern. Keeps the source text for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidPattern`] when the pattern does not start
    /// with `/`, has a variable with an empty name, or repeats a variable name.
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let invalid = |reason| RouteError::InvalidPattern { pattern: raw.to_owned(), reason };

        if !raw.starts_with('/') {
            return Err(invalid("pattern must start with '/'"));
        }
        if raw.contains(['?', '#']) {
            return Err(invalid("pattern must not contain a query or fragment"));
        }

        let mut seen = HashSet::new();
        let mut segments = Vec::new();
        for part in raw.split('/').filter(|s| !s.is_empty()) {
            match part.strip_prefix(PARAM_SIGIL) {
                Some("") => return Err(invalid("variable segment needs a name")),
                Some(name) => {
                    if !seen.insert(name) {
                        return Err(invalid("variable name used more than once"));
                    }
                    segments.push(Segment::Param(name.to_owned()));
                }
                None => segments.push(Segment::Literal(part.to_owned())),
            }
        }

        Ok(Self { raw: raw.to_owned(), segments })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Variable names in positional order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split a concrete URL path into its non-empty segments, ignoring any
/// `?query` or `#fragment` suffix.
pub(crate) fn path_segments(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod tests;

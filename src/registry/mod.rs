//! Route registry: URL path patterns mapped to render handlers.
//!
//! DESIGN
//! ======
//! Patterns are stored in a segment trie. Each node has literal children
//! keyed by segment text and at most one variable child, so two patterns with
//! the same shape (`/preview/:a`, `/preview/:b`) land on the same leaf and are
//! rejected as duplicates.
//!
//! Resolution walks the trie depth-first, trying the literal child before the
//! variable child at every position. When the literal branch dead-ends deeper
//! in the path, the walk backtracks and tries the variable branch, so a static
//! route shadows a variable one only where both can actually match.
//!
//! The registry is built once at startup and shared read-only afterwards.

mod error;
mod params;
mod pattern;

use std::collections::HashMap;

pub use error::RouteError;
pub use params::RouteParams;
pub use pattern::RoutePattern;

use pattern::{Segment, path_segments};

/// A registered pattern together with its handler.
#[derive(Debug)]
pub struct RouteEntry<H> {
    pub pattern: RoutePattern,
    pub handler: H,
}

/// Successful resolution of a concrete path.
#[derive(Debug)]
pub struct Resolved<'r, H> {
    pub pattern: &'r RoutePattern,
    pub handler: &'r H,
    pub params: RouteParams,
}

#[derive(Debug, Default)]
struct Node {
    literals: HashMap<String, Node>,
    param: Option<Box<Node>>,
    /// Index into `RouteRegistry::entries` when a pattern ends here.
    entry: Option<usize>,
}

#[derive(Debug)]
pub struct RouteRegistry<H> {
    root: Node,
    entries: Vec<RouteEntry<H>>,
}

impl<H> Default for RouteRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteRegistry<H> {
    #[must_use]
    pub fn new() -> Self {
        Self { root: Node::default(), entries: Vec::new() }
    }

    /// Register `handler` under `pattern`.
    ///
    /// # Errors
    ///
    /// - [`RouteError::InvalidPattern`] if the pattern is malformed.
    /// - [`RouteError::DuplicateRoute`] if a pattern of the same shape is
    ///   already registered.
    pub fn register(&mut self, pattern: &str, handler: H) -> Result<(), RouteError> {
        let pattern = RoutePattern::parse(pattern)?;

        let mut node = &mut self.root;
        for segment in pattern.segments() {
            node = match segment {
                Segment::Literal(text) => node.literals.entry(text.clone()).or_default(),
                Segment::Param(_) => node.param.get_or_insert_with(Box::default).as_mut(),
            };
        }

        if let Some(existing) = node.entry {
            return Err(RouteError::DuplicateRoute {
                pattern: pattern.as_str().to_owned(),
                existing: self.entries[existing].pattern.as_str().to_owned(),
            });
        }

        node.entry = Some(self.entries.len());
        tracing::debug!(pattern = pattern.as_str(), "route registered");
        self.entries.push(RouteEntry { pattern, handler });
        Ok(())
    }

    /// Find the entry matching `path` and bind its variables.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NoMatch`] when no registered pattern matches.
    pub fn resolve(&self, path: &str) -> Result<Resolved<'_, H>, RouteError> {
        let segments = path_segments(path);
        let mut captured = Vec::with_capacity(segments.len());

        let index = match_node(&self.root, &segments, &mut captured)
            .ok_or_else(|| RouteError::NoMatch { path: path.to_owned() })?;

        let entry = &self.entries[index];
        let params = entry.pattern.param_names().zip(captured).collect();
        Ok(Resolved { pattern: &entry.pattern, handler: &entry.handler, params })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered patterns in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &RoutePattern> {
        self.entries.iter().map(|entry| &entry.pattern)
    }
}

/// Depth-first match, literal child first. `captured` holds the values bound
/// to variable segments along the current branch.
fn match_node<'p>(node: &Node, segments: &[&'p str], captured: &mut Vec<&'p str>) -> Option<usize> {
    let Some((&first, rest)) = segments.split_first() else {
        return node.entry;
    };

    if let Some(child) = node.literals.get(first) {
        if let Some(found) = match_node(child, rest, captured) {
            return Some(found);
        }
    }

    if let Some(child) = node.param.as_deref() {
        captured.push(first);
        if let Some(found) = match_node(child, rest, captured) {
            return Some(found);
        }
        captured.pop();
    }

    None
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

//! Navigation sequencing.
//!
//! DESIGN
//! ======
//! Every navigation gets a monotonically increasing sequence number. A render
//! started for an older navigation may still finish after a newer one began;
//! `complete` only applies a render whose ticket is the latest, and drops
//! the rest without touching navigator state.

/// Token for one navigation event. Consumed by [`Navigator::complete`].
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct NavigationTicket {
    seq: u64,
    path: String,
}

impl NavigationTicket {
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[derive(Debug, Default)]
pub struct Navigator {
    latest: u64,
    current_path: Option<String>,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a navigation to `path`, superseding any in-flight one.
    pub fn begin(&mut self, path: impl Into<String>) -> NavigationTicket {
        self.latest += 1;
        let ticket = NavigationTicket { seq: self.latest, path: path.into() };
        tracing::debug!(seq = ticket.seq, path = %ticket.path, "navigation started");
        ticket
    }

    #[must_use]
    pub fn is_current(&self, ticket: &NavigationTicket) -> bool {
        ticket.seq == self.latest
    }

    /// Apply `rendered` if `ticket` is still the latest navigation.
    /// Returns `None` for superseded navigations.
    pub fn complete<T>(&mut self, ticket: NavigationTicket, rendered: T) -> Option<T> {
        if !self.is_current(&ticket) {
            tracing::debug!(seq = ticket.seq, latest = self.latest, path = %ticket.path, "stale render discarded");
            return None;
        }
        self.current_path = Some(ticket.path);
        Some(rendered)
    }

    /// Path of the last navigation whose render was applied.
    #[must_use]
    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }
}

#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;

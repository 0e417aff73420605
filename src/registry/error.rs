//! Registry error type.

/// Error returned by [`RouteRegistry`](super::RouteRegistry) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A pattern with the same shape is already registered. Startup-time fault.
    #[error("route `{pattern}` conflicts with already registered route `{existing}`")]
    DuplicateRoute { pattern: String, existing: String },
    /// The pattern string is malformed. Startup-time fault.
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },
    /// No registered pattern matches the path.
    #[error("no route matches `{path}`")]
    NoMatch { path: String },
}

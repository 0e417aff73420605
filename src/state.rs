//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! route registry is built before the server starts and never mutated, so it
//! is shared behind an `Arc` with no lock.

use std::sync::Arc;

use crate::app::PageFn;
use crate::registry::RouteRegistry;

/// Clone is required by Axum; the registry is `Arc`-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RouteRegistry<PageFn>>,
}

impl AppState {
    #[must_use]
    pub fn new(registry: RouteRegistry<PageFn>) -> Self {
        Self { registry: Arc::new(registry) }
    }
}

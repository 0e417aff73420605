//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every path except `/healthz` falls through to the page renderer, which
//! consults the route registry. Unmatched paths get the not-found page with
//! a 404 rather than an Axum default body.

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Html;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::app;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback(render_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET <any path>` — resolve against the registry and render.
async fn render_page(State(state): State<AppState>, uri: Uri) -> (StatusCode, Html<String>) {
    let page = app::render_path(&state.registry, uri.path());
    (page.status, Html(page.html))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

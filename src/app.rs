//! Application route table and server-side page rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! `build_registry` is the single place where URL patterns are bound to
//! pages. `render_path` turns a request path into a full HTML document: the
//! matched page, or the not-found page with a 404 status. Matched documents
//! carry their route parameters as JSON so client code can pick them up
//! without re-parsing the URL.

use axum::http::StatusCode;
use leptos::prelude::*;

use crate::pages;
use crate::registry::{RouteError, RouteParams, RouteRegistry};

/// Render binding stored in the registry.
pub type PageFn = fn(&RouteParams) -> AnyView;

pub const CREATORS_ROUTE: &str = "/creators";
pub const PREVIEW_ROUTE: &str = "/preview/:projectId";
pub const PROFILE_ROUTE: &str = "/profile/:profileId";

const DOCUMENT_TITLE: &str = "Creator Portal";

/// Output of [`render_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub status: StatusCode,
    pub html: String,
}

/// Register every application route.
///
/// # Errors
///
/// Returns the first registration fault. Callers treat it as fatal.
pub fn build_registry() -> Result<RouteRegistry<PageFn>, RouteError> {
    let mut registry: RouteRegistry<PageFn> = RouteRegistry::new();
    registry.register(CREATORS_ROUTE, pages::creators::render)?;
    registry.register(PREVIEW_ROUTE, pages::preview::render)?;
    registry.register(PROFILE_ROUTE, pages::profile::render)?;
    Ok(registry)
}

/// Resolve `path` and render the resulting page as an HTML document.
#[must_use]
pub fn render_path(registry: &RouteRegistry<PageFn>, path: &str) -> RenderedPage {
    match registry.resolve(path) {
        Ok(resolved) => {
            tracing::debug!(%path, pattern = resolved.pattern.as_str(), params = ?resolved.params, "route resolved");
            let body = render_view(|| (resolved.handler)(&resolved.params));
            let state = params_script(&resolved.params);
            RenderedPage { status: StatusCode::OK, html: document(&body, &state) }
        }
        Err(e) => {
            tracing::info!(%path, error = %e, "no route matched");
            let body = render_view(|| pages::not_found::render(path));
            RenderedPage { status: StatusCode::NOT_FOUND, html: document(&body, "") }
        }
    }
}

/// Render a view to HTML inside a fresh reactive owner, dropped afterwards.
pub(crate) fn render_view(view: impl FnOnce() -> AnyView) -> String {
    let owner = Owner::new();
    owner.with(|| view().to_html())
}

/// Route parameters serialized for the client. `<` is escaped so a value can
/// never close the script element.
fn params_script(params: &RouteParams) -> String {
    let json = serde_json::to_string(params).unwrap_or_else(|_| "{}".to_owned());
    let json = json.replace('<', "\\u003c");
    format!(r#"<script id="route-params" type="application/json">{json}</script>"#)
}

fn document(body: &str, state: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/>\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\
         <title>{DOCUMENT_TITLE}</title></head><body>{body}{state}</body></html>"
    )
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;

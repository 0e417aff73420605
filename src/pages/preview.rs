//! Project preview page.

use leptos::prelude::*;

use crate::registry::RouteParams;

/// Route variable carrying the project identifier.
pub const PROJECT_ID: &str = "projectId";

#[component]
pub fn PreviewPage(project_id: String) -> impl IntoView {
    let data_id = project_id.clone();
    view! {
        <main class="preview-page" data-project-id=data_id>
            <h1>"Preview"</h1>
            <p class="preview-page__project">"Project " {project_id}</p>
        </main>
    }
}

pub fn render(params: &RouteParams) -> AnyView {
    let project_id = params.get(PROJECT_ID).unwrap_or_default().to_owned();
    view! { <PreviewPage project_id=project_id/> }.into_any()
}

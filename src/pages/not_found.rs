//! Fallback page for paths no route matches.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <main class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"Nothing lives at " <code>{path}</code> "."</p>
            <a href="/creators">"Browse creators"</a>
        </main>
    }
}

pub fn render(path: &str) -> AnyView {
    let path = path.to_owned();
    view! { <NotFoundPage path=path/> }.into_any()
}

//! Creators directory page. Placeholder until the directory has content.

use leptos::prelude::*;

use crate::registry::RouteParams;

#[component]
pub fn CreatorsPage() -> impl IntoView {
    view! {
        <main class="creators-page">
            <h1>"Creators"</h1>
            <p class="creators-page__placeholder">"Creator listings are coming soon."</p>
        </main>
    }
}

pub fn render(_params: &RouteParams) -> AnyView {
    view! { <CreatorsPage/> }.into_any()
}

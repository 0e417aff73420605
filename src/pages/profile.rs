//! Creator profile page.
//!
//! The route forwards `profileId` unchanged; the page does not look the
//! profile up, it only presents the identifier it was given.

use leptos::prelude::*;

use crate::registry::RouteParams;

/// Route variable carrying the profile identifier.
pub const PROFILE_ID: &str = "profileId";

#[component]
pub fn ProfilePage(profile_id: String) -> impl IntoView {
    let data_id = profile_id.clone();
    view! {
        <main class="profile-page" data-profile-id=data_id>
            <h1>"Profile"</h1>
            <ProfileCard profile_id=profile_id/>
        </main>
    }
}

#[component]
fn ProfileCard(profile_id: String) -> impl IntoView {
    view! {
        <section class="profile-card">
            <span class="profile-card__id">{profile_id}</span>
        </section>
    }
}

pub fn render(params: &RouteParams) -> AnyView {
    let profile_id = params.get(PROFILE_ID).unwrap_or_default().to_owned();
    view! { <ProfilePage profile_id=profile_id/> }.into_any()
}

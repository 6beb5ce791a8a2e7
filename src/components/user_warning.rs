//! User Warning Component

use leptos::prelude::*;

/// Shown instead of the list when the build has no user id
#[component]
pub fn UserWarning() -> impl IntoView {
    view! {
        <section class="section">
            <p class="title is-4">"Please set your user id"</p>
            <p class="subtitle">
                "Rebuild the app with " <code>"TODO_USER_ID"</code> " set to your user id."
            </p>
        </section>
    }
}

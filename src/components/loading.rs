//! Loading Component

use leptos::*;

/// Inline loading spinner shown while a panel is fetching.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner" />
        </div>
    }
}

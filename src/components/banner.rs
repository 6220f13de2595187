//! Banner Component
//!
//! The two named message regions: error and success. Each is hidden until a
//! message is set and falls back to a default text when the message is empty.

use leptos::*;

use crate::state::global::{GlobalState, DEFAULT_ERROR_MESSAGE, DEFAULT_SUCCESS_MESSAGE};

/// Error and success banner regions, driven by the global state.
#[component]
pub fn Banner() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let error = state.error;
    let success = state.success;

    view! {
        <div class="banner-region">
            {move || {
                error.get().map(|msg| {
                    let text = if msg.trim().is_empty() {
                        DEFAULT_ERROR_MESSAGE.to_string()
                    } else {
                        msg
                    };
                    view! { <BannerMessage message=text variant=BannerVariant::Error /> }
                })
            }}

            {move || {
                success.get().map(|msg| {
                    let text = if msg.trim().is_empty() {
                        DEFAULT_SUCCESS_MESSAGE.to_string()
                    } else {
                        msg
                    };
                    view! { <BannerMessage message=text variant=BannerVariant::Success /> }
                })
            }}
        </div>
    }
}

#[derive(Clone, Copy)]
enum BannerVariant {
    Success,
    Error,
}

#[component]
fn BannerMessage(
    #[prop(into)]
    message: String,
    variant: BannerVariant,
) -> impl IntoView {
    let (icon, class) = match variant {
        BannerVariant::Success => ("✓", "banner banner-success"),
        BannerVariant::Error => ("✕", "banner banner-error"),
    };

    view! {
        <div class=class role="alert">
            <span class="banner-icon">{icon}</span>
            <span class="banner-text">{message}</span>
        </div>
    }
}

//! Navigation Component
//!
//! Header navigation bar with brand and links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="topnav">
            <div class="topnav-inner">
                <A href="/" class="brand">
                    <span class="brand-mark">"+"</span>
                    <span class="brand-name">"WardView"</span>
                </A>

                <div class="nav-links">
                    <NavLink href="/" label="Patients" />
                    <NavLink href="/patients" label="Patient List" />
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A href=href class="nav-link" active_class="nav-link-active">
            {label}
        </A>
    }
}

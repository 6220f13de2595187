//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Banner, Nav};
use crate::pages::{PatientBoard, PatientDetail, PatientList};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="app">
                <Nav />

                // Error/success banners sit above the routed content, the
                // same two regions for every page.
                <Banner />

                <main class="content">
                    <Routes>
                        <Route path="/" view=PatientBoard />
                        <Route path="/patients" view=PatientList />
                        <Route path="/patient/:id" view=PatientDetail />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/" class="btn">"Back to patients"</A>
        </div>
    }
}

//! WardView Clinician Dashboard
//!
//! Browser frontend for remote patient monitoring, built with Leptos (WASM).
//!
//! # Features
//!
//! - Patient board and sortable patient list, refreshed on an interval
//! - Per-attribute measurement charts with threshold bands
//! - Questionnaire flag charts with response detail
//! - Inline threshold editing
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the clinician REST endpoints over HTTP; all
//! fetches within one gesture are awaited sequentially.

use leptos::*;

mod api;
mod app;
mod chart;
mod components;
mod format;
mod model;
mod pages;
mod state;
mod threshold;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}

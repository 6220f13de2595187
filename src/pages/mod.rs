//! Pages
//!
//! Top-level page components for each route.

pub mod board;
pub mod patient;
pub mod patients;

pub use board::PatientBoard;
pub use patient::PatientDetail;
pub use patients::PatientList;

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Keep the shared patient list fresh while the calling page is mounted.
///
/// Fetches once immediately, then re-schedules itself after each completed
/// fetch, so a slow server cannot pile up overlapping refreshes. The loop
/// stops when the page unmounts.
pub fn use_patient_polling() {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.set(false)
    });

    poll_patients(state, alive);
}

fn poll_patients(state: GlobalState, alive: Rc<Cell<bool>>) {
    if !alive.get() {
        return;
    }
    spawn_local(async move {
        state.loading.set(true);
        match api::fetch_patients().await {
            Ok(patients) => {
                state.error.set(None);
                state.patients.set(patients);
            }
            Err(err) => state.show_api_error(&err),
        }
        state.loading.set(false);

        if !alive.get() {
            return;
        }
        let millis = state.refresh_millis.get_untracked();
        Timeout::new(millis, move || poll_patients(state, alive)).forget();
    });
}

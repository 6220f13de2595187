//! Global Application State
//!
//! Reactive state management using Leptos signals: the shared patient list,
//! the loading flag and the error/success banner regions.

use leptos::*;

use crate::api::ApiError;
use crate::model::PatientSummary;

/// Shown in the error banner when the server supplied no message.
pub const DEFAULT_ERROR_MESSAGE: &str =
    "Please try to reload the page and if the problem still persists, \
     please contact the system administrator.";

/// Shown in the success banner when no message is supplied.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Successfully saved.";

/// How long the refresh timer waits between patient list fetches.
pub const DEFAULT_REFRESH_MILLIS: u32 = 30_000;

/// Global application state provided to all components.
#[derive(Clone)]
pub struct GlobalState {
    /// Patient summaries shared by the tile board and the table view.
    pub patients: RwSignal<Vec<PatientSummary>>,
    /// Global loading state.
    pub loading: RwSignal<bool>,
    /// Error banner message, `None` when hidden.
    pub error: RwSignal<Option<String>>,
    /// Success banner message, `None` when hidden.
    pub success: RwSignal<Option<String>>,
    /// Patient list refresh interval.
    pub refresh_millis: RwSignal<u32>,
}

/// Provide global state to the component tree.
pub fn provide_global_state() {
    let state = GlobalState {
        patients: create_rw_signal(Vec::new()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        refresh_millis: create_rw_signal(DEFAULT_REFRESH_MILLIS),
    };
    provide_context(state);
}

impl GlobalState {
    /// Show the error banner, hiding the success banner (auto-clears after a
    /// timeout).
    pub fn show_error(&self, message: &str) {
        self.success.set(None);
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Show the error banner with the generic default message.
    pub fn show_default_error(&self) {
        self.show_error(DEFAULT_ERROR_MESSAGE);
    }

    /// Show a failed request in the error banner: the server's message when
    /// it supplied one, the generic default otherwise.
    pub fn show_api_error(&self, err: &ApiError) {
        match &err.message {
            Some(m) => self.show_error(m),
            None => self.show_default_error(),
        }
    }

    /// Show the success banner, hiding the error banner (auto-clears after a
    /// timeout).
    pub fn show_success(&self, message: &str) {
        self.error.set(None);
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Hide both banner regions.
    pub fn clear_banners(&self) {
        self.error.set(None);
        self.success.set(None);
    }
}

//! Patient Board Page
//!
//! Tile view of every monitored patient, color-coded by overall status and
//! refreshed on the configured interval.

use leptos::*;

use crate::components::{Loading, PatientTile};
use crate::pages::use_patient_polling;
use crate::state::global::GlobalState;

#[component]
pub fn PatientBoard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    use_patient_polling();

    let patients = state.patients;
    let loading = state.loading;

    view! {
        <div class="page">
            <h1 class="page-title">"Patients"</h1>

            <div class="patient-tiles">
                {move || {
                    let list = patients.get();
                    if list.is_empty() {
                        if loading.get() {
                            view! { <Loading /> }.into_view()
                        } else {
                            view! {
                                <p class="empty-message">"No patients to display."</p>
                            }
                            .into_view()
                        }
                    } else {
                        list.into_iter()
                            .map(|patient| view! { <PatientTile patient=patient /> })
                            .collect_view()
                    }
                }}
            </div>
        </div>
    }
}

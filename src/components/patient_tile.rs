//! Patient Tile Component
//!
//! One tile on the patient board: date of birth, a status indicator and the
//! patient's name, styled by the overall monitoring status and linking to the
//! patient detail page.

use leptos::*;
use leptos_router::*;

use crate::format::date_dd_mmm_yyyy;
use crate::model::PatientSummary;

#[component]
pub fn PatientTile(patient: PatientSummary) -> impl IntoView {
    let style = patient.patient_status.tile_style();
    let href = format!("/patient/{}", patient.patient_uuid);
    let dob = date_dd_mmm_yyyy(patient.date_of_birth);
    let name = patient.full_name();

    view! {
        <A href=href class="patient-tile-link">
            <table class=format!("tile-view {}-tile", style)>
                <tr>
                    <th scope="col">{dob}</th>
                </tr>
                <tr>
                    <td class=format!("limit-indicator {}", style)></td>
                </tr>
                <tr>
                    <th scope="col">{name}</th>
                </tr>
            </table>
        </A>
    }
}

//! Patient Detail Page
//!
//! One measurement panel per monitored attribute for the patient selected
//! from the board or the list.

use leptos::*;
use leptos_router::*;

use crate::components::{MeasurementPanel, PairedMeasurementPanel, QuestionnairePanel};
use crate::format::{date_dd_mmm_yyyy, PLACEHOLDER};
use crate::model::PatientSummary;
use crate::pages::use_patient_polling;
use crate::state::global::GlobalState;

// Attribute identifiers from the server's attribute registry.
const ATTR_WEIGHT: u32 = 1;
const ATTR_SYSTOLIC: u32 = 2;
const ATTR_DIASTOLIC: u32 = 3;
const ATTR_PULSE: u32 = 4;
const ATTR_OXYGEN_SATURATION: u32 = 5;
const ATTR_QUESTIONNAIRE: u32 = 6;

// Suggested y-axis bounds for the blood pressure chart, wide enough to show
// both series against their bands.
const BP_SUGGESTED_MIN: f64 = 40.0;
const BP_SUGGESTED_MAX: f64 = 200.0;

#[component]
pub fn PatientDetail() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Keeps the header populated on a deep link straight to this page.
    use_patient_polling();

    let params = use_params_map();
    let patient_uuid =
        move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    // Header details come from the shared patient list; on a deep link the
    // list may not have arrived yet, so fall back to placeholders.
    let summary = create_memo(move |_| {
        let uuid = patient_uuid();
        state
            .patients
            .with(|list| list.iter().find(|p| p.patient_uuid == uuid).cloned())
    });

    view! {
        <div class="page">
            <PatientHeader summary=summary />

            {move || {
                let uuid = patient_uuid();
                view! {
                    <div class="panel-grid">
                        <MeasurementPanel
                            patient_uuid=uuid.clone()
                            attribute_id=ATTR_WEIGHT
                            attribute_name="Weight".to_string()
                        />
                        <MeasurementPanel
                            patient_uuid=uuid.clone()
                            attribute_id=ATTR_PULSE
                            attribute_name="Pulse".to_string()
                        />
                        <MeasurementPanel
                            patient_uuid=uuid.clone()
                            attribute_id=ATTR_OXYGEN_SATURATION
                            attribute_name="Oxygen saturation".to_string()
                        />
                        <PairedMeasurementPanel
                            patient_uuid=uuid.clone()
                            title="Blood pressure".to_string()
                            primary_attribute_id=ATTR_SYSTOLIC
                            primary_name="Systolic".to_string()
                            secondary_attribute_id=ATTR_DIASTOLIC
                            secondary_name="Diastolic".to_string()
                            suggested_min=BP_SUGGESTED_MIN
                            suggested_max=BP_SUGGESTED_MAX
                        />
                        <QuestionnairePanel
                            patient_uuid=uuid
                            attribute_id=ATTR_QUESTIONNAIRE
                            title="Questionnaire responses".to_string()
                        />
                    </div>
                }
            }}
        </div>
    }
}

#[component]
fn PatientHeader(summary: Memo<Option<PatientSummary>>) -> impl IntoView {
    let name = move || {
        summary.with(|s| {
            s.as_ref()
                .map(|p| p.full_name())
                .unwrap_or_else(|| "Patient".to_string())
        })
    };
    let nhs_number = move || {
        summary.with(|s| {
            s.as_ref()
                .map(|p| p.nhs_number.clone())
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        })
    };
    let date_of_birth = move || {
        summary.with(|s| {
            s.as_ref()
                .map(|p| date_dd_mmm_yyyy(p.date_of_birth))
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        })
    };

    view! {
        <header class="patient-header">
            <h1 class="page-title">{name}</h1>
            <dl class="patient-details">
                <dt>"NHS number"</dt>
                <dd>{nhs_number}</dd>
                <dt>"Date of birth"</dt>
                <dd>{date_of_birth}</dd>
            </dl>
        </header>
    }
}

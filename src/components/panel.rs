//! Measurement Panels
//!
//! Per-attribute widgets on the patient detail page. Each panel owns one
//! fetch-map-render pass: measurements first, then the threshold, awaited
//! sequentially within the mount gesture, then the mapped chart, the
//! recent-value widget and the threshold editor.

use leptos::*;

use crate::api;
use crate::chart::{
    measurement_chart, paired_measurement_chart, questionnaire_chart, questionnaire_tooltip,
    ChartData,
};
use crate::components::chart::MeasurementChart;
use crate::components::recent_value::{PairedRecentValue, RecentValue};
use crate::components::threshold_editor::ThresholdEditorView;
use crate::model::Measurement;
use crate::state::global::GlobalState;
use crate::threshold::ThresholdEditor;

/// Panel for one single-valued attribute: chart with threshold bands, the
/// most recent reading and the inline threshold editor.
#[component]
pub fn MeasurementPanel(
    patient_uuid: String,
    attribute_id: u32,
    attribute_name: String,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let measurements = create_rw_signal(Vec::<Measurement>::new());
    let chart_data = create_rw_signal(measurement_chart(&[], &attribute_name));
    let editor = create_rw_signal(ThresholdEditor::new(None));

    let uuid_for_fetch = patient_uuid.clone();
    let name_for_fetch = attribute_name.clone();
    create_effect(move |_| {
        let state = state.clone();
        let patient_uuid = uuid_for_fetch.clone();
        let attribute_name = name_for_fetch.clone();
        spawn_local(async move {
            let series = match api::fetch_measurements(&patient_uuid, attribute_id).await {
                Ok(series) => series,
                Err(err) => {
                    state.show_api_error(&err);
                    return;
                }
            };
            // Threshold is fetched after the series completes; a 404 simply
            // means no threshold is configured.
            let threshold = match api::fetch_threshold(&patient_uuid, attribute_id).await {
                Ok(threshold) => threshold,
                Err(err) => {
                    state.show_api_error(&err);
                    None
                }
            };

            chart_data.set(measurement_chart(&series, &attribute_name));
            measurements.set(series);
            editor.set(ThresholdEditor::new(threshold.as_ref()));
        });
    });

    let last = Signal::derive(move || measurements.with(|s| s.last().cloned()));

    view! {
        <section class="panel">
            <h2 class="panel-title">{attribute_name.clone()}</h2>
            <RecentValue last=last />
            <MeasurementChart data=chart_data />
            <ThresholdEditorView
                patient_uuid=patient_uuid
                attribute_id=attribute_id
                editor=editor
            />
        </section>
    }
}

/// Panel for a paired attribute such as blood pressure: both series joined
/// by timestamp onto one chart, a combined recent reading and one threshold
/// editor per side.
#[component]
pub fn PairedMeasurementPanel(
    patient_uuid: String,
    title: String,
    primary_attribute_id: u32,
    primary_name: String,
    secondary_attribute_id: u32,
    secondary_name: String,
    suggested_min: f64,
    suggested_max: f64,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let primary_series = create_rw_signal(Vec::<Measurement>::new());
    let secondary_series = create_rw_signal(Vec::<Measurement>::new());
    let chart_data = create_rw_signal(ChartData {
        kind: crate::chart::ChartKind::Line,
        labels: Vec::new(),
        datasets: Vec::new(),
        suggested_min: Some(suggested_min),
        suggested_max: Some(suggested_max),
    });
    let primary_editor = create_rw_signal(ThresholdEditor::new(None));
    let secondary_editor = create_rw_signal(ThresholdEditor::new(None));

    let uuid_for_fetch = patient_uuid.clone();
    let primary_name_fetch = primary_name.clone();
    let secondary_name_fetch = secondary_name.clone();
    create_effect(move |_| {
        let state = state.clone();
        let patient_uuid = uuid_for_fetch.clone();
        let primary_name = primary_name_fetch.clone();
        let secondary_name = secondary_name_fetch.clone();
        spawn_local(async move {
            let primary = match api::fetch_measurements(&patient_uuid, primary_attribute_id).await
            {
                Ok(series) => series,
                Err(err) => {
                    state.show_api_error(&err);
                    return;
                }
            };
            let secondary =
                match api::fetch_measurements(&patient_uuid, secondary_attribute_id).await {
                    Ok(series) => series,
                    Err(err) => {
                        state.show_api_error(&err);
                        return;
                    }
                };
            let primary_threshold =
                match api::fetch_threshold(&patient_uuid, primary_attribute_id).await {
                    Ok(threshold) => threshold,
                    Err(err) => {
                        state.show_api_error(&err);
                        None
                    }
                };
            let secondary_threshold =
                match api::fetch_threshold(&patient_uuid, secondary_attribute_id).await {
                    Ok(threshold) => threshold,
                    Err(err) => {
                        state.show_api_error(&err);
                        None
                    }
                };

            chart_data.set(paired_measurement_chart(
                &primary,
                &secondary,
                &primary_name,
                &secondary_name,
                Some(suggested_min),
                Some(suggested_max),
            ));
            primary_series.set(primary);
            secondary_series.set(secondary);
            primary_editor.set(ThresholdEditor::new(primary_threshold.as_ref()));
            secondary_editor.set(ThresholdEditor::new(secondary_threshold.as_ref()));
        });
    });

    let last_primary = Signal::derive(move || primary_series.with(|s| s.last().cloned()));
    let last_secondary = Signal::derive(move || secondary_series.with(|s| s.last().cloned()));

    view! {
        <section class="panel">
            <h2 class="panel-title">{title}</h2>
            <PairedRecentValue primary=last_primary secondary=last_secondary />
            <MeasurementChart data=chart_data />
            <div class="threshold-pair">
                <div>
                    <h3 class="threshold-pair-title">{primary_name.clone()}</h3>
                    <ThresholdEditorView
                        patient_uuid=patient_uuid.clone()
                        attribute_id=primary_attribute_id
                        editor=primary_editor
                    />
                </div>
                <div>
                    <h3 class="threshold-pair-title">{secondary_name.clone()}</h3>
                    <ThresholdEditorView
                        patient_uuid=patient_uuid
                        attribute_id=secondary_attribute_id
                        editor=secondary_editor
                    />
                </div>
            </div>
        </section>
    }
}

/// Panel for questionnaire responses: flag bars with per-response colors and
/// a detail area showing the conversation and advice for a clicked bar.
#[component]
pub fn QuestionnairePanel(
    patient_uuid: String,
    attribute_id: u32,
    title: String,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let measurements = create_rw_signal(Vec::<Measurement>::new());
    let chart_data = create_rw_signal(questionnaire_chart(&[]));
    let selected = create_rw_signal(None::<usize>);

    let uuid_for_fetch = patient_uuid.clone();
    create_effect(move |_| {
        let state = state.clone();
        let patient_uuid = uuid_for_fetch.clone();
        spawn_local(async move {
            match api::fetch_measurements(&patient_uuid, attribute_id).await {
                Ok(series) => {
                    chart_data.set(questionnaire_chart(&series));
                    measurements.set(series);
                    selected.set(None);
                }
                Err(err) => state.show_api_error(&err),
            }
        });
    });

    let on_point_click = Callback::new(move |index: usize| selected.set(Some(index)));

    let detail = move || -> Option<Vec<String>> {
        let index = selected.get()?;
        measurements.with(|s| s.get(index).map(questionnaire_tooltip))
    };

    view! {
        <section class="panel">
            <h2 class="panel-title">{title}</h2>
            <MeasurementChart data=chart_data on_point_click=on_point_click />
            {move || {
                detail().map(|lines| view! {
                    <div class="questionnaire-detail">
                        {lines
                            .into_iter()
                            .map(|line| view! { <p>{line}</p> })
                            .collect_view()}
                    </div>
                })
            }}
        </section>
    }
}

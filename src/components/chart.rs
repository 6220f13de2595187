//! Chart Component
//!
//! Canvas-backed chart fed by a mapped [`ChartData`] bundle. Redraws through
//! an effect whenever the bundle changes.

use leptos::*;

use crate::chart::{draw, ChartData};

/// Canvas chart for one mapped series bundle. `on_point_click` reports the
/// label index under a click, for tooltip-style detail lookups.
#[component]
pub fn MeasurementChart(
    #[prop(into)]
    data: Signal<ChartData>,
    #[prop(optional)]
    on_point_click: Option<Callback<usize>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let bundle = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw::draw(&canvas, &bundle);
        }
    });

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(callback) = on_point_click else {
            return;
        };
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let labels = data.with(|d| d.labels.len());
        if let Some(index) =
            draw::point_index_at(canvas.width() as f64, labels, ev.offset_x() as f64)
        {
            callback.call(index);
        }
    };

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="measurement-chart"
            on:click=on_click
        />
    }
}

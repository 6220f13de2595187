//! Recent Value Widget
//!
//! Summary display of the most recent measurement in a series: reading time,
//! the value itself and a color class driven by the server's alert status.

use leptos::*;

use crate::format::{date_time_dd_mm_yyyy_hh_mm, PLACEHOLDER};
use crate::model::{paired_alert_css_class, Measurement};

/// Most recent reading for a single attribute.
#[component]
pub fn RecentValue(
    #[prop(into)]
    last: Signal<Option<Measurement>>,
) -> impl IntoView {
    let date = move || {
        last.with(|m| {
            m.as_ref()
                .map(|m| date_time_dd_mm_yyyy_hh_mm(m.data_time))
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        })
    };
    let value = move || {
        last.with(|m| {
            m.as_ref()
                .map(|m| m.value.clone())
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        })
    };
    let css_class = move || {
        last.with(|m| {
            m.as_ref()
                .map(|m| m.alert_status.css_class())
                .unwrap_or("amber")
        })
    };

    view! {
        <div class="recent-value">
            <span class="recent-value-date">{date}</span>
            <span class=css_class>{value}</span>
        </div>
    }
}

/// Most recent paired reading (e.g. systolic over diastolic). The primary
/// value renders underlined above the secondary.
#[component]
pub fn PairedRecentValue(
    #[prop(into)]
    primary: Signal<Option<Measurement>>,
    #[prop(into)]
    secondary: Signal<Option<Measurement>>,
) -> impl IntoView {
    let date = move || {
        primary.with(|m| {
            m.as_ref()
                .map(|m| date_time_dd_mm_yyyy_hh_mm(m.data_time))
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        })
    };
    let css_class = move || match (primary.get(), secondary.get()) {
        (Some(p), Some(s)) => paired_alert_css_class(p.alert_status, s.alert_status),
        _ => "amber",
    };

    view! {
        <div class="recent-value">
            <span class="recent-value-date">{date}</span>
            {move || match (primary.get(), secondary.get()) {
                (Some(p), Some(s)) => view! {
                    <span class=css_class>
                        <u>{p.value.clone()}</u>
                        <br/>
                        {s.value.clone()}
                    </span>
                }.into_view(),
                _ => view! {
                    <span class="amber">{PLACEHOLDER}</span>
                }.into_view(),
            }}
        </div>
    }
}

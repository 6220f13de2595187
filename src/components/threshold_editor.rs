//! Threshold Editor Component
//!
//! Inline display/edit toggle for one attribute's threshold bounds, wrapping
//! the pure state machine in [`crate::threshold`].

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;
use crate::threshold::{accept_keystroke, EditorMode, SaveAction, ThresholdEditor};

/// Inline threshold display with an edit mode. The owning panel holds the
/// editor signal so it can seed it from the fetched threshold.
#[component]
pub fn ThresholdEditorView(
    patient_uuid: String,
    attribute_id: u32,
    editor: RwSignal<ThresholdEditor>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let editing = move || editor.with(|e| e.mode() == EditorMode::Editing);

    let on_edit = Callback::new(move |_: ()| editor.update(|e| e.begin_edit()));

    let state_for_cancel = state.clone();
    let on_cancel = Callback::new(move |_: ()| {
        editor.update(|e| e.cancel());
        state_for_cancel.clear_banners();
    });

    let state_for_save = state.clone();
    let on_save = Callback::new(move |_: ()| {
        let mut action = SaveAction::NoChange;
        editor.update(|e| action = e.submit());
        let SaveAction::Submit { low, high } = action else {
            // Unchanged values: back to Viewing, nothing sent.
            state_for_save.clear_banners();
            return;
        };

        let state = state_for_save.clone();
        let patient_uuid = patient_uuid.clone();
        spawn_local(async move {
            match api::update_threshold(&patient_uuid, attribute_id, &low, &high).await {
                Ok(updated) => {
                    editor.update(|e| e.apply_update(&updated));
                    state.show_success("Thresholds have been updated.");
                }
                Err(err) => {
                    // The editor stays in Editing; the clinician's values
                    // are still on screen next to the error.
                    state.show_api_error(&err);
                }
            }
        });
    });

    view! {
        <div class="threshold-editor">
            <Show
                when=editing
                fallback=move || view! {
                    <div class="threshold-display">
                        <span class="threshold-label">"Min:"</span>
                        <span class="threshold-value">
                            {move || editor.with(|e| e.displayed_low().to_string())}
                        </span>
                        <span class="threshold-label">"Max:"</span>
                        <span class="threshold-value">
                            {move || editor.with(|e| e.displayed_high().to_string())}
                        </span>
                        <button class="btn btn-edit" on:click=move |_| on_edit.call(())>
                            "Modify thresholds"
                        </button>
                    </div>
                }
            >
                <div class="threshold-edit">
                    <label class="threshold-label">
                        "Min:"
                        <NumericInput
                            value=Signal::derive(move || editor.with(|e| e.draft_low().to_string()))
                            on_change=Callback::new(move |v: String| {
                                editor.update(|e| e.set_draft_low(v))
                            })
                        />
                    </label>
                    <label class="threshold-label">
                        "Max:"
                        <NumericInput
                            value=Signal::derive(move || editor.with(|e| e.draft_high().to_string()))
                            on_change=Callback::new(move |v: String| {
                                editor.update(|e| e.set_draft_high(v))
                            })
                        />
                    </label>
                    <button class="btn btn-save" on:click=move |_| on_save.call(())>"Update"</button>
                    <button class="btn btn-cancel" on:click=move |_| on_cancel.call(())>"Cancel"</button>
                </div>
            </Show>
        </div>
    }
}

/// Text input masked to digits and a single bounded decimal point. Cosmetic
/// only; the server validates the submitted values.
#[component]
fn NumericInput(
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let on_keypress = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        let mut chars = key.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            // Multi-character keys (Backspace, arrows) pass through.
            return;
        };
        if !accept_keystroke(&value.get_untracked(), ch) {
            ev.prevent_default();
        }
    };

    view! {
        <input
            type="text"
            class="threshold-input number"
            prop:value=move || value.get()
            on:keypress=on_keypress
            on:input=move |ev| on_change.call(event_target_value(&ev))
        />
    }
}

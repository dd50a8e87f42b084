//! Labelled multi-line text input bound to a string signal.

use leptos::prelude::*;

#[component]
pub fn TextArea(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] rows: u32,
) -> impl IntoView {
    let rows = if rows == 0 { 4 } else { rows };
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input field__input--area"
                placeholder=placeholder
                rows=rows.to_string()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

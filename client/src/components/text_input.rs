//! Labelled single-line text input bound to a string signal.

use leptos::prelude::*;

#[component]
pub fn TextInput(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text" } else { input_type };
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

//! Labelled select bound to a string signal.

use leptos::prelude::*;

/// `options` is a list of `(value, label)` pairs.
#[component]
pub fn SelectInput(
    label: &'static str,
    options: Vec<(String, String)>,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class="field__input"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let current = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == current
                            >
                                {option_label}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

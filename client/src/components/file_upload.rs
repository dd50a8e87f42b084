//! File picker that reports the selected file's name.
//!
//! Only the name crosses this boundary: extraction is mocked, so no file
//! contents are ever read.

use leptos::prelude::*;

#[component]
pub fn FileUpload(
    label: &'static str,
    accept: &'static str,
    /// Fired with the selected file name, or `None` when cleared.
    on_file: Callback<Option<String>>,
) -> impl IntoView {
    let file_name = RwSignal::new(None::<String>);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let name = input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            file_name.set(name.clone());
            on_file.run(name);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, on_file);
        }
    };

    view! {
        <div class="field">
            <span class="field__label">{label}</span>
            <input class="field__file" type="file" accept=accept on:change=on_change/>
            <Show when=move || file_name.get().is_some()>
                <p class="field__hint">{move || file_name.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

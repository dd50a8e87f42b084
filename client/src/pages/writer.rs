//! Article writer page: reference upload, preferences, generation, and
//! saving.
//!
//! SYSTEM CONTEXT
//! ==============
//! Generation is the client-side mock from `util::article_gen` behind a
//! simulated latency; saving requires a signed-in user and persists via
//! the articles table.

#[cfg(test)]
#[path = "writer_test.rs"]
mod writer_test;

use leptos::prelude::*;

use crate::components::file_upload::FileUpload;
use crate::components::markdown::ArticleMarkdown;
use crate::components::select_input::SelectInput;
use crate::components::text_area::TextArea;
use crate::components::text_input::TextInput;
use crate::net::session_api::Backend;
use crate::state::session::SessionSnapshot;
use crate::util::article_gen::{ArticleOptions, Style, Tone, generate_article, title_from_prompt};
use crate::util::doc_extract::extract_reference_text;
use crate::util::download;

const LENGTH_MIN: u32 = 200;
const LENGTH_MAX: u32 = 2000;
const LENGTH_DEFAULT: u32 = 500;

/// Parse the length slider value, clamping into the supported range.
fn parse_length(raw: &str) -> u32 {
    raw.trim()
        .parse::<u32>()
        .unwrap_or(LENGTH_DEFAULT)
        .clamp(LENGTH_MIN, LENGTH_MAX)
}

fn tone_options() -> Vec<(String, String)> {
    Tone::ALL
        .into_iter()
        .map(|tone| (tone.value().to_owned(), tone.label().to_owned()))
        .collect()
}

fn style_options() -> Vec<(String, String)> {
    Style::ALL
        .into_iter()
        .map(|style| (style.value().to_owned(), style.label().to_owned()))
        .collect()
}

#[component]
pub fn WriterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    let backend = StoredValue::new(expect_context::<Backend>());

    let reference = RwSignal::new(None::<String>);
    let prompt = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let tone = RwSignal::new(Tone::default().value().to_owned());
    let style = RwSignal::new(Style::default().value().to_owned());
    let length = RwSignal::new(LENGTH_DEFAULT);

    let generated = RwSignal::new(None::<String>);
    let generating = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let on_file = Callback::new(move |name: Option<String>| {
        reference.set(name.map(|n| extract_reference_text(&n)));
        error.set(None);
    });

    let on_generate = move |_| {
        if generating.get() {
            return;
        }
        let prompt_value = prompt.get().trim().to_owned();
        if prompt_value.is_empty() {
            error.set(Some("Please enter a prompt for your article.".to_owned()));
            return;
        }
        error.set(None);
        success.set(None);
        generating.set(true);

        let options = ArticleOptions {
            tone: Tone::from_value(&tone.get()),
            style: Style::from_value(&style.get()),
            length: length.get(),
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            // Simulated inference latency.
            gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
            let article =
                generate_article(reference.get_untracked().as_deref(), &prompt_value, &options);
            generated.set(Some(article));
            if title.get_untracked().trim().is_empty() {
                title.set(title_from_prompt(&prompt_value));
            }
            generating.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let article =
                generate_article(reference.get_untracked().as_deref(), &prompt_value, &options);
            generated.set(Some(article));
            if title.get_untracked().trim().is_empty() {
                title.set(title_from_prompt(&prompt_value));
            }
            generating.set(false);
        }
    };

    let on_save = move |_| {
        if saving.get() {
            return;
        }
        let Some(user) = session.get_untracked().user else {
            #[cfg(feature = "csr")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/auth");
                }
            }
            return;
        };
        let Some(article) = generated.get_untracked() else {
            error.set(Some("Please generate an article first.".to_owned()));
            return;
        };
        let title_value = title.get_untracked().trim().to_owned();
        if title_value.is_empty() {
            error.set(Some("Please enter a title for your article.".to_owned()));
            return;
        }
        error.set(None);
        success.set(None);
        saving.set(true);

        #[cfg(feature = "csr")]
        {
            let backend = backend.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::articles::save_article(&backend, &title_value, &article, &user.id)
                    .await
                {
                    Ok(()) => success.set(Some("Article saved successfully!".to_owned())),
                    Err(e) => error.set(Some(format!("Could not save the article: {e}"))),
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (backend, article, title_value, user);
            saving.set(false);
        }
    };

    let on_copy = move |_| {
        if let Some(article) = generated.get_untracked() {
            download::copy_to_clipboard(&article);
            success.set(Some("Content copied to clipboard!".to_owned()));
        }
    };

    let on_download = move |_| {
        if let Some(article) = generated.get_untracked() {
            download::download_text_file(&title.get_untracked(), &article);
        }
    };

    view! {
        <div class="writer-page">
            <header class="writer-page__header">
                <h1>"Wordsmith Article Writer"</h1>
                <p>
                    "Upload reference documents, set your preferences, and generate "
                    "high-quality articles."
                </p>
            </header>

            <section class="writer-card">
                <h2>"Input & Preferences"</h2>
                <FileUpload
                    label="Upload a PDF document (optional)"
                    accept=".pdf"
                    on_file=on_file
                />
                <TextArea
                    label="Your writing prompt"
                    value=prompt
                    placeholder="Describe what you want the AI to write about..."
                    rows=4
                />
                <div class="writer-card__options">
                    <SelectInput label="Tone" options=tone_options() value=tone/>
                    <SelectInput label="Style" options=style_options() value=style/>
                    <label class="field">
                        <span class="field__label">
                            {move || format!("Length ({} words)", length.get())}
                        </span>
                        <input
                            class="field__range"
                            type="range"
                            min=LENGTH_MIN.to_string()
                            max=LENGTH_MAX.to_string()
                            step="100"
                            prop:value=move || length.get().to_string()
                            on:input=move |ev| length.set(parse_length(&event_target_value(&ev)))
                        />
                    </label>
                </div>
                <button
                    class="btn btn--primary writer-card__generate"
                    on:click=on_generate
                    disabled=move || generating.get() || prompt.get().trim().is_empty()
                >
                    {move || if generating.get() { "Generating..." } else { "Generate Article" }}
                </button>
            </section>

            <Show when=move || generating.get() || generated.get().is_some()>
                <section class="writer-card">
                    <div class="writer-card__output-header">
                        <h2>"Generated Article"</h2>
                        <div class="writer-card__output-actions">
                            <button
                                class="btn"
                                on:click=on_copy
                                disabled=move || generating.get() || generated.get().is_none()
                            >
                                "Copy"
                            </button>
                            <button
                                class="btn"
                                on:click=on_download
                                disabled=move || generating.get() || generated.get().is_none()
                            >
                                "Download"
                            </button>
                        </div>
                    </div>
                    <TextInput
                        label="Article Title"
                        value=title
                        placeholder="Enter a title for your article"
                    />
                    <Show
                        when=move || !generating.get()
                        fallback=move || {
                            view! {
                                <div class="writer-card__spinner">
                                    <p>"Generating your article..."</p>
                                    <p class="writer-card__hint">"This may take a few moments"</p>
                                </div>
                            }
                        }
                    >
                        {move || {
                            generated
                                .get()
                                .map(|content| view! { <ArticleMarkdown content=content/> })
                        }}
                    </Show>
                    <button
                        class="btn btn--primary"
                        on:click=on_save
                        disabled=move || {
                            generating.get() || saving.get() || generated.get().is_none()
                        }
                    >
                        {move || if saving.get() { "Saving..." } else { "Save Article" }}
                    </button>
                    <Show when=move || session.get().user.is_none()>
                        <p class="writer-card__hint">"You'll need to sign in to save your article"</p>
                    </Show>
                </section>
            </Show>

            <Show when=move || error.get().is_some()>
                <p class="page-message page-message--error">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
            <Show when=move || success.get().is_some()>
                <p class="page-message page-message--success">
                    {move || success.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}

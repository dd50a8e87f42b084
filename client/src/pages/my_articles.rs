//! Saved-article library: list, preview, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. Loads the signed-in user's articles once the session
//! resolves, and keeps the list state in the shared `ArticlesState`
//! signal so deletes reflect immediately.

#[cfg(test)]
#[path = "my_articles_test.rs"]
mod my_articles_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::markdown::ArticleMarkdown;
#[cfg(feature = "csr")]
use crate::net::articles::{delete_article, fetch_user_articles};
use crate::net::session_api::Backend;
use crate::state::articles::ArticlesState;
use crate::state::session::SessionSnapshot;
use crate::util::auth::install_unauth_redirect;

/// Date portion of an ISO 8601 timestamp.
fn created_date(created_at: &str) -> String {
    created_at.split('T').next().unwrap_or(created_at).to_owned()
}

/// First paragraph-ish line of an article body, truncated for list cards.
fn preview_snippet(content: &str, max_chars: usize) -> String {
    let line = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .unwrap_or("");
    let mut snippet: String = line.chars().take(max_chars).collect();
    if line.chars().count() > max_chars {
        snippet.push_str("...");
    }
    snippet
}

#[component]
pub fn MyArticlesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    let articles = expect_context::<RwSignal<ArticlesState>>();
    let backend = StoredValue::new(expect_context::<Backend>());
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    // Preview modal state.
    let preview_id = RwSignal::new(None::<String>);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let Some(user) = session.get().user else {
            return;
        };
        requested.set(true);
        articles.update(|s| s.loading = true);

        #[cfg(feature = "csr")]
        {
            let backend = backend.get_value();
            leptos::task::spawn_local(async move {
                match fetch_user_articles(&backend, &user.id).await {
                    Ok(items) => articles.update(|s| {
                        s.items = items;
                        s.loading = false;
                        s.error = None;
                    }),
                    Err(message) => articles.update(|s| {
                        s.loading = false;
                        s.error = Some(message);
                    }),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (backend, user);
            articles.update(|s| s.loading = false);
        }
    });

    let on_delete_request = Callback::new(move |id: String| {
        articles.update(|s| s.pending_delete = Some(id));
    });
    let on_delete_cancel = Callback::new(move |()| {
        articles.update(|s| s.pending_delete = None);
    });

    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = articles.get_untracked().pending_delete else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let backend = backend.get_value();
            leptos::task::spawn_local(async move {
                match delete_article(&backend, &id).await {
                    Ok(()) => articles.update(|s| {
                        s.items.retain(|article| article.id != id);
                        s.pending_delete = None;
                        s.error = None;
                    }),
                    Err(message) => articles.update(|s| {
                        s.pending_delete = None;
                        s.error = Some(message);
                    }),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (backend, id);
            articles.update(|s| s.pending_delete = None);
        }
    });

    view! {
        <Show
            when=move || !session.get().loading && session.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="articles-page">
                        <p>
                            {move || {
                                if session.get().loading {
                                    "Loading..."
                                } else {
                                    "Redirecting to sign in..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="articles-page">
                <header class="articles-page__header">
                    <h1>"My Articles"</h1>
                    <a class="btn btn--primary" href="/writer">
                        "+ New Article"
                    </a>
                </header>

                <Show when=move || articles.get().error.is_some()>
                    <p class="page-message page-message--error">
                        {move || articles.get().error.unwrap_or_default()}
                    </p>
                </Show>

                <Show
                    when=move || !articles.get().loading
                    fallback=move || view! { <p>"Loading articles..."</p> }
                >
                    <Show
                        when=move || !articles.get().items.is_empty()
                        fallback=move || {
                            view! {
                                <div class="articles-page__empty">
                                    <h3>"No articles yet"</h3>
                                    <p>
                                        "You haven't created any articles yet. Start writing "
                                        "your first article now!"
                                    </p>
                                </div>
                            }
                        }
                    >
                        <div class="articles-page__cards">
                            {move || {
                                articles
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|article| {
                                        let open_id = article.id.clone();
                                        let delete_id = article.id.clone();
                                        view! {
                                            <div class="article-card">
                                                <h3>{article.title.clone()}</h3>
                                                <p class="article-card__date">
                                                    {created_date(&article.created_at)}
                                                </p>
                                                <p class="article-card__snippet">
                                                    {preview_snippet(&article.content, 140)}
                                                </p>
                                                <div class="article-card__actions">
                                                    <button
                                                        class="btn"
                                                        on:click=move |_| {
                                                            preview_id.set(Some(open_id.clone()))
                                                        }
                                                    >
                                                        "View"
                                                    </button>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| {
                                                            on_delete_request.run(delete_id.clone())
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>

                <Show when=move || preview_id.get().is_some()>
                    <div class="dialog-backdrop" on:click=move |_| preview_id.set(None)>
                        <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                            {move || {
                                let id = preview_id.get();
                                articles
                                    .get()
                                    .items
                                    .into_iter()
                                    .find(|article| Some(&article.id) == id.as_ref())
                                    .map(|article| {
                                        view! {
                                            <h2>{article.title.clone()}</h2>
                                            <ArticleMarkdown content=article.content.clone()/>
                                        }
                                    })
                            }}
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| preview_id.set(None)>
                                    "Close"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>

                <Show when=move || articles.get().pending_delete.is_some()>
                    <DeleteArticleDialog on_cancel=on_delete_cancel on_confirm=on_delete_confirm/>
                </Show>
            </div>
        </Show>
    }
}

/// Confirmation dialog for deleting an article.
#[component]
fn DeleteArticleDialog(on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Article"</h2>
                <p class="dialog__danger">"This will permanently delete this article."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

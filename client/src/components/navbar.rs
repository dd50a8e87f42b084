//! Top navigation bar, auth-aware.

use leptos::prelude::*;
use session::SessionManager;

use crate::state::session::SessionSnapshot;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    let manager = StoredValue::new(expect_context::<SessionManager>());

    let tier_label = move || {
        session
            .get()
            .user
            .map(|user| user.subscription_status.to_string())
            .unwrap_or_default()
    };

    let on_sign_out = move |_| {
        #[cfg(feature = "csr")]
        {
            let manager = manager.get_value();
            leptos::task::spawn_local(async move {
                let _ = manager.sign_out().await;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = manager;
        }
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                "Wordsmith"
            </a>
            <nav class="navbar__links">
                <a href="/writer">"Writer"</a>
                <Show when=move || session.get().user.is_some()>
                    <a href="/dashboard">"Dashboard"</a>
                    <a href="/my-articles">"My Articles"</a>
                </Show>
            </nav>
            <span class="navbar__spacer"></span>
            <Show
                when=move || session.get().user.is_some()
                fallback=move || {
                    view! {
                        <a class="btn btn--primary navbar__signin" href="/auth">
                            "Sign In"
                        </a>
                    }
                }
            >
                <span class="navbar__tier">{tier_label}</span>
                <a href="/profile">"Profile"</a>
                <a href="/settings">"Settings"</a>
                <button class="btn navbar__signout" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </Show>
        </header>
    }
}

//! Account overview page.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionSnapshot;
use crate::util::auth::install_unauth_redirect;

/// Avatar initial for a user.
fn avatar_letter(email: &str) -> char {
    email
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('W')
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let user = move || session.get().user;

    view! {
        <Show
            when=move || !session.get().loading && session.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="profile-page">
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
            <div class="profile-page">
                <h1>"Profile"</h1>
                <div class="profile-card">
                    <div class="profile-card__avatar">
                        {move || {
                            user().map(|u| avatar_letter(&u.email)).unwrap_or('W').to_string()
                        }}
                    </div>
                    <div class="profile-card__details">
                        <p class="profile-card__email">
                            {move || user().map(|u| u.email).unwrap_or_default()}
                        </p>
                        <p class="profile-card__tier">
                            "Subscription: "
                            <strong>
                                {move || {
                                    user()
                                        .map(|u| u.subscription_status.to_string())
                                        .unwrap_or_default()
                                }}
                            </strong>
                        </p>
                        <div class="profile-card__actions">
                            <a class="btn" href="/settings">
                                "Settings"
                            </a>
                            <a class="btn btn--primary" href="/payment">
                                "Manage Plan"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

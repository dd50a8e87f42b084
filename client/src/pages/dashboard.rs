//! Dashboard page — the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows account status and shortcuts into the writer and library.
//! Redirects to `/auth` if the user is not authenticated.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::SubscriptionTier;

use crate::state::session::SessionSnapshot;
use crate::util::auth::install_unauth_redirect;

/// Friendly name from an email's local part.
fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or("").trim();
    if local.is_empty() { "writer".to_owned() } else { local.to_owned() }
}

/// Plan blurb shown on the subscription card.
fn plan_blurb(tier: SubscriptionTier) -> &'static str {
    match tier {
        SubscriptionTier::Free => "10 article drafts per month, community support.",
        SubscriptionTier::Basic => "10 AI-generated articles per month with email support.",
        SubscriptionTier::Premium => "Unlimited articles with priority support.",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let user_name = move || {
        session
            .get()
            .user
            .map(|user| display_name(&user.email))
            .unwrap_or_default()
    };
    let tier = move || {
        session
            .get()
            .user
            .map(|user| user.subscription_status)
            .unwrap_or_default()
    };

    view! {
        <Show
            when=move || !session.get().loading && session.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
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
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>{move || format!("Welcome back, {}", user_name())}</h1>
                </header>

                <div class="dashboard-page__grid">
                    <div class="dashboard-card">
                        <h2>"Your Plan"</h2>
                        <p class="dashboard-card__tier">{move || tier().to_string()}</p>
                        <p>{move || plan_blurb(tier())}</p>
                        <Show when=move || tier() != SubscriptionTier::Premium>
                            <a class="btn btn--primary" href="/payment">
                                "Upgrade"
                            </a>
                        </Show>
                    </div>

                    <div class="dashboard-card">
                        <h2>"Write an Article"</h2>
                        <p>"Draft a new article from a prompt and an optional reference document."</p>
                        <a class="btn btn--primary" href="/writer">
                            "Open Writer"
                        </a>
                    </div>

                    <div class="dashboard-card">
                        <h2>"Your Library"</h2>
                        <p>"Browse, preview, and manage the articles you have saved."</p>
                        <a class="btn" href="/my-articles">
                            "My Articles"
                        </a>
                    </div>
                </div>
            </div>
        </Show>
    }
}

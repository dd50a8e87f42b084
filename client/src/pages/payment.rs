//! Plan selection and mocked checkout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Purchasing runs the placeholder checkout, persists the new tier to
//! the profile store, merges it into the local session optimistically,
//! and sends the user back to the writer.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use leptos::prelude::*;
use session::{SessionManager, SubscriptionTier};

#[cfg(feature = "csr")]
use crate::net::billing::create_checkout_session;
use crate::net::billing::{PLANS, SubscriptionPlan, tier_for_plan};
use crate::state::session::SessionSnapshot;

/// Whether a plan is the user's current one.
fn is_current_plan(plan_id: &str, tier: SubscriptionTier) -> bool {
    tier_for_plan(plan_id) == Some(tier)
}

/// Price line for a plan card.
fn price_line(plan: &SubscriptionPlan) -> String {
    format!("${:.2}/month", plan.price)
}

#[component]
pub fn PaymentPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    let manager = StoredValue::new(expect_context::<SessionManager>());

    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let current_tier = move || {
        session
            .get()
            .user
            .map(|user| user.subscription_status)
            .unwrap_or_default()
    };

    let subscribe = move |plan_id: &'static str| {
        if busy.get_untracked() {
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
        let Some(tier) = tier_for_plan(plan_id) else {
            return;
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let manager = manager.get_value();
            leptos::task::spawn_local(async move {
                let checkout = create_checkout_session(plan_id, &user.id);
                log::info!("checkout session {} created", checkout.id);
                match manager.change_subscription(tier).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/writer");
                        }
                    }
                    Err(e) => {
                        error.set(Some(format!("Could not update the subscription: {e}")));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (manager, user, tier);
            busy.set(false);
        }
    };

    view! {
        <div class="payment-page">
            <header class="payment-page__header">
                <h1>"Choose Your Plan"</h1>
                <p>"Upgrade for more articles, richer preferences, and priority support."</p>
            </header>
            <div class="payment-page__plans">
                {PLANS
                    .iter()
                    .map(|plan| {
                        let plan_id = plan.id;
                        let plan_name = plan.name;
                        view! {
                            <div class="plan-card">
                                <h2>{plan_name}</h2>
                                <p class="plan-card__price">{price_line(plan)}</p>
                                <ul class="plan-card__features">
                                    {plan
                                        .features
                                        .iter()
                                        .map(|feature| view! { <li>{*feature}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <Show
                                    when=move || !is_current_plan(plan_id, current_tier())
                                    fallback=move || {
                                        view! {
                                            <span class="plan-card__current">"Current Plan"</span>
                                        }
                                    }
                                >
                                    <button
                                        class="btn btn--primary"
                                        on:click=move |_| subscribe(plan_id)
                                        disabled=move || busy.get()
                                    >
                                        {move || {
                                            if busy.get() { "Processing..." } else { "Subscribe" }
                                        }}
                                    </button>
                                </Show>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Show when=move || error.get().is_some()>
                <p class="page-message page-message--error">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}

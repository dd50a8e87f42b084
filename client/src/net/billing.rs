//! Subscription plan catalog and mocked checkout.
//!
//! The checkout "session" is a client-side placeholder: a real deployment
//! would call a payment provider's server endpoint, but no payment
//! capture exists in this system.

#[cfg(test)]
#[path = "billing_test.rs"]
mod billing_test;

use session::SubscriptionTier;

/// A purchasable subscription plan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubscriptionPlan {
    /// Price identifier used by the checkout flow.
    pub id: &'static str,
    pub name: &'static str,
    /// Monthly price in USD.
    pub price: f64,
    pub features: &'static [&'static str],
    /// Monthly article credits; `None` means unlimited.
    pub article_credits: Option<u32>,
}

/// The plans offered on the payment page.
pub const PLANS: [SubscriptionPlan; 2] = [
    SubscriptionPlan {
        id: "price_basic",
        name: "Basic",
        price: 9.99,
        features: &[
            "10 AI-generated articles per month",
            "Basic tone and style options",
            "PDF source support up to 5 pages",
            "Email support",
        ],
        article_credits: Some(10),
    },
    SubscriptionPlan {
        id: "price_premium",
        name: "Premium",
        price: 19.99,
        features: &[
            "Unlimited AI-generated articles",
            "Advanced tone and style customization",
            "PDF source support up to 50 pages",
            "Priority support",
            "Advanced editing features",
        ],
        article_credits: None,
    },
];

/// Look up a plan by its price identifier.
#[must_use]
pub fn plan_by_id(plan_id: &str) -> Option<&'static SubscriptionPlan> {
    PLANS.iter().find(|plan| plan.id == plan_id)
}

/// The tier a plan purchase grants.
#[must_use]
pub fn tier_for_plan(plan_id: &str) -> Option<SubscriptionTier> {
    match plan_id {
        "price_basic" => Some(SubscriptionTier::Basic),
        "price_premium" => Some(SubscriptionTier::Premium),
        _ => None,
    }
}

/// A created checkout session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

/// Create a mocked checkout session for a plan purchase.
///
/// A real integration would call the payment provider's server endpoint;
/// this returns a placeholder session immediately.
#[must_use]
pub fn create_checkout_session(plan_id: &str, user_id: &str) -> CheckoutSession {
    let id = format!("cs_test_{}", uuid::Uuid::new_v4().simple());
    CheckoutSession {
        id,
        url: format!("https://checkout.example.com/pay/{plan_id}?client={user_id}"),
    }
}

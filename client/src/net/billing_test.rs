use super::*;
use session::SubscriptionTier;

#[test]
fn catalog_offers_basic_and_premium() {
    assert_eq!(PLANS.len(), 2);
    assert_eq!(PLANS[0].name, "Basic");
    assert_eq!(PLANS[1].name, "Premium");
    assert!(PLANS[0].price < PLANS[1].price);
}

#[test]
fn plan_by_id_finds_known_plans() {
    assert_eq!(plan_by_id("price_basic").map(|p| p.name), Some("Basic"));
    assert_eq!(plan_by_id("price_premium").map(|p| p.name), Some("Premium"));
    assert!(plan_by_id("price_enterprise").is_none());
}

#[test]
fn tier_for_plan_maps_price_ids_to_tiers() {
    assert_eq!(tier_for_plan("price_basic"), Some(SubscriptionTier::Basic));
    assert_eq!(tier_for_plan("price_premium"), Some(SubscriptionTier::Premium));
    assert_eq!(tier_for_plan("bogus"), None);
}

#[test]
fn premium_plan_has_unlimited_credits() {
    assert_eq!(plan_by_id("price_basic").unwrap().article_credits, Some(10));
    assert!(plan_by_id("price_premium").unwrap().article_credits.is_none());
}

#[test]
fn checkout_session_ids_use_the_test_prefix() {
    let session = create_checkout_session("price_basic", "u1");
    assert!(session.id.starts_with("cs_test_"));
    assert!(session.url.contains("price_basic"));

    let other = create_checkout_session("price_basic", "u1");
    assert_ne!(session.id, other.id);
}

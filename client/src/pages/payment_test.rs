use session::SubscriptionTier;

use super::*;

#[test]
fn current_plan_matches_the_granted_tier() {
    assert!(is_current_plan("price_basic", SubscriptionTier::Basic));
    assert!(is_current_plan("price_premium", SubscriptionTier::Premium));
}

#[test]
fn free_tier_matches_no_plan() {
    assert!(!is_current_plan("price_basic", SubscriptionTier::Free));
    assert!(!is_current_plan("price_premium", SubscriptionTier::Free));
}

#[test]
fn price_line_formats_two_decimals() {
    let plan = crate::net::billing::plan_by_id("price_basic").unwrap();
    assert_eq!(price_line(plan), "$9.99/month");
}

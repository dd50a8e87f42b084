use super::*;

// =============================================================
// SubscriptionTier
// =============================================================

#[test]
fn tier_default_is_free() {
    assert_eq!(SubscriptionTier::default(), SubscriptionTier::Free);
}

#[test]
fn tier_parse_lenient_accepts_known_values() {
    assert_eq!(SubscriptionTier::parse_lenient("basic"), SubscriptionTier::Basic);
    assert_eq!(SubscriptionTier::parse_lenient("premium"), SubscriptionTier::Premium);
    assert_eq!(SubscriptionTier::parse_lenient("free"), SubscriptionTier::Free);
}

#[test]
fn tier_parse_lenient_normalizes_case_and_whitespace() {
    assert_eq!(SubscriptionTier::parse_lenient("  Premium "), SubscriptionTier::Premium);
    assert_eq!(SubscriptionTier::parse_lenient("BASIC"), SubscriptionTier::Basic);
}

#[test]
fn tier_parse_lenient_degrades_unknown_to_free() {
    assert_eq!(SubscriptionTier::parse_lenient("enterprise"), SubscriptionTier::Free);
    assert_eq!(SubscriptionTier::parse_lenient(""), SubscriptionTier::Free);
}

#[test]
fn tier_serde_uses_lowercase_strings() {
    let json = serde_json::to_string(&SubscriptionTier::Premium).unwrap();
    assert_eq!(json, "\"premium\"");
    let tier: SubscriptionTier = serde_json::from_str("\"basic\"").unwrap();
    assert_eq!(tier, SubscriptionTier::Basic);
}

#[test]
fn tier_display_matches_wire_form() {
    assert_eq!(SubscriptionTier::Basic.to_string(), "basic");
}

// =============================================================
// Session / snapshot
// =============================================================

#[test]
fn session_from_identity_starts_at_free() {
    let identity = AuthIdentity { id: "u1".to_owned(), email: "user@x.com".to_owned() };
    let session = Session::from_identity(&identity);
    assert_eq!(session.id, "u1");
    assert_eq!(session.email, "user@x.com");
    assert_eq!(session.subscription_status, SubscriptionTier::Free);
}

#[test]
fn snapshot_default_is_loading_with_no_user() {
    let snapshot = SessionSnapshot::default();
    assert!(snapshot.loading);
    assert!(snapshot.user.is_none());
    assert_eq!(snapshot.phase(), SessionPhase::Loading);
}

#[test]
fn snapshot_phase_reflects_user_presence() {
    let mut snapshot = SessionSnapshot::default();
    snapshot.loading = false;
    assert_eq!(snapshot.phase(), SessionPhase::Unauthenticated);

    snapshot.user = Some(Session {
        id: "u1".to_owned(),
        email: "user@x.com".to_owned(),
        subscription_status: SubscriptionTier::Basic,
    });
    assert_eq!(snapshot.phase(), SessionPhase::Authenticated(SubscriptionTier::Basic));
}

#[test]
fn snapshot_loading_wins_over_user_for_phase() {
    let snapshot = SessionSnapshot {
        user: Some(Session {
            id: "u1".to_owned(),
            email: "user@x.com".to_owned(),
            subscription_status: SubscriptionTier::Free,
        }),
        loading: true,
    };
    assert_eq!(snapshot.phase(), SessionPhase::Loading);
}

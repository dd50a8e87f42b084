use super::*;

#[test]
fn wire_user_defaults_missing_email() {
    let user: WireUser = serde_json::from_str(r#"{"id":"u1"}"#).unwrap();
    let identity = user.into_identity();
    assert_eq!(identity.id, "u1");
    assert_eq!(identity.email, "");
}

#[test]
fn token_grant_parses_password_grant_payload() {
    let raw = r#"{
        "access_token": "tok",
        "token_type": "bearer",
        "user": {"id": "u1", "email": "user@x.com"}
    }"#;
    let grant: TokenGrant = serde_json::from_str(raw).unwrap();
    assert_eq!(grant.access_token, "tok");
    assert_eq!(grant.user.email.as_deref(), Some("user@x.com"));
}

#[test]
fn sign_up_response_without_token_means_confirmation_pending() {
    let raw = r#"{"user": {"id": "u2", "email": "new@x.com"}}"#;
    let response: SignUpResponse = serde_json::from_str(raw).unwrap();
    assert!(response.access_token.is_none());
    assert!(response.user.is_some());
}

#[test]
fn api_error_body_prefers_error_description() {
    let body = ApiErrorBody {
        error_description: Some("Invalid login credentials".to_owned()),
        msg: Some("other".to_owned()),
        error: None,
    };
    assert_eq!(body.message(), "Invalid login credentials");
}

#[test]
fn api_error_body_falls_back_through_fields() {
    let body = ApiErrorBody { msg: Some("User already registered".to_owned()), ..ApiErrorBody::default() };
    assert_eq!(body.message(), "User already registered");
    assert_eq!(ApiErrorBody::default().message(), "request failed");
}

#[test]
fn profile_row_parses_tier_leniently() {
    let row: ProfileRow = serde_json::from_str(r#"{"id":"u1","subscription_status":"premium"}"#).unwrap();
    assert_eq!(row.into_record().subscription_status, session::SubscriptionTier::Premium);

    let row: ProfileRow = serde_json::from_str(r#"{"id":"u1","subscription_status":"mystery"}"#).unwrap();
    assert_eq!(row.into_record().subscription_status, session::SubscriptionTier::Free);

    let row: ProfileRow = serde_json::from_str(r#"{"id":"u1"}"#).unwrap();
    assert_eq!(row.into_record().subscription_status, session::SubscriptionTier::Free);
}

#[test]
fn article_row_round_trips_table_payload() {
    let raw = r##"{
        "id": "a1",
        "title": "Draft",
        "content": "# Draft\n\nBody.",
        "user_id": "u1",
        "created_at": "2025-06-01T12:00:00Z"
    }"##;
    let row: ArticleRow = serde_json::from_str(raw).unwrap();
    assert_eq!(row.title, "Draft");
    assert_eq!(row.user_id, "u1");
}

use super::*;

#[test]
fn reset_request_trims_and_requires_an_email() {
    assert_eq!(validate_reset_request(" a@b.com "), Ok("a@b.com".to_owned()));
    assert_eq!(validate_reset_request("  "), Err("Email is required"));
}

#[test]
fn new_password_must_be_long_enough() {
    assert_eq!(validate_new_password("short", "short"), Err("Password must be at least 6 characters"));
}

#[test]
fn new_password_must_match_confirmation() {
    assert_eq!(
        validate_new_password("secret1", "secret2"),
        Err("Passwords do not match")
    );
}

#[test]
fn new_password_accepts_matching_valid_input() {
    assert_eq!(validate_new_password("secret1", "secret1"), Ok("secret1".to_owned()));
}

#[test]
fn new_password_requires_a_value() {
    assert_eq!(validate_new_password("   ", "   "), Err("Password is required"));
}

#[test]
fn redirect_url_targets_the_reset_route() {
    assert!(reset_redirect_url().ends_with("/reset-password"));
}

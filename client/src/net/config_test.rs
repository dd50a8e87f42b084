use super::*;

#[test]
fn new_strips_trailing_slashes_from_the_base_url() {
    let config = BackendConfig::new("https://x.example.co//", "key");
    assert_eq!(config.auth_endpoint("signup"), "https://x.example.co/auth/v1/signup");
}

#[test]
fn auth_endpoint_formats_expected_path() {
    let config = BackendConfig::new("https://x.example.co", "key");
    assert_eq!(
        config.auth_endpoint("token?grant_type=password"),
        "https://x.example.co/auth/v1/token?grant_type=password"
    );
}

#[test]
fn rest_endpoint_formats_expected_path() {
    let config = BackendConfig::new("https://x.example.co", "key");
    assert_eq!(
        config.rest_endpoint("profiles?id=eq.u1"),
        "https://x.example.co/rest/v1/profiles?id=eq.u1"
    );
}

#[test]
fn from_env_falls_back_to_placeholders() {
    let config = BackendConfig::from_env();
    assert!(!config.anon_key().is_empty());
    assert!(config.auth_endpoint("user").contains("/auth/v1/user"));
}

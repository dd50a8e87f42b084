//! Backend location and publishable key.
//!
//! Resolved at compile time from the environment with development
//! fallbacks, mirroring the hosted-backend convention of a project URL
//! plus an anonymous (publishable) API key.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_BASE_URL: &str = "https://wordsmith.example.supabase.co";
const DEFAULT_ANON_KEY: &str = "public-anon-key";

/// Where the hosted backend lives and how to identify this app to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
    anon_key: String,
}

impl BackendConfig {
    #[must_use]
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            anon_key: anon_key.to_owned(),
        }
    }

    /// Read `WORDSMITH_BACKEND_URL` / `WORDSMITH_BACKEND_ANON_KEY` from
    /// the build environment, with placeholder fallbacks for development.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            option_env!("WORDSMITH_BACKEND_URL").unwrap_or(DEFAULT_BASE_URL),
            option_env!("WORDSMITH_BACKEND_ANON_KEY").unwrap_or(DEFAULT_ANON_KEY),
        )
    }

    /// The publishable API key sent with every request.
    #[must_use]
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// URL of an auth-service endpoint, e.g. `auth_endpoint("signup")`.
    #[must_use]
    pub fn auth_endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    /// URL of a data-service table endpoint, e.g. `rest_endpoint("articles")`.
    #[must_use]
    pub fn rest_endpoint(&self, path: &str) -> String {
        format!("{}/rest/v1/{path}", self.base_url)
    }
}

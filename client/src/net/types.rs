//! Wire DTOs for the hosted backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's auth and table payloads so serde can
//! parse responses directly; conversion into the session crate's model
//! happens at this boundary (missing emails default, unknown tiers
//! degrade to `free`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use session::{AuthIdentity, ProfileRecord, SubscriptionTier};

/// A user object as the auth service returns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Registered email; the service may omit it for some providers.
    #[serde(default)]
    pub email: Option<String>,
}

impl WireUser {
    /// Convert into the session model, defaulting a missing email.
    #[must_use]
    pub fn into_identity(self) -> AuthIdentity {
        AuthIdentity { id: self.id, email: self.email.unwrap_or_default() }
    }
}

/// Successful password-grant response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub user: WireUser,
}

/// Sign-up response; `access_token` is only present when the service
/// grants a session without email confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignUpResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<WireUser>,
}

/// Error payload the auth service attaches to non-2xx responses. Field
/// names vary by endpoint, so all are optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Best available human-readable message.
    #[must_use]
    pub fn message(&self) -> String {
        self.error_description
            .as_deref()
            .or(self.msg.as_deref())
            .or(self.error.as_deref())
            .unwrap_or("request failed")
            .to_owned()
    }
}

/// A row of the `profiles` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: String,
    /// Free-form tier column; anything unrecognized maps to `free`.
    #[serde(default)]
    pub subscription_status: Option<String>,
}

impl ProfileRow {
    /// Convert into the session model with lenient tier parsing.
    #[must_use]
    pub fn into_record(self) -> ProfileRecord {
        let tier = self
            .subscription_status
            .as_deref()
            .map_or(SubscriptionTier::Free, SubscriptionTier::parse_lenient);
        ProfileRecord { id: self.id, subscription_status: tier }
    }
}

/// A row of the `articles` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRow {
    /// Unique article identifier (UUID string).
    pub id: String,
    pub title: String,
    /// Markdown body.
    pub content: String,
    /// Owning user (UUID string).
    pub user_id: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// Insert payload for the `articles` table; the backend assigns `id` and
/// `created_at`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub user_id: String,
}

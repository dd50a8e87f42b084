//! Session data model: the authenticated user, subscription tiers, and
//! the published snapshot consumed by route guards.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Subscription tier attached to a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    /// Default tier for every session until the profile record resolves.
    #[default]
    Free,
    Basic,
    Premium,
}

impl SubscriptionTier {
    /// Wire representation used by the profile store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Basic => "basic",
            Self::Premium => "premium",
        }
    }

    /// Parse a tier string from the profile store.
    ///
    /// The store column is free-form text; anything unrecognized degrades
    /// to [`SubscriptionTier::Free`] rather than failing the session.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "basic" => Self::Basic,
            "premium" => Self::Premium,
            _ => Self::Free,
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity returned by the auth service for an active session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthIdentity {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Email address the account was registered with.
    pub email: String,
}

/// Profile-store record for a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Unique user identifier (UUID string), same keyspace as [`AuthIdentity::id`].
    pub id: String,
    /// Subscription tier recorded by the backend.
    pub subscription_status: SubscriptionTier,
}

/// The in-memory representation of "who is currently logged in".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Email address.
    pub email: String,
    /// Cached subscription tier; `free` until profile enrichment resolves.
    pub subscription_status: SubscriptionTier,
}

impl Session {
    /// Build the default-tier session published before profile enrichment.
    #[must_use]
    pub fn from_identity(identity: &AuthIdentity) -> Self {
        Self {
            id: identity.id.clone(),
            email: identity.email.clone(),
            subscription_status: SubscriptionTier::Free,
        }
    }
}

/// Read-only snapshot published to consumers.
///
/// `loading` is true from manager construction until the initial session
/// check resolves, and never again afterwards; background refreshes do
/// not re-enter the loading state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub user: Option<Session>,
    pub loading: bool,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionSnapshot {
    /// Collapse the snapshot into the coarse lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Loading
        } else if let Some(user) = &self.user {
            SessionPhase::Authenticated(user.subscription_status)
        } else {
            SessionPhase::Unauthenticated
        }
    }
}

/// Coarse lifecycle phase derived from a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Initial bootstrap has not resolved yet.
    Loading,
    /// A user is signed in; the tier may still refine in the background.
    Authenticated(SubscriptionTier),
    /// No user is signed in.
    Unauthenticated,
}

/// Partial update merged synchronously into the current session.
///
/// Used for optimistic UI updates, e.g. right after a checkout completes
/// and before the profile store is authoritatively re-read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    pub email: Option<String>,
    pub subscription_status: Option<SubscriptionTier>,
}

//! Trait seams for the external auth service and profile store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client implements these over HTTP; tests implement them
//! with scripted values. Methods return `{data, error}`-style results:
//! expected failures come back as [`AuthError`] values, never panics.
//! Futures are `?Send` because the browser implementations are driven on
//! a single-threaded executor.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AuthResult;
use crate::types::{AuthIdentity, ProfileRecord, SubscriptionTier};

/// Auth-state transition reported by the auth service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthChange {
    /// A session became active (credential exchange or external login).
    SignedIn(AuthIdentity),
    /// An existing session rotated its token; identity is unchanged.
    TokenRefreshed(AuthIdentity),
    /// The session ended.
    SignedOut,
}

/// Handler registered for auth-state changes.
pub type AuthChangeHandler = Arc<dyn Fn(AuthChange) + Send + Sync>;

/// Handle for a registered auth-state-change handler.
///
/// Dropping the subscription without calling [`AuthSubscription::unsubscribe`]
/// leaves the handler registered for the gateway's lifetime.
pub struct AuthSubscription {
    unsubscribe: Option<Box<dyn FnOnce() -> AuthResult<()> + Send>>,
}

impl AuthSubscription {
    #[must_use]
    pub fn new(unsubscribe: impl FnOnce() -> AuthResult<()> + Send + 'static) -> Self {
        Self { unsubscribe: Some(Box::new(unsubscribe)) }
    }

    /// Unregister the handler.
    ///
    /// # Errors
    ///
    /// Returns the gateway's unregistration failure, if any. The manager
    /// catches this and reports it as an event rather than propagating.
    pub fn unsubscribe(mut self) -> AuthResult<()> {
        match self.unsubscribe.take() {
            Some(f) => f(),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for AuthSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSubscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

/// Result of a sign-up request.
///
/// Sign-up is "submit and await external confirmation" unless the auth
/// service returns an active session synchronously.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The service created and returned a live session.
    SessionActive(AuthIdentity),
    /// The account was created; a confirmation email gates the session.
    ConfirmationRequired,
}

/// External authentication service.
#[async_trait(?Send)]
pub trait AuthGateway: Send + Sync {
    /// Register a new account.
    async fn sign_up(&self, email: &str, password: &str) -> AuthResult<SignUpOutcome>;

    /// Exchange credentials for a session identity.
    async fn sign_in_with_password(&self, email: &str, password: &str) -> AuthResult<AuthIdentity>;

    /// End the current session remotely.
    async fn sign_out(&self) -> AuthResult<()>;

    /// Return the identity of an existing session, if one survives from a
    /// previous run.
    async fn current_session(&self) -> AuthResult<Option<AuthIdentity>>;

    /// Request a password-reset email with a redirect back into the app.
    async fn reset_password_for_email(&self, email: &str, redirect_to: &str) -> AuthResult<()>;

    /// Set a new password using a reset token.
    async fn update_password(&self, token: &str, new_password: &str) -> AuthResult<()>;

    /// Register a handler fired on every future auth-state transition.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway cannot register handlers.
    fn on_auth_state_change(&self, handler: AuthChangeHandler) -> AuthResult<AuthSubscription>;
}

/// External keyed per-user profile record store.
#[async_trait(?Send)]
pub trait ProfileStore: Send + Sync {
    /// Look up the profile record for a user, `None` if absent.
    async fn fetch_profile(&self, user_id: &str) -> AuthResult<Option<ProfileRecord>>;

    /// Set the recorded subscription tier for a user.
    async fn update_subscription(&self, user_id: &str, tier: SubscriptionTier) -> AuthResult<()>;
}

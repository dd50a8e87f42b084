//! Structured auth errors.
//!
//! ERROR HANDLING
//! ==============
//! Expected auth failures (bad credentials, duplicate signup) are values,
//! not panics: every fallible operation returns `Result<_, AuthError>` and
//! callers branch on [`AuthErrorKind`] for display. Nothing in this crate
//! is fatal to the host application.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Classification of an auth failure, used by the UI to pick messaging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// Wrong password or unregistered email.
    InvalidCredentials,
    /// Sign-up for an email that already has an account.
    UserAlreadyExists,
    /// The account exists but its email was never confirmed.
    EmailNotConfirmed,
    /// The backend rejected the password (too short, too common).
    WeakPassword,
    /// The request never produced a backend response.
    Network,
    /// The backend answered with an unexpected failure.
    Backend,
}

/// An auth service or profile store failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
}

impl AuthError {
    #[must_use]
    pub fn new(kind: AuthErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self::new(AuthErrorKind::InvalidCredentials, "invalid login credentials")
    }

    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Network, message)
    }

    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Backend, message)
    }

    /// Whether the failure is one the user can correct (vs. infrastructure).
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self.kind,
            AuthErrorKind::InvalidCredentials
                | AuthErrorKind::UserAlreadyExists
                | AuthErrorKind::EmailNotConfirmed
                | AuthErrorKind::WeakPassword
        )
    }
}

/// Result alias for auth service and profile store calls.
pub type AuthResult<T> = Result<T, AuthError>;

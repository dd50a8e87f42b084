//! Structured observability events.
//!
//! The manager never logs; degradations are emitted as typed events to
//! registered observers and the host decides how to surface them. This
//! keeps the core decoupled from any particular logging mechanism.

use crate::error::AuthError;

/// Non-fatal degradation reported by the session manager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The initial session check failed; the session resolved to "none".
    BootstrapFailed { error: AuthError },
    /// A profile lookup failed; the session keeps the default tier.
    ProfileLookupFailed { user_id: String, error: AuthError },
    /// A reconciliation finished after a newer one superseded it and its
    /// result was discarded.
    StaleReconcileDiscarded { epoch: u64 },
    /// Registering the auth-state-change handler failed; external auth
    /// events will not be observed this run.
    ListenerRegistrationFailed { error: AuthError },
    /// Unregistering the auth-state-change handler failed on teardown.
    ListenerTeardownFailed { error: AuthError },
    /// The remote sign-out call failed; local state was cleared anyway.
    RemoteSignOutFailed { error: AuthError },
}

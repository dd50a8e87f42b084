//! The session manager: single source of truth for the current user.
//!
//! ARCHITECTURE
//! ============
//! The manager is a cheaply clonable handle over shared state, constructed
//! once at application start and injected into consumers. It is the only
//! writer of the published [`SessionSnapshot`]; everything else reads
//! copies via [`SessionManager::snapshot`] or a change observer.
//!
//! Session-present resolutions publish in two phases: the identity with
//! the default `free` tier first, then a republish with the profile
//! store's tier once that lookup resolves. Each reconciliation holds an
//! epoch drawn from a monotonic counter; any publish whose epoch is no
//! longer current is discarded, so two auth events racing each other
//! settle on whichever arrived last regardless of fetch latency.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{AuthError, AuthResult};
use crate::events::SessionEvent;
use crate::gateway::{AuthChange, AuthGateway, AuthSubscription, ProfileStore, SignUpOutcome};
use crate::types::{AuthIdentity, Session, SessionSnapshot, SessionUpdate, SubscriptionTier};

/// Future handed to the host's spawner by [`SessionManager::attach`].
///
/// Not `Send`: reconciliation awaits `?Send` gateway futures, so the host
/// must drive it on a single-threaded executor (`spawn_local` in the
/// browser, a local pool in tests).
pub type SessionFuture = Pin<Box<dyn Future<Output = ()> + 'static>>;

struct Inner {
    snapshot: SessionSnapshot,
    epoch: u64,
    observers: Vec<Arc<dyn Fn(&SessionSnapshot) + Send + Sync>>,
    event_observers: Vec<Arc<dyn Fn(&SessionEvent) + Send + Sync>>,
    subscription: Option<AuthSubscription>,
}

/// Reconciles auth-service identity and profile-store tier into one
/// published session value.
#[derive(Clone)]
pub struct SessionManager {
    auth: Arc<dyn AuthGateway>,
    profiles: Arc<dyn ProfileStore>,
    inner: Arc<Mutex<Inner>>,
}

impl SessionManager {
    /// Create a manager in the loading state. Call [`Self::bootstrap`] to
    /// resolve the initial session and [`Self::attach`] to follow
    /// external auth events.
    #[must_use]
    pub fn new(auth: Arc<dyn AuthGateway>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self {
            auth,
            profiles,
            inner: Arc::new(Mutex::new(Inner {
                snapshot: SessionSnapshot::default(),
                epoch: 0,
                observers: Vec::new(),
                event_observers: Vec::new(),
                subscription: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read-only copy of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot.clone()
    }

    /// The current user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<Session> {
        self.lock().snapshot.user.clone()
    }

    /// Register an observer fired after every snapshot change.
    pub fn on_change(&self, observer: impl Fn(&SessionSnapshot) + Send + Sync + 'static) {
        self.lock().observers.push(Arc::new(observer));
    }

    /// Register an observer for degradation events.
    pub fn on_event(&self, observer: impl Fn(&SessionEvent) + Send + Sync + 'static) {
        self.lock().event_observers.push(Arc::new(observer));
    }

    fn emit(&self, event: &SessionEvent) {
        let observers = self.lock().event_observers.clone();
        for observer in observers {
            observer(event);
        }
    }

    /// Claim the next reconciliation epoch.
    fn next_epoch(&self) -> u64 {
        let mut inner = self.lock();
        inner.epoch += 1;
        inner.epoch
    }

    /// Apply `mutate` and notify observers, but only if `epoch` is still
    /// the latest one issued. Returns whether the publish happened.
    fn publish_if_current(&self, epoch: u64, mutate: impl FnOnce(&mut SessionSnapshot)) -> bool {
        let (snapshot, observers) = {
            let mut inner = self.lock();
            if inner.epoch != epoch {
                return false;
            }
            mutate(&mut inner.snapshot);
            (inner.snapshot.clone(), inner.observers.clone())
        };
        for observer in &observers {
            observer(&snapshot);
        }
        true
    }

    /// Claim a fresh epoch and publish unconditionally under it.
    fn publish_now(&self, mutate: impl FnOnce(&mut SessionSnapshot)) {
        let (snapshot, observers) = {
            let mut inner = self.lock();
            inner.epoch += 1;
            mutate(&mut inner.snapshot);
            (inner.snapshot.clone(), inner.observers.clone())
        };
        for observer in &observers {
            observer(&snapshot);
        }
    }

    /// Two-phase reconciliation for a session-present resolution: publish
    /// the identity at the default tier, then republish with the profile
    /// store's tier once the lookup resolves. A failed or empty lookup
    /// leaves the default tier standing.
    async fn reconcile(&self, identity: AuthIdentity, epoch: u64) {
        let published = self.publish_if_current(epoch, |snapshot| {
            snapshot.user = Some(Session::from_identity(&identity));
            snapshot.loading = false;
        });
        if !published {
            self.emit(&SessionEvent::StaleReconcileDiscarded { epoch });
            return;
        }

        match self.profiles.fetch_profile(&identity.id).await {
            Ok(Some(profile)) => {
                let published = self.publish_if_current(epoch, |snapshot| {
                    if let Some(user) = snapshot.user.as_mut() {
                        user.subscription_status = profile.subscription_status;
                    }
                });
                if !published {
                    self.emit(&SessionEvent::StaleReconcileDiscarded { epoch });
                }
            }
            Ok(None) => {}
            Err(error) => {
                self.emit(&SessionEvent::ProfileLookupFailed { user_id: identity.id, error });
            }
        }
    }

    /// Resolve the initial session.
    ///
    /// Publishes exactly one loading→settled transition: an existing
    /// session reconciles two-phase, no session publishes "none", and an
    /// auth-service failure degrades to "none" with an event, so the
    /// application always reaches a stable render state.
    pub async fn bootstrap(&self) {
        let epoch = self.next_epoch();
        match self.auth.current_session().await {
            Ok(Some(identity)) => self.reconcile(identity, epoch).await,
            Ok(None) => {
                self.publish_if_current(epoch, |snapshot| {
                    snapshot.user = None;
                    snapshot.loading = false;
                });
            }
            Err(error) => {
                self.publish_if_current(epoch, |snapshot| {
                    snapshot.user = None;
                    snapshot.loading = false;
                });
                self.emit(&SessionEvent::BootstrapFailed { error });
            }
        }
    }

    /// Apply one external auth-state transition.
    ///
    /// Safe under rapid repeated events: each call claims a fresh epoch,
    /// so a slow profile fetch started by a superseded event cannot
    /// overwrite the session established by a newer one.
    pub async fn handle_auth_event(&self, change: AuthChange) {
        match change {
            AuthChange::SignedIn(identity) | AuthChange::TokenRefreshed(identity) => {
                let epoch = self.next_epoch();
                self.reconcile(identity, epoch).await;
            }
            AuthChange::SignedOut => {
                self.publish_now(|snapshot| {
                    snapshot.user = None;
                    snapshot.loading = false;
                });
            }
        }
    }

    /// Subscribe to the auth service's state-change stream.
    ///
    /// `spawn` schedules the reconciliation future for each event on the
    /// host's executor. Registration failure is reported as an event and
    /// otherwise swallowed; the manager still works, it just won't see
    /// externally-initiated transitions.
    pub fn attach(&self, spawn: impl Fn(SessionFuture) + Send + Sync + 'static) {
        let manager = self.clone();
        let handler = Arc::new(move |change: AuthChange| {
            let manager = manager.clone();
            spawn(Box::pin(async move {
                manager.handle_auth_event(change).await;
            }));
        });

        match self.auth.on_auth_state_change(handler) {
            Ok(subscription) => {
                self.lock().subscription = Some(subscription);
            }
            Err(error) => {
                self.emit(&SessionEvent::ListenerRegistrationFailed { error });
            }
        }
    }

    /// Unregister the auth-state-change handler. Unregistration failures
    /// are reported as events, never propagated. Idempotent.
    pub fn teardown(&self) {
        let subscription = self.lock().subscription.take();
        if let Some(subscription) = subscription {
            if let Err(error) = subscription.unsubscribe() {
                self.emit(&SessionEvent::ListenerTeardownFailed { error });
            }
        }
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Expected auth failures (bad credentials, unregistered email) come
    /// back as values; the snapshot is untouched on failure.
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<()> {
        let identity = self.auth.sign_in_with_password(email, password).await?;
        let epoch = self.next_epoch();
        self.reconcile(identity, epoch).await;
        Ok(())
    }

    /// Register a new account.
    ///
    /// Only reconciles a session if the auth service returned one
    /// synchronously; the usual outcome is a pending email confirmation
    /// with no local state change.
    ///
    /// # Errors
    ///
    /// Duplicate accounts and weak passwords surface as values.
    pub async fn sign_up(&self, email: &str, password: &str) -> AuthResult<SignUpOutcome> {
        let outcome = self.auth.sign_up(email, password).await?;
        if let SignUpOutcome::SessionActive(identity) = &outcome {
            let epoch = self.next_epoch();
            self.reconcile(identity.clone(), epoch).await;
        }
        Ok(outcome)
    }

    /// End the session.
    ///
    /// Local state clears unconditionally so the UI can never be stranded
    /// looking signed-in with no valid remote session; a remote failure
    /// is still returned (and reported as an event) for display.
    ///
    /// # Errors
    ///
    /// Returns the remote sign-out failure, if any.
    pub async fn sign_out(&self) -> AuthResult<()> {
        let result = self.auth.sign_out().await;
        self.publish_now(|snapshot| {
            snapshot.user = None;
            snapshot.loading = false;
        });
        if let Err(error) = &result {
            self.emit(&SessionEvent::RemoteSignOutFailed { error: error.clone() });
        }
        result
    }

    /// Request a password-reset email. Pass-through; no local state change.
    ///
    /// # Errors
    ///
    /// Returns the auth service's failure, if any.
    pub async fn reset_password(&self, email: &str, redirect_to: &str) -> AuthResult<()> {
        self.auth.reset_password_for_email(email, redirect_to).await
    }

    /// Set a new password from a reset token. Pass-through; no local
    /// state change.
    ///
    /// # Errors
    ///
    /// Returns the auth service's failure, if any.
    pub async fn update_password(&self, token: &str, new_password: &str) -> AuthResult<()> {
        self.auth.update_password(token, new_password).await
    }

    /// Merge a partial update into the current session synchronously.
    ///
    /// No-op when no user is signed in. Does not claim an epoch: this is
    /// an `Authenticated` self-transition, and an in-flight profile
    /// enrichment for the same session stays valid.
    pub fn update_user(&self, update: SessionUpdate) {
        let (snapshot, observers) = {
            let mut inner = self.lock();
            let Some(user) = inner.snapshot.user.as_mut() else {
                return;
            };
            if let Some(email) = update.email {
                user.email = email;
            }
            if let Some(tier) = update.subscription_status {
                user.subscription_status = tier;
            }
            (inner.snapshot.clone(), inner.observers.clone())
        };
        for observer in &observers {
            observer(&snapshot);
        }
    }

    /// Persist a new subscription tier to the profile store, then merge
    /// it into the local session optimistically.
    ///
    /// # Errors
    ///
    /// Returns the profile store's failure; the local session is only
    /// updated after the store accepted the write.
    pub async fn change_subscription(&self, tier: SubscriptionTier) -> AuthResult<()> {
        let Some(user) = self.current_user() else {
            return Err(AuthError::backend("no active session"));
        };
        self.profiles.update_subscription(&user.id, tier).await?;
        self.update_user(SessionUpdate { subscription_status: Some(tier), ..SessionUpdate::default() });
        Ok(())
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("SessionManager")
            .field("snapshot", &inner.snapshot)
            .field("epoch", &inner.epoch)
            .field("subscribed", &inner.subscription.is_some())
            .finish()
    }
}

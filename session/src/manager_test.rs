use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

use super::*;
use crate::error::{AuthError, AuthErrorKind};
use crate::types::{ProfileRecord, SubscriptionTier};

// =============================================================
// Scripted collaborators
// =============================================================

/// Auth gateway whose next result per operation is scripted up front.
#[derive(Default)]
struct ScriptedAuth {
    current: Mutex<Option<AuthResult<Option<AuthIdentity>>>>,
    sign_in: Mutex<Option<AuthResult<AuthIdentity>>>,
    sign_up: Mutex<Option<AuthResult<SignUpOutcome>>>,
    sign_out: Mutex<Option<AuthResult<()>>>,
    handler: Mutex<Option<crate::gateway::AuthChangeHandler>>,
    fail_subscribe: bool,
    fail_unsubscribe: bool,
    unsubscribed: Arc<Mutex<bool>>,
}

#[async_trait(?Send)]
impl AuthGateway for ScriptedAuth {
    async fn sign_up(&self, _email: &str, _password: &str) -> AuthResult<SignUpOutcome> {
        self.sign_up
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Ok(SignUpOutcome::ConfirmationRequired))
    }

    async fn sign_in_with_password(&self, _email: &str, _password: &str) -> AuthResult<AuthIdentity> {
        self.sign_in
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(AuthError::invalid_credentials()))
    }

    async fn sign_out(&self) -> AuthResult<()> {
        self.sign_out.lock().unwrap().take().unwrap_or(Ok(()))
    }

    async fn current_session(&self) -> AuthResult<Option<AuthIdentity>> {
        self.current.lock().unwrap().take().unwrap_or(Ok(None))
    }

    async fn reset_password_for_email(&self, _email: &str, _redirect_to: &str) -> AuthResult<()> {
        Ok(())
    }

    async fn update_password(&self, _token: &str, _new_password: &str) -> AuthResult<()> {
        Ok(())
    }

    fn on_auth_state_change(
        &self,
        handler: crate::gateway::AuthChangeHandler,
    ) -> AuthResult<AuthSubscription> {
        if self.fail_subscribe {
            return Err(AuthError::backend("subscribe unavailable"));
        }
        *self.handler.lock().unwrap() = Some(handler);
        let fail = self.fail_unsubscribe;
        let flag = self.unsubscribed.clone();
        Ok(AuthSubscription::new(move || {
            if fail {
                return Err(AuthError::backend("unsubscribe failed"));
            }
            *flag.lock().unwrap() = true;
            Ok(())
        }))
    }
}

/// Profile store that resolves immediately with a fixed result.
struct InstantProfiles {
    result: AuthResult<Option<ProfileRecord>>,
    fail_update: bool,
    updates: Mutex<Vec<(String, SubscriptionTier)>>,
}

impl InstantProfiles {
    fn none() -> Self {
        Self { result: Ok(None), fail_update: false, updates: Mutex::new(Vec::new()) }
    }

    fn with_tier(id: &str, tier: SubscriptionTier) -> Self {
        Self {
            result: Ok(Some(ProfileRecord { id: id.to_owned(), subscription_status: tier })),
            fail_update: false,
            updates: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            result: Err(AuthError::network("profile store unreachable")),
            fail_update: false,
            updates: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl ProfileStore for InstantProfiles {
    async fn fetch_profile(&self, _user_id: &str) -> AuthResult<Option<ProfileRecord>> {
        self.result.clone()
    }

    async fn update_subscription(&self, user_id: &str, tier: SubscriptionTier) -> AuthResult<()> {
        if self.fail_update {
            return Err(AuthError::backend("update rejected"));
        }
        self.updates.lock().unwrap().push((user_id.to_owned(), tier));
        Ok(())
    }
}

/// Profile store whose fetches block until the test releases them, in
/// FIFO order. Lets tests interleave reconciliations deterministically.
#[derive(Default)]
struct GatedProfiles {
    gates: Mutex<VecDeque<oneshot::Receiver<AuthResult<Option<ProfileRecord>>>>>,
}

impl GatedProfiles {
    fn add_gate(&self) -> oneshot::Sender<AuthResult<Option<ProfileRecord>>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }
}

#[async_trait(?Send)]
impl ProfileStore for GatedProfiles {
    async fn fetch_profile(&self, _user_id: &str) -> AuthResult<Option<ProfileRecord>> {
        let gate = self.gates.lock().unwrap().pop_front();
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(AuthError::network("profile gate dropped"))),
            None => Ok(None),
        }
    }

    async fn update_subscription(&self, _user_id: &str, _tier: SubscriptionTier) -> AuthResult<()> {
        Ok(())
    }
}

// =============================================================
// Helpers
// =============================================================

fn identity(id: &str, email: &str) -> AuthIdentity {
    AuthIdentity { id: id.to_owned(), email: email.to_owned() }
}

fn premium_profile(id: &str) -> AuthResult<Option<ProfileRecord>> {
    Ok(Some(ProfileRecord { id: id.to_owned(), subscription_status: SubscriptionTier::Premium }))
}

fn record_snapshots(manager: &SessionManager) -> Arc<Mutex<Vec<SessionSnapshot>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    manager.on_change(move |snapshot| sink.lock().unwrap().push(snapshot.clone()));
    seen
}

fn record_events(manager: &SessionManager) -> Arc<Mutex<Vec<SessionEvent>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    manager.on_event(move |event| sink.lock().unwrap().push(event.clone()));
    seen
}

// =============================================================
// Bootstrap
// =============================================================

#[test]
fn starts_loading_with_no_user() {
    let manager = SessionManager::new(
        Arc::new(ScriptedAuth::default()),
        Arc::new(InstantProfiles::none()),
    );
    let snapshot = manager.snapshot();
    assert!(snapshot.loading);
    assert!(snapshot.user.is_none());
}

#[test]
fn bootstrap_without_session_settles_unauthenticated() {
    let manager = SessionManager::new(
        Arc::new(ScriptedAuth::default()),
        Arc::new(InstantProfiles::none()),
    );
    block_on(manager.bootstrap());
    let snapshot = manager.snapshot();
    assert!(!snapshot.loading);
    assert!(snapshot.user.is_none());
    assert_eq!(snapshot.phase(), crate::types::SessionPhase::Unauthenticated);
}

#[test]
fn bootstrap_publishes_default_tier_before_enrichment() {
    let auth = ScriptedAuth::default();
    *auth.current.lock().unwrap() = Some(Ok(Some(identity("u1", "user@x.com"))));
    let profiles = Arc::new(GatedProfiles::default());
    let gate = profiles.add_gate();
    let manager = SessionManager::new(Arc::new(auth), profiles);
    let snapshots = record_snapshots(&manager);

    let mut pool = LocalPool::new();
    let task = manager.clone();
    pool.spawner()
        .spawn_local(async move { task.bootstrap().await })
        .unwrap();
    pool.run_until_stalled();

    // Default tier is visible while the profile fetch is still pending.
    let snapshot = manager.snapshot();
    assert!(!snapshot.loading);
    let user = snapshot.user.expect("default-tier session");
    assert_eq!(user.email, "user@x.com");
    assert_eq!(user.subscription_status, SubscriptionTier::Free);

    gate.send(premium_profile("u1")).unwrap();
    pool.run_until_stalled();

    let user = manager.snapshot().user.expect("enriched session");
    assert_eq!(user.subscription_status, SubscriptionTier::Premium);

    let tiers: Vec<_> = snapshots
        .lock()
        .unwrap()
        .iter()
        .map(|s| s.user.as_ref().map(|u| u.subscription_status))
        .collect();
    assert_eq!(
        tiers,
        vec![Some(SubscriptionTier::Free), Some(SubscriptionTier::Premium)]
    );
}

#[test]
fn bootstrap_profile_failure_degrades_to_default_tier() {
    let auth = ScriptedAuth::default();
    *auth.current.lock().unwrap() = Some(Ok(Some(identity("u1", "user@x.com"))));
    let manager = SessionManager::new(Arc::new(auth), Arc::new(InstantProfiles::failing()));
    let events = record_events(&manager);

    block_on(manager.bootstrap());

    let snapshot = manager.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(
        snapshot.user.map(|u| u.subscription_status),
        Some(SubscriptionTier::Free)
    );
    assert!(matches!(
        events.lock().unwrap().as_slice(),
        [SessionEvent::ProfileLookupFailed { user_id, .. }] if user_id == "u1"
    ));
}

#[test]
fn bootstrap_missing_profile_keeps_default_tier() {
    let auth = ScriptedAuth::default();
    *auth.current.lock().unwrap() = Some(Ok(Some(identity("u1", "user@x.com"))));
    let manager = SessionManager::new(Arc::new(auth), Arc::new(InstantProfiles::none()));
    let events = record_events(&manager);

    block_on(manager.bootstrap());

    assert_eq!(
        manager.snapshot().user.map(|u| u.subscription_status),
        Some(SubscriptionTier::Free)
    );
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn bootstrap_auth_failure_settles_unauthenticated_with_event() {
    let auth = ScriptedAuth::default();
    *auth.current.lock().unwrap() = Some(Err(AuthError::network("auth unreachable")));
    let manager = SessionManager::new(Arc::new(auth), Arc::new(InstantProfiles::none()));
    let events = record_events(&manager);

    block_on(manager.bootstrap());

    let snapshot = manager.snapshot();
    assert!(!snapshot.loading);
    assert!(snapshot.user.is_none());
    assert!(matches!(
        events.lock().unwrap().as_slice(),
        [SessionEvent::BootstrapFailed { .. }]
    ));
}

#[test]
fn loading_clears_exactly_once_across_later_operations() {
    let auth = ScriptedAuth::default();
    *auth.sign_in.lock().unwrap() = Some(Ok(identity("u1", "user@x.com")));
    let manager = SessionManager::new(Arc::new(auth), Arc::new(InstantProfiles::none()));
    let snapshots = record_snapshots(&manager);

    block_on(manager.bootstrap());
    block_on(manager.sign_in("user@x.com", "pw")).unwrap();
    block_on(manager.sign_out()).unwrap();

    let seen = snapshots.lock().unwrap();
    assert!(!seen.is_empty());
    assert!(seen.iter().all(|s| !s.loading));
}

// =============================================================
// Sign-in / sign-up / sign-out
// =============================================================

#[test]
fn sign_in_failure_is_a_value_and_leaves_state_untouched() {
    let manager = SessionManager::new(
        Arc::new(ScriptedAuth::default()),
        Arc::new(InstantProfiles::none()),
    );
    block_on(manager.bootstrap());

    let error = block_on(manager.sign_in("bad@x.com", "wrongpass")).unwrap_err();
    assert_eq!(error.kind, AuthErrorKind::InvalidCredentials);
    assert!(error.is_expected());

    let snapshot = manager.snapshot();
    assert!(snapshot.user.is_none());
    assert!(!snapshot.loading);
}

#[test]
fn sign_in_success_reconciles_two_phase() {
    let auth = ScriptedAuth::default();
    *auth.sign_in.lock().unwrap() = Some(Ok(identity("u1", "user@x.com")));
    let manager = SessionManager::new(
        Arc::new(auth),
        Arc::new(InstantProfiles::with_tier("u1", SubscriptionTier::Basic)),
    );
    let snapshots = record_snapshots(&manager);

    block_on(manager.sign_in("user@x.com", "pw")).unwrap();

    assert_eq!(
        manager.snapshot().user.map(|u| u.subscription_status),
        Some(SubscriptionTier::Basic)
    );
    let tiers: Vec<_> = snapshots
        .lock()
        .unwrap()
        .iter()
        .map(|s| s.user.as_ref().map(|u| u.subscription_status))
        .collect();
    assert_eq!(
        tiers,
        vec![Some(SubscriptionTier::Free), Some(SubscriptionTier::Basic)]
    );
}

#[test]
fn sign_up_confirmation_flow_grants_no_session() {
    let manager = SessionManager::new(
        Arc::new(ScriptedAuth::default()),
        Arc::new(InstantProfiles::none()),
    );
    let outcome = block_on(manager.sign_up("new@x.com", "password")).unwrap();
    assert_eq!(outcome, SignUpOutcome::ConfirmationRequired);
    assert!(manager.snapshot().user.is_none());
}

#[test]
fn sign_up_with_synchronous_session_reconciles() {
    let auth = ScriptedAuth::default();
    *auth.sign_up.lock().unwrap() =
        Some(Ok(SignUpOutcome::SessionActive(identity("u2", "new@x.com"))));
    let manager = SessionManager::new(Arc::new(auth), Arc::new(InstantProfiles::none()));

    let outcome = block_on(manager.sign_up("new@x.com", "password")).unwrap();
    assert!(matches!(outcome, SignUpOutcome::SessionActive(_)));
    assert_eq!(manager.snapshot().user.map(|u| u.email), Some("new@x.com".to_owned()));
}

#[test]
fn sign_out_clears_local_state_even_when_remote_fails() {
    let auth = ScriptedAuth::default();
    *auth.sign_in.lock().unwrap() = Some(Ok(identity("u1", "user@x.com")));
    *auth.sign_out.lock().unwrap() = Some(Err(AuthError::network("offline")));
    let manager = SessionManager::new(Arc::new(auth), Arc::new(InstantProfiles::none()));
    let events = record_events(&manager);

    block_on(manager.sign_in("user@x.com", "pw")).unwrap();
    let result = block_on(manager.sign_out());

    assert!(result.is_err());
    assert!(manager.snapshot().user.is_none());
    assert!(matches!(
        events.lock().unwrap().as_slice(),
        [SessionEvent::RemoteSignOutFailed { .. }]
    ));
}

// =============================================================
// Optimistic updates
// =============================================================

#[test]
fn update_user_reflects_immediately_without_network() {
    let auth = ScriptedAuth::default();
    *auth.sign_in.lock().unwrap() = Some(Ok(identity("u1", "user@x.com")));
    let manager = SessionManager::new(Arc::new(auth), Arc::new(InstantProfiles::none()));
    block_on(manager.sign_in("user@x.com", "pw")).unwrap();

    manager.update_user(SessionUpdate {
        subscription_status: Some(SubscriptionTier::Premium),
        ..SessionUpdate::default()
    });

    assert_eq!(
        manager.snapshot().user.map(|u| u.subscription_status),
        Some(SubscriptionTier::Premium)
    );
}

#[test]
fn update_user_is_a_no_op_when_signed_out() {
    let manager = SessionManager::new(
        Arc::new(ScriptedAuth::default()),
        Arc::new(InstantProfiles::none()),
    );
    let snapshots = record_snapshots(&manager);

    manager.update_user(SessionUpdate {
        subscription_status: Some(SubscriptionTier::Premium),
        ..SessionUpdate::default()
    });

    assert!(manager.snapshot().user.is_none());
    assert!(snapshots.lock().unwrap().is_empty());
}

#[test]
fn change_subscription_persists_then_merges() {
    let auth = ScriptedAuth::default();
    *auth.sign_in.lock().unwrap() = Some(Ok(identity("u1", "user@x.com")));
    let profiles = Arc::new(InstantProfiles::none());
    let manager = SessionManager::new(Arc::new(auth), profiles.clone());
    block_on(manager.sign_in("user@x.com", "pw")).unwrap();

    block_on(manager.change_subscription(SubscriptionTier::Basic)).unwrap();

    assert_eq!(
        profiles.updates.lock().unwrap().as_slice(),
        &[("u1".to_owned(), SubscriptionTier::Basic)]
    );
    assert_eq!(
        manager.snapshot().user.map(|u| u.subscription_status),
        Some(SubscriptionTier::Basic)
    );
}

#[test]
fn change_subscription_requires_a_session() {
    let manager = SessionManager::new(
        Arc::new(ScriptedAuth::default()),
        Arc::new(InstantProfiles::none()),
    );
    assert!(block_on(manager.change_subscription(SubscriptionTier::Premium)).is_err());
}

// =============================================================
// Event races
// =============================================================

#[test]
fn stale_profile_fetch_cannot_overwrite_newer_logout() {
    let auth = ScriptedAuth::default();
    let profiles = Arc::new(GatedProfiles::default());
    let gate = profiles.add_gate();
    let manager = SessionManager::new(Arc::new(auth), profiles);
    let events = record_events(&manager);

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let task = manager.clone();
    spawner
        .spawn_local(async move {
            task.handle_auth_event(AuthChange::SignedIn(identity("u1", "user1@x.com"))).await;
        })
        .unwrap();
    pool.run_until_stalled();
    assert!(manager.snapshot().user.is_some());

    let task = manager.clone();
    spawner
        .spawn_local(async move { task.handle_auth_event(AuthChange::SignedOut).await })
        .unwrap();
    pool.run_until_stalled();
    assert!(manager.snapshot().user.is_none());

    // The login's profile fetch resolves only now, after the logout.
    gate.send(premium_profile("u1")).unwrap();
    pool.run_until_stalled();

    assert!(manager.snapshot().user.is_none());
    assert!(events
        .lock()
        .unwrap()
        .iter()
        .any(|e| matches!(e, SessionEvent::StaleReconcileDiscarded { .. })));
}

#[test]
fn back_to_back_logins_settle_on_the_last_event() {
    let auth = ScriptedAuth::default();
    let profiles = Arc::new(GatedProfiles::default());
    let first_gate = profiles.add_gate();
    let second_gate = profiles.add_gate();
    let manager = SessionManager::new(Arc::new(auth), profiles);

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let task = manager.clone();
    spawner
        .spawn_local(async move {
            task.handle_auth_event(AuthChange::SignedIn(identity("u1", "first@x.com"))).await;
        })
        .unwrap();
    pool.run_until_stalled();

    let task = manager.clone();
    spawner
        .spawn_local(async move {
            task.handle_auth_event(AuthChange::SignedIn(identity("u2", "second@x.com"))).await;
        })
        .unwrap();
    pool.run_until_stalled();

    // First login's enrichment resolves late and must be discarded.
    first_gate.send(premium_profile("u1")).unwrap();
    pool.run_until_stalled();
    let user = manager.snapshot().user.expect("second login session");
    assert_eq!(user.email, "second@x.com");
    assert_eq!(user.subscription_status, SubscriptionTier::Free);

    second_gate.send(premium_profile("u2")).unwrap();
    pool.run_until_stalled();
    let user = manager.snapshot().user.expect("enriched second session");
    assert_eq!(user.email, "second@x.com");
    assert_eq!(user.subscription_status, SubscriptionTier::Premium);
}

// =============================================================
// Attach / teardown
// =============================================================

#[test]
fn attach_routes_gateway_events_into_the_manager() {
    let auth = Arc::new(ScriptedAuth::default());
    let manager = SessionManager::new(auth.clone(), Arc::new(InstantProfiles::none()));
    manager.attach(|task| block_on(task));

    let handler = auth.handler.lock().unwrap().clone().expect("handler registered");
    handler(AuthChange::SignedIn(identity("u1", "user@x.com")));
    assert!(manager.snapshot().user.is_some());

    handler(AuthChange::SignedOut);
    assert!(manager.snapshot().user.is_none());
}

#[test]
fn attach_registration_failure_is_reported_not_propagated() {
    let auth = ScriptedAuth { fail_subscribe: true, ..ScriptedAuth::default() };
    let manager = SessionManager::new(Arc::new(auth), Arc::new(InstantProfiles::none()));
    let events = record_events(&manager);

    manager.attach(|task| block_on(task));

    assert!(matches!(
        events.lock().unwrap().as_slice(),
        [SessionEvent::ListenerRegistrationFailed { .. }]
    ));
}

#[test]
fn teardown_unsubscribes_once() {
    let auth = Arc::new(ScriptedAuth::default());
    let manager = SessionManager::new(auth.clone(), Arc::new(InstantProfiles::none()));
    manager.attach(|task| block_on(task));

    manager.teardown();
    assert!(*auth.unsubscribed.lock().unwrap());

    // A second teardown has nothing left to do.
    manager.teardown();
}

#[test]
fn teardown_failure_is_reported_not_propagated() {
    let auth = ScriptedAuth { fail_unsubscribe: true, ..ScriptedAuth::default() };
    let manager = SessionManager::new(Arc::new(auth), Arc::new(InstantProfiles::none()));
    let events = record_events(&manager);
    manager.attach(|task| block_on(task));

    manager.teardown();

    assert!(matches!(
        events.lock().unwrap().as_slice(),
        [SessionEvent::ListenerTeardownFailed { .. }]
    ));
}

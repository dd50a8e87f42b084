//! REST implementations of the session crate's trait seams.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net` against the hosted
//! backend's auth and data services. Native builds get inert stubs so the
//! crate compiles and tests without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are parsed into the backend's error payload and
//! classified into `AuthError` kinds; transport failures map to
//! `Network`. Nothing here panics on a failed request.

#[cfg(test)]
#[path = "session_api_test.rs"]
mod session_api_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use session::{
    AuthChange, AuthChangeHandler, AuthError, AuthErrorKind, AuthGateway, AuthIdentity,
    AuthResult, AuthSubscription, ProfileRecord, ProfileStore, SignUpOutcome, SubscriptionTier,
};

use super::config::BackendConfig;
#[cfg(feature = "csr")]
use super::types::{ApiErrorBody, ProfileRow, SignUpResponse, TokenGrant, WireUser};

#[cfg(feature = "csr")]
const TOKEN_STORAGE_KEY: &str = "wordsmith_access_token";

// =============================================================================
// TOKEN CACHE
// =============================================================================

/// Access-token cache: in-memory, mirrored to `localStorage` in the
/// browser so a reload can detect the existing session.
#[derive(Default)]
pub struct TokenCache {
    token: Mutex<Option<String>>,
}

impl TokenCache {
    /// Cache primed from `localStorage` (browser) or empty (native).
    #[must_use]
    pub fn restore() -> Self {
        Self { token: Mutex::new(read_stored_token()) }
    }

    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set(&self, token: Option<String>) {
        write_stored_token(token.as_deref());
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = token;
    }
}

fn read_stored_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

fn write_stored_token(token: Option<&str>) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = match token {
            Some(value) => storage.set_item(TOKEN_STORAGE_KEY, value),
            None => storage.remove_item(TOKEN_STORAGE_KEY),
        };
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

/// Shared handle to the backend: location plus the current access token.
#[derive(Clone)]
pub struct Backend {
    pub config: BackendConfig,
    pub tokens: Arc<TokenCache>,
}

impl Backend {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self { config, tokens: Arc::new(TokenCache::restore()) }
    }

    /// Bearer value for authenticated requests: the session token when
    /// one exists, the publishable key otherwise.
    #[must_use]
    pub fn bearer(&self) -> String {
        self.tokens.get().unwrap_or_else(|| self.config.anon_key().to_owned())
    }
}

// =============================================================================
// FAILURE CLASSIFICATION
// =============================================================================

/// Classify a failed credential exchange.
#[must_use]
pub fn sign_in_failure(status: u16, message: String) -> AuthError {
    if message.to_ascii_lowercase().contains("confirmed") {
        return AuthError::new(AuthErrorKind::EmailNotConfirmed, message);
    }
    match status {
        400 | 401 | 403 => AuthError::new(AuthErrorKind::InvalidCredentials, message),
        _ => AuthError::new(AuthErrorKind::Backend, message),
    }
}

/// Classify a failed sign-up.
#[must_use]
pub fn sign_up_failure(status: u16, message: String) -> AuthError {
    let lower = message.to_ascii_lowercase();
    if status == 409 || lower.contains("registered") || lower.contains("exists") {
        return AuthError::new(AuthErrorKind::UserAlreadyExists, message);
    }
    if lower.contains("password") {
        return AuthError::new(AuthErrorKind::WeakPassword, message);
    }
    AuthError::new(AuthErrorKind::Backend, message)
}

/// Classify a failed password update.
#[must_use]
pub fn password_failure(message: String) -> AuthError {
    if message.to_ascii_lowercase().contains("password") {
        AuthError::new(AuthErrorKind::WeakPassword, message)
    } else {
        AuthError::new(AuthErrorKind::Backend, message)
    }
}

/// Generic status-code failure for requests without a useful body.
#[must_use]
pub fn request_failure(context: &str, status: u16) -> AuthError {
    AuthError::backend(format!("{context} failed: {status}"))
}

#[cfg(not(feature = "csr"))]
fn browser_only<T>() -> AuthResult<T> {
    Err(AuthError::network("not available outside the browser"))
}

// =============================================================================
// AUTH GATEWAY
// =============================================================================

type HandlerSlot = (u64, AuthChangeHandler);

fn lock_handlers(handlers: &Mutex<Vec<HandlerSlot>>) -> MutexGuard<'_, Vec<HandlerSlot>> {
    handlers.lock().unwrap_or_else(PoisonError::into_inner)
}

/// REST implementation of [`AuthGateway`].
///
/// State-change handlers fire on this gateway's own sign-in/sign-out
/// transitions; the backend has no push channel to the client.
pub struct HttpAuthGateway {
    backend: Backend,
    handlers: Arc<Mutex<Vec<HandlerSlot>>>,
    next_handler_id: AtomicU64,
}

impl HttpAuthGateway {
    #[must_use]
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            handlers: Arc::new(Mutex::new(Vec::new())),
            next_handler_id: AtomicU64::new(1),
        }
    }

    fn emit(&self, change: &AuthChange) {
        let handlers: Vec<AuthChangeHandler> =
            lock_handlers(&self.handlers).iter().map(|(_, h)| h.clone()).collect();
        for handler in handlers {
            handler(change.clone());
        }
    }
}

#[async_trait(?Send)]
impl AuthGateway for HttpAuthGateway {
    async fn sign_up(&self, email: &str, password: &str) -> AuthResult<SignUpOutcome> {
        #[cfg(feature = "csr")]
        {
            let url = self.backend.config.auth_endpoint("signup");
            let payload = serde_json::json!({ "email": email, "password": password });
            let response = gloo_net::http::Request::post(&url)
                .header("apikey", self.backend.config.anon_key())
                .json(&payload)
                .map_err(|e| AuthError::network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::network(e.to_string()))?;
            if !response.ok() {
                let body: ApiErrorBody = response.json().await.unwrap_or_default();
                return Err(sign_up_failure(response.status(), body.message()));
            }
            let parsed: SignUpResponse =
                response.json().await.map_err(|e| AuthError::backend(e.to_string()))?;
            match (parsed.access_token, parsed.user) {
                (Some(token), Some(user)) => {
                    self.backend.tokens.set(Some(token));
                    let identity = user.into_identity();
                    self.emit(&AuthChange::SignedIn(identity.clone()));
                    Ok(SignUpOutcome::SessionActive(identity))
                }
                _ => Ok(SignUpOutcome::ConfirmationRequired),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            browser_only()
        }
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> AuthResult<AuthIdentity> {
        #[cfg(feature = "csr")]
        {
            let url = self.backend.config.auth_endpoint("token?grant_type=password");
            let payload = serde_json::json!({ "email": email, "password": password });
            let response = gloo_net::http::Request::post(&url)
                .header("apikey", self.backend.config.anon_key())
                .json(&payload)
                .map_err(|e| AuthError::network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::network(e.to_string()))?;
            if !response.ok() {
                let body: ApiErrorBody = response.json().await.unwrap_or_default();
                return Err(sign_in_failure(response.status(), body.message()));
            }
            let grant: TokenGrant =
                response.json().await.map_err(|e| AuthError::backend(e.to_string()))?;
            self.backend.tokens.set(Some(grant.access_token));
            let identity = grant.user.into_identity();
            self.emit(&AuthChange::SignedIn(identity.clone()));
            Ok(identity)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            browser_only()
        }
    }

    async fn sign_out(&self) -> AuthResult<()> {
        let token = self.backend.tokens.get();
        self.backend.tokens.set(None);
        self.emit(&AuthChange::SignedOut);

        #[cfg(feature = "csr")]
        {
            let Some(token) = token else {
                return Ok(());
            };
            let url = self.backend.config.auth_endpoint("logout");
            let response = gloo_net::http::Request::post(&url)
                .header("apikey", self.backend.config.anon_key())
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await
                .map_err(|e| AuthError::network(e.to_string()))?;
            // An already-expired token is as signed out as it gets.
            if response.ok() || response.status() == 401 {
                Ok(())
            } else {
                Err(request_failure("sign-out", response.status()))
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Ok(())
        }
    }

    async fn current_session(&self) -> AuthResult<Option<AuthIdentity>> {
        #[cfg(feature = "csr")]
        {
            let Some(token) = self.backend.tokens.get() else {
                return Ok(None);
            };
            let url = self.backend.config.auth_endpoint("user");
            let response = gloo_net::http::Request::get(&url)
                .header("apikey", self.backend.config.anon_key())
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await
                .map_err(|e| AuthError::network(e.to_string()))?;
            if response.status() == 401 {
                self.backend.tokens.set(None);
                return Ok(None);
            }
            if !response.ok() {
                return Err(request_failure("session check", response.status()));
            }
            let user: WireUser =
                response.json().await.map_err(|e| AuthError::backend(e.to_string()))?;
            Ok(Some(user.into_identity()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    async fn reset_password_for_email(&self, email: &str, redirect_to: &str) -> AuthResult<()> {
        #[cfg(feature = "csr")]
        {
            let url = self
                .backend
                .config
                .auth_endpoint(&format!("recover?redirect_to={redirect_to}"));
            let payload = serde_json::json!({ "email": email });
            let response = gloo_net::http::Request::post(&url)
                .header("apikey", self.backend.config.anon_key())
                .json(&payload)
                .map_err(|e| AuthError::network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::network(e.to_string()))?;
            if response.ok() {
                Ok(())
            } else {
                Err(request_failure("password reset", response.status()))
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, redirect_to);
            browser_only()
        }
    }

    async fn update_password(&self, token: &str, new_password: &str) -> AuthResult<()> {
        #[cfg(feature = "csr")]
        {
            // A recovery link carries its own token; otherwise fall back
            // to the active session's.
            let bearer = if token.is_empty() {
                self.backend.tokens.get().unwrap_or_default()
            } else {
                token.to_owned()
            };
            if bearer.is_empty() {
                return Err(AuthError::backend("no credentials for password update"));
            }
            let url = self.backend.config.auth_endpoint("user");
            let payload = serde_json::json!({ "password": new_password });
            let response = gloo_net::http::Request::put(&url)
                .header("apikey", self.backend.config.anon_key())
                .header("Authorization", &format!("Bearer {bearer}"))
                .json(&payload)
                .map_err(|e| AuthError::network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::network(e.to_string()))?;
            if response.ok() {
                Ok(())
            } else {
                let body: ApiErrorBody = response.json().await.unwrap_or_default();
                Err(password_failure(body.message()))
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, new_password);
            browser_only()
        }
    }

    fn on_auth_state_change(&self, handler: AuthChangeHandler) -> AuthResult<AuthSubscription> {
        let id = self.next_handler_id.fetch_add(1, Ordering::Relaxed);
        lock_handlers(&self.handlers).push((id, handler));
        let handlers = self.handlers.clone();
        Ok(AuthSubscription::new(move || {
            lock_handlers(&handlers).retain(|(slot_id, _)| *slot_id != id);
            Ok(())
        }))
    }
}

// =============================================================================
// PROFILE STORE
// =============================================================================

/// REST implementation of [`ProfileStore`] over the `profiles` table.
pub struct HttpProfileStore {
    backend: Backend,
}

impl HttpProfileStore {
    #[must_use]
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }
}

#[async_trait(?Send)]
impl ProfileStore for HttpProfileStore {
    async fn fetch_profile(&self, user_id: &str) -> AuthResult<Option<ProfileRecord>> {
        #[cfg(feature = "csr")]
        {
            let url = self
                .backend
                .config
                .rest_endpoint(&format!("profiles?id=eq.{user_id}&select=id,subscription_status"));
            let response = gloo_net::http::Request::get(&url)
                .header("apikey", self.backend.config.anon_key())
                .header("Authorization", &format!("Bearer {}", self.backend.bearer()))
                .send()
                .await
                .map_err(|e| AuthError::network(e.to_string()))?;
            if !response.ok() {
                return Err(request_failure("profile lookup", response.status()));
            }
            let rows: Vec<ProfileRow> =
                response.json().await.map_err(|e| AuthError::backend(e.to_string()))?;
            Ok(rows.into_iter().next().map(ProfileRow::into_record))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = user_id;
            Ok(None)
        }
    }

    async fn update_subscription(&self, user_id: &str, tier: SubscriptionTier) -> AuthResult<()> {
        #[cfg(feature = "csr")]
        {
            let url = self.backend.config.rest_endpoint(&format!("profiles?id=eq.{user_id}"));
            let payload = serde_json::json!({ "subscription_status": tier.as_str() });
            let response = gloo_net::http::Request::patch(&url)
                .header("apikey", self.backend.config.anon_key())
                .header("Authorization", &format!("Bearer {}", self.backend.bearer()))
                .json(&payload)
                .map_err(|e| AuthError::network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::network(e.to_string()))?;
            if response.ok() {
                Ok(())
            } else {
                Err(request_failure("subscription update", response.status()))
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user_id, tier);
            browser_only()
        }
    }
}

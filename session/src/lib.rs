//! Session reconciliation core for the Wordsmith client.
//!
//! SYSTEM CONTEXT
//! ==============
//! This crate owns "who is logged in and what tier are they on". It
//! reconciles two asynchronous external sources (the auth service's
//! identity and the profile store's subscription record) into one
//! published snapshot that route guards and user-aware components read
//! synchronously. The external services are trait seams so the browser
//! client supplies HTTP implementations and tests supply scripted ones.
//!
//! DESIGN
//! ======
//! Every reconciliation is tagged with a monotonically increasing epoch.
//! A reconciliation that finishes after a newer one has started discards
//! its result instead of publishing, so the last event to *arrive* wins
//! even when an older profile fetch resolves late.

pub mod error;
pub mod events;
pub mod gateway;
pub mod manager;
pub mod types;

pub use error::{AuthError, AuthErrorKind, AuthResult};
pub use events::SessionEvent;
pub use gateway::{
    AuthChange, AuthChangeHandler, AuthGateway, AuthSubscription, ProfileStore, SignUpOutcome,
};
pub use manager::{SessionFuture, SessionManager};
pub use types::{
    AuthIdentity, ProfileRecord, Session, SessionPhase, SessionSnapshot, SessionUpdate,
    SubscriptionTier,
};

//! Session state glue for the reactive UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read the published
//! [`SessionSnapshot`] from a context signal; the session manager is the
//! only writer. Both are provided as contexts by the app root.

pub use session::{Session, SessionPhase, SessionSnapshot, SubscriptionTier};

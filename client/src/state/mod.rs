//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `articles`) so individual
//! components can depend on small focused models. The session snapshot
//! itself is owned by the `session` crate's manager; this layer only
//! mirrors it into a reactive signal.

pub mod articles;
pub mod session;

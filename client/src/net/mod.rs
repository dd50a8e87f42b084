//! Networking modules for the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` resolves the backend location, `types` defines the wire
//! schema, `session_api` implements the session crate's auth/profile
//! trait seams over REST, `articles` handles article persistence, and
//! `billing` holds the plan catalog plus the mocked checkout.

pub mod articles;
pub mod billing;
pub mod config;
pub mod session_api;
pub mod types;

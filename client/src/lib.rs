//! # client
//!
//! Leptos + WASM frontend for the Wordsmith AI article writer.
//! Replaces the React + Supabase SPA with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the REST
//! bindings for the hosted backend (auth, profiles, articles), and the
//! mock article generator. The session reconciliation core lives in the
//! `session` crate; this crate supplies its HTTP collaborators and wires
//! the published snapshot into the reactive UI.
//!
//! Browser-only behavior is gated behind the `csr` feature; without it
//! every network and storage call is an inert stub, so the whole crate
//! compiles and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}

//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect
//! behavior: wait for the initial session check, then send signed-out
//! visitors to the auth page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionSnapshot;

/// Redirect to `/auth` whenever the session has loaded and no user is
/// present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionSnapshot>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            navigate("/auth", NavigateOptions::default());
        }
    });
}

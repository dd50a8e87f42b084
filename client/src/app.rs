//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! The session manager is constructed exactly once here, wired to its
//! HTTP collaborators, and injected into consumers via context alongside
//! a signal mirroring its published snapshot. No module-level globals.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use session::SessionManager;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::net::config::BackendConfig;
use crate::net::session_api::{Backend, HttpAuthGateway, HttpProfileStore};
use crate::pages::{
    auth::AuthPage, dashboard::DashboardPage, home::HomePage, my_articles::MyArticlesPage,
    payment::PaymentPage, profile::ProfilePage, reset_password::ResetPasswordPage,
    settings::SettingsPage, writer::WriterPage,
};
use crate::state::articles::ArticlesState;

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let backend = Backend::new(BackendConfig::from_env());
    let manager = SessionManager::new(
        Arc::new(HttpAuthGateway::new(backend.clone())),
        Arc::new(HttpProfileStore::new(backend.clone())),
    );

    // Mirror the manager's published snapshot into a reactive signal.
    let session = RwSignal::new(manager.snapshot());
    manager.on_change(move |snapshot| session.set(snapshot.clone()));

    #[cfg(feature = "csr")]
    {
        manager.on_event(|event| log::warn!("session event: {event:?}"));
        manager.attach(|task| leptos::task::spawn_local(task));
        let boot = manager.clone();
        leptos::task::spawn_local(async move { boot.bootstrap().await });
    }

    let articles = RwSignal::new(ArticlesState::default());

    provide_context(session);
    provide_context(articles);
    provide_context(backend);
    provide_context(manager.clone());

    on_cleanup(move || manager.teardown());

    view! {
        <Stylesheet id="wordsmith" href="/styles.css"/>
        <Title text="Wordsmith"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("auth") view=AuthPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("writer") view=WriterPage/>
                    <Route path=StaticSegment("my-articles") view=MyArticlesPage/>
                    <Route path=StaticSegment("payment") view=PaymentPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

//! Account settings: notification preferences and password change.
//!
//! SYSTEM CONTEXT
//! ==============
//! Notification toggles are local-only preferences persisted in the
//! browser; the password form goes through the session manager using the
//! active session's credentials.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::SessionManager;

use crate::components::text_input::TextInput;
use crate::pages::reset_password::validate_new_password;
use crate::state::session::SessionSnapshot;
use crate::util::auth::install_unauth_redirect;
use crate::util::prefs::{load_notification_prefs, save_notification_prefs};

/// One notification toggle's metadata.
struct ToggleSpec {
    label: &'static str,
    description: &'static str,
}

const ACCOUNT_TOGGLE: ToggleSpec = ToggleSpec {
    label: "Account activity",
    description: "Receive notifications about your account via email",
};
const MARKETING_TOGGLE: ToggleSpec = ToggleSpec {
    label: "Marketing",
    description: "Receive occasional offers and promotions",
};
const UPDATES_TOGGLE: ToggleSpec = ToggleSpec {
    label: "Product updates",
    description: "Receive notifications about product updates and new features",
};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    let manager = StoredValue::new(expect_context::<SessionManager>());
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let prefs = RwSignal::new(load_notification_prefs());
    let prefs_saved = RwSignal::new(false);

    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let password_busy = RwSignal::new(false);
    let password_error = RwSignal::new(None::<String>);
    let password_success = RwSignal::new(None::<String>);

    let on_save_prefs = move |_| {
        save_notification_prefs(&prefs.get_untracked());
        prefs_saved.set(true);
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if password_busy.get() {
            return;
        }
        let password_value =
            match validate_new_password(&new_password.get(), &confirm_password.get()) {
                Ok(value) => value,
                Err(message) => {
                    password_error.set(Some(message.to_owned()));
                    return;
                }
            };
        password_error.set(None);
        password_success.set(None);
        password_busy.set(true);

        #[cfg(feature = "csr")]
        {
            let manager = manager.get_value();
            leptos::task::spawn_local(async move {
                match manager.update_password("", &password_value).await {
                    Ok(()) => {
                        password_success.set(Some("Password updated.".to_owned()));
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                    }
                    Err(e) => {
                        password_error.set(Some(format!("Could not update the password: {e}")));
                    }
                }
                password_busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (manager, password_value);
            password_busy.set(false);
        }
    };

    view! {
        <Show
            when=move || !session.get().loading && session.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="settings-page">
                        <p>
                            {move || {
                                if session.get().loading {
                                    "Loading..."
                                } else {
                                    "Redirecting to sign in..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="settings-page">
                <h1>"Settings"</h1>

                <section class="settings-card">
                    <h2>"Email Notifications"</h2>
                    <NotificationToggle
                        spec=&ACCOUNT_TOGGLE
                        checked=Signal::derive(move || prefs.get().account)
                        on_toggle=Callback::new(move |()| {
                            prefs.update(|p| p.account = !p.account);
                            prefs_saved.set(false);
                        })
                    />
                    <NotificationToggle
                        spec=&MARKETING_TOGGLE
                        checked=Signal::derive(move || prefs.get().marketing)
                        on_toggle=Callback::new(move |()| {
                            prefs.update(|p| p.marketing = !p.marketing);
                            prefs_saved.set(false);
                        })
                    />
                    <NotificationToggle
                        spec=&UPDATES_TOGGLE
                        checked=Signal::derive(move || prefs.get().updates)
                        on_toggle=Callback::new(move |()| {
                            prefs.update(|p| p.updates = !p.updates);
                            prefs_saved.set(false);
                        })
                    />
                    <button class="btn btn--primary" on:click=on_save_prefs>
                        "Save Preferences"
                    </button>
                    <Show when=move || prefs_saved.get()>
                        <p class="page-message page-message--success">"Preferences saved."</p>
                    </Show>
                </section>

                <section class="settings-card">
                    <h2>"Change Password"</h2>
                    <form class="auth-form" on:submit=on_change_password>
                        <TextInput
                            label="New Password"
                            value=new_password
                            input_type="password"
                        />
                        <TextInput
                            label="Confirm Password"
                            value=confirm_password
                            input_type="password"
                        />
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || password_busy.get()
                        >
                            "Update Password"
                        </button>
                    </form>
                    <Show when=move || password_error.get().is_some()>
                        <p class="page-message page-message--error">
                            {move || password_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <Show when=move || password_success.get().is_some()>
                        <p class="page-message page-message--success">
                            {move || password_success.get().unwrap_or_default()}
                        </p>
                    </Show>
                </section>
            </div>
        </Show>
    }
}

#[component]
fn NotificationToggle(
    spec: &'static ToggleSpec,
    checked: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="toggle-row">
            <div class="toggle-row__text">
                <span class="toggle-row__label">{spec.label}</span>
                <span class="toggle-row__description">{spec.description}</span>
            </div>
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(())
            />
        </label>
    }
}

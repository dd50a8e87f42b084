//! Password reset: request a reset email, or set a new password when
//! arriving from a recovery link (`?token=...&email=...`).

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use session::SessionManager;

use crate::components::text_input::TextInput;

/// Validate a reset-request form.
fn validate_reset_request(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    Ok(email.to_owned())
}

/// Validate a new password and its confirmation.
pub(crate) fn validate_new_password(
    password: &str,
    confirm: &str,
) -> Result<String, &'static str> {
    if password.trim().is_empty() {
        return Err("Password is required");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(password.to_owned())
}

/// Where the reset email should send the user back to.
#[cfg(any(test, feature = "csr"))]
fn reset_redirect_url() -> String {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return format!("{origin}/reset-password");
            }
        }
    }
    "/reset-password".to_owned()
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let manager = StoredValue::new(expect_context::<SessionManager>());
    let query = use_query_map();
    let token = Signal::derive(move || query.with(|q| q.get("token")));

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    // Prefill the email from the recovery link, if present.
    Effect::new(move || {
        if let Some(linked) = query.with(|q| q.get("email")) {
            if email.get_untracked().is_empty() {
                email.set(linked);
            }
        }
    });

    let on_request = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_reset_request(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let manager = manager.get_value();
            leptos::task::spawn_local(async move {
                match manager.reset_password(&email_value, &reset_redirect_url()).await {
                    Ok(()) => success.set(Some(
                        "Password reset instructions have been sent to your email.".to_owned(),
                    )),
                    Err(e) => error.set(Some(format!("Could not request a reset: {e}"))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (manager, email_value);
            busy.set(false);
        }
    };

    let on_update = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let password_value = match validate_new_password(&password.get(), &confirm.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let manager = manager.get_value();
            let token_value = token.get_untracked().unwrap_or_default();
            leptos::task::spawn_local(async move {
                match manager.update_password(&token_value, &password_value).await {
                    Ok(()) => success.set(Some(
                        "Password updated. You can now sign in with your new password.".to_owned(),
                    )),
                    Err(e) => error.set(Some(format!("Could not update the password: {e}"))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (manager, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <Show
                    when=move || token.get().is_some()
                    fallback=move || {
                        view! {
                            <h1>"Reset Password"</h1>
                            <form class="auth-form" on:submit=on_request>
                                <TextInput
                                    label="Email"
                                    value=email
                                    input_type="email"
                                    placeholder="you@example.com"
                                />
                                <button
                                    class="btn btn--primary"
                                    type="submit"
                                    disabled=move || busy.get()
                                >
                                    "Send Reset Instructions"
                                </button>
                            </form>
                        }
                    }
                >
                    <h1>"Choose a New Password"</h1>
                    <form class="auth-form" on:submit=on_update>
                        <TextInput label="New Password" value=password input_type="password"/>
                        <TextInput label="Confirm Password" value=confirm input_type="password"/>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Update Password"
                        </button>
                    </form>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || success.get().is_some()>
                    <p class="auth-message auth-message--success">
                        {move || success.get().unwrap_or_default()}
                    </p>
                </Show>
                <a class="auth-forgot" href="/auth">
                    "Back to sign in"
                </a>
            </div>
        </div>
    }
}

//! Combined sign-in / sign-up page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::SessionManager;
#[cfg(feature = "csr")]
use session::SignUpOutcome;
#[cfg(any(test, feature = "csr"))]
use session::{AuthError, AuthErrorKind};

use crate::components::text_input::TextInput;

/// Which form the page is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

/// Validate the credential form, returning trimmed email and password.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    if password.trim().is_empty() {
        return Err("Password is required");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Display message for a failed sign-in or sign-up.
#[cfg(any(test, feature = "csr"))]
fn auth_failure_message(error: &AuthError) -> String {
    match error.kind {
        AuthErrorKind::InvalidCredentials => "Invalid email or password.".to_owned(),
        AuthErrorKind::UserAlreadyExists => {
            "An account with this email already exists. Try signing in instead.".to_owned()
        }
        AuthErrorKind::EmailNotConfirmed => {
            "Please confirm your email address before signing in.".to_owned()
        }
        AuthErrorKind::WeakPassword => format!("Please pick a stronger password: {error}"),
        AuthErrorKind::Network | AuthErrorKind::Backend => {
            format!("Something went wrong: {error}")
        }
    }
}

#[cfg(feature = "csr")]
const SIGN_UP_SUCCESS: &str =
    "Registration successful! Please check your email to confirm your account.";

#[component]
pub fn AuthPage() -> impl IntoView {
    let manager = StoredValue::new(expect_context::<SessionManager>());

    let mode = RwSignal::new(AuthMode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let toggle_mode = move |_| {
        mode.update(|m| {
            *m = match m {
                AuthMode::SignIn => AuthMode::SignUp,
                AuthMode::SignUp => AuthMode::SignIn,
            };
        });
        error.set(None);
        success.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        error.set(None);
        success.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let manager = manager.get_value();
            let submit_mode = mode.get_untracked();
            leptos::task::spawn_local(async move {
                match submit_mode {
                    AuthMode::SignIn => match manager.sign_in(&email_value, &password_value).await {
                        Ok(()) => {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href("/");
                            }
                        }
                        Err(e) => {
                            error.set(Some(auth_failure_message(&e)));
                            busy.set(false);
                        }
                    },
                    AuthMode::SignUp => match manager.sign_up(&email_value, &password_value).await {
                        Ok(SignUpOutcome::SessionActive(_)) => {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href("/");
                            }
                        }
                        Ok(SignUpOutcome::ConfirmationRequired) => {
                            success.set(Some(SIGN_UP_SUCCESS.to_owned()));
                            busy.set(false);
                        }
                        Err(e) => {
                            error.set(Some(auth_failure_message(&e)));
                            busy.set(false);
                        }
                    },
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (manager, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{move || {
                    if mode.get() == AuthMode::SignIn { "Sign In" } else { "Create an Account" }
                }}</h1>
                <form class="auth-form" on:submit=on_submit>
                    <TextInput
                        label="Email"
                        value=email
                        input_type="email"
                        placeholder="you@example.com"
                    />
                    <TextInput label="Password" value=password input_type="password"/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || {
                            if mode.get() == AuthMode::SignIn { "Sign In" } else { "Sign Up" }
                        }}
                    </button>
                </form>
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
                <button class="auth-toggle" on:click=toggle_mode>
                    {move || {
                        if mode.get() == AuthMode::SignIn {
                            "Need an account? Sign up"
                        } else {
                            "Already registered? Sign in"
                        }
                    }}
                </button>
                <a class="auth-forgot" href="/reset-password">
                    "Forgot your password?"
                </a>
            </div>
        </div>
    }
}

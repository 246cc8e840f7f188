//! Sign-in / sign-up page.
//!
//! The identity provider itself sits behind the server; this page only
//! collects credentials, posts them, and lets the signed-in redirect take
//! the user to the dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{SignInRequest, SignUpRequest};
use crate::state::auth::AuthState;
use crate::util::auth::install_signed_in_redirect;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Self::SignIn => "Welcome back",
            Self::SignUp => "Create your account",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }

    fn toggle_label(self) -> &'static str {
        match self {
            Self::SignIn => "Don't have an account? Sign up",
            Self::SignUp => "Already have an account? Sign in",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Credentials {
    SignIn(SignInRequest),
    SignUp(SignUpRequest),
}

/// Trim and check the raw inputs for `mode`.
pub(crate) fn validate_credentials(
    mode: AuthMode,
    name: &str,
    email: &str,
    password: &str,
) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    match mode {
        AuthMode::SignIn => Ok(Credentials::SignIn(SignInRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        })),
        AuthMode::SignUp => {
            let name = name.trim();
            if name.is_empty() {
                return Err("Enter your name.");
            }
            Ok(Credentials::SignUp(SignUpRequest {
                name: name.to_owned(),
                email: email.to_owned(),
                password: password.to_owned(),
            }))
        }
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_signed_in_redirect(auth, use_navigate());

    let mode = RwSignal::new(AuthMode::SignIn);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(mode.get(), &name.get(), &email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match &credentials {
                Credentials::SignIn(request) => crate::net::api::sign_in(request).await.map(Some),
                Credentials::SignUp(request) => crate::net::api::sign_up(request).await,
            };
            match outcome {
                Ok(Some(user)) => auth.update(|a| a.resolve(Some(user))),
                Ok(None) => info.set("Check your email to confirm your account, then sign in.".to_owned()),
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = credentials;
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h1 class="auth-card__heading">{move || mode.get().heading()}</h1>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::SignUp>
                        <label class="auth-form__field">
                            "Name"
                            <input
                                type="text"
                                autocomplete="name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <label class="auth-form__field">
                        "Email"
                        <input
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        "Password"
                        <input
                            type="password"
                            autocomplete="current-password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || mode.get().submit_label()}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__message">{move || info.get()}</p>
                </Show>
                <button
                    class="btn btn--link"
                    type="button"
                    on:click=move |_| {
                        mode.update(|m| *m = m.toggled());
                        info.set(String::new());
                    }
                >
                    {move || mode.get().toggle_label()}
                </button>
            </div>
        </div>
    }
}

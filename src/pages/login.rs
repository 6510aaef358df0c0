//! Email/password login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrapped in `PublicRoute`. A successful login hands the tokens to the
//! session store; its broadcast flips the guard, which navigates to
//! `/dashboard` without a page reload.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{LoginOutcome, LoginRequest};
use crate::state::session::SessionStore;

const MISSING_CREDENTIALS: &str = "Please enter both email and password";

/// Build a login request from raw form input.
fn login_request(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

/// Apply a login response to the session.
///
/// Returns the path to navigate to explicitly, if any; a stored token needs
/// no navigation because the route guard reacts to the session broadcast.
fn apply_login_outcome(
    session: &SessionStore,
    result: Result<LoginOutcome, ApiError>,
) -> Result<Option<&'static str>, String> {
    match result {
        Ok(LoginOutcome::Tokens(tokens)) => {
            session.login(&tokens).map_err(|e| e.to_string())?;
            Ok(None)
        }
        Ok(LoginOutcome::AcceptedWithoutToken) => {
            log::warn!("login accepted without a token; session left unchanged");
            Ok(Some("/"))
        }
        Err(e) => Err(e.to_string()),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match login_request(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let api = api.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api.login(&request).await;
            busy.set(false);
            match apply_login_outcome(&session, result) {
                Ok(Some(path)) => navigate(path, NavigateOptions::default()),
                Ok(None) => {}
                Err(message) => error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-page__form" on:submit=on_submit>
                <h1>"Admin Login"</h1>
                <label class="auth-page__label">
                    "Email"
                    <input
                        class="auth-page__input"
                        type="email"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <div class="auth-page__password">
                        <input
                            class="auth-page__input"
                            type=move || password_input_type(show_password.get())
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="auth-page__reveal"
                            on:click=move |_| show_password.update(|shown| *shown = !*shown)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </label>
                {move || error.get().map(|e| view! { <p class="auth-page__error">{e}</p> })}
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>
                <p class="auth-page__switch">
                    "Don't have an account? " <a href="/signup">"Sign up"</a>
                </p>
            </form>
        </div>
    }
}

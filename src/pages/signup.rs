//! Account signup page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::LOGIN_PATH;
use crate::net::api::ApiClient;
use crate::net::types::SignupRequest;

const MISSING_FIELDS: &str = "Name, email, and password are required";

/// Build a signup request; a blank referral code is omitted.
fn signup_request(name: &str, email: &str, password: &str, referral: &str) -> Result<SignupRequest, &'static str> {
    let (name, email, referral) = (name.trim(), email.trim(), referral.trim());
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(SignupRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        referral: (!referral.is_empty()).then(|| referral.to_owned()),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let referral = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match signup_request(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &referral.get_untracked(),
        ) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api.signup(&request).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    log::info!("signup succeeded; redirecting to login");
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-page__form" on:submit=on_submit>
                <h1>"Create Account"</h1>
                <label class="auth-page__label">
                    "Name"
                    <input
                        class="auth-page__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Email"
                    <input
                        class="auth-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input
                        class="auth-page__input"
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Referral Code (optional)"
                    <input
                        class="auth-page__input"
                        type="text"
                        prop:value=move || referral.get()
                        on:input=move |ev| referral.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|e| view! { <p class="auth-page__error">{e}</p> })}
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                </button>
                <p class="auth-page__switch">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </form>
        </div>
    }
}

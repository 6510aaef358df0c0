//! Route guards gating views on session status.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route in the app is wrapped by exactly one of `ProtectedRoute` or
//! `PublicRoute`. Both read the `RwSignal<SessionState>` mirror of the session
//! store, so a login, logout, or sitewide auth failure re-evaluates them
//! without a page reload.
//!
//! While the session is still resolving, guards render a placeholder instead
//! of redirecting, which keeps SSR output and the first hydrated frame stable.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::config::{DEFAULT_AUTHENTICATED_PATH, LOGIN_PATH};
use crate::state::session::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    /// Requires an authenticated session.
    Protected,
    /// Login/signup screens; authenticated users are sent onward.
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Placeholder,
    Render,
    Redirect(&'static str),
}

/// Decide what a guard shows for the given session snapshot.
pub fn resolve_guard(kind: GuardKind, state: &SessionState) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Placeholder;
    }
    match (kind, state.is_authenticated) {
        (GuardKind::Protected, false) => GuardOutcome::Redirect(LOGIN_PATH),
        (GuardKind::Public, true) => GuardOutcome::Redirect(DEFAULT_AUTHENTICATED_PATH),
        _ => GuardOutcome::Render,
    }
}

/// Render `children` only for authenticated sessions.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::Protected, children)
}

/// Render `children` only for anonymous sessions.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::Public, children)
}

fn guarded(kind: GuardKind, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    move || match resolve_guard(kind, &session.get()) {
        GuardOutcome::Placeholder => view! { <div class="route-guard__pending">"Loading..."</div> }.into_any(),
        GuardOutcome::Redirect(path) => {
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=path options=options/> }.into_any()
        }
        GuardOutcome::Render => children().into_any(),
    }
}

//! Session store: the single owner of authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the API client, and the logout button all go through one
//! `SessionStore` provided via Leptos context. Nothing else reads or writes
//! persisted tokens.
//!
//! DESIGN
//! ======
//! - Tokens live in a primary store (cookies in the browser) with a fallback
//!   store (`localStorage`) that only mirrors the access token.
//! - Reads prefer the primary store and consult the fallback only when the
//!   primary has nothing.
//! - Every state change is broadcast to subscribers, so views re-render
//!   without reloading the page after login.
//! - Storage failures never surface as errors from `initialize`; an unreadable
//!   store resolves to "not authenticated".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::config::{ACCESS_TOKEN_KEY, ACCESS_TOKEN_TTL, FALLBACK_TOKEN_KEY, REFRESH_TOKEN_KEY, REFRESH_TOKEN_TTL};
use crate::util::storage::{CookieStorage, LocalStorage, StorageError, TokenStorage};

/// Observable session status.
///
/// The default value is the unresolved state every page load starts in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { is_authenticated: false, loading: true }
    }
}

impl SessionState {
    #[must_use]
    pub fn resolved(is_authenticated: bool) -> Self {
        Self { is_authenticated, loading: false }
    }
}

/// Tokens issued by a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("access token is empty")]
    EmptyAccessToken,
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&SessionState) + Send + Sync>;

struct SessionInner {
    state: SessionState,
    token: Option<String>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Shared, cloneable session service.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<SessionInner>>,
    primary: Arc<dyn TokenStorage>,
    fallback: Option<Arc<dyn TokenStorage>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("state", &self.state()).finish_non_exhaustive()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new(primary: Arc<dyn TokenStorage>, fallback: Option<Arc<dyn TokenStorage>>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner {
                state: SessionState::default(),
                token: None,
                listeners: Vec::new(),
                next_id: 0,
            })),
            primary,
            fallback,
        }
    }

    /// Cookie-backed store with a `localStorage` mirror.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(Arc::new(CookieStorage), Some(Arc::new(LocalStorage)))
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.lock().state.clone()
    }

    /// Access token for the `Authorization` header.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.lock().token.clone()
    }

    /// Resolve the session from persisted storage.
    pub fn initialize(&self) -> SessionState {
        let token = self.read_persisted_token();
        let state = SessionState::resolved(token.is_some());
        log::info!("session resolved: authenticated={}", state.is_authenticated);
        self.commit(token, state.clone());
        state
    }

    /// Persist freshly issued tokens and mark the session authenticated.
    ///
    /// Storage write failures are logged; the current tab stays signed in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyAccessToken`] if `tokens.access` is blank.
    pub fn login(&self, tokens: &AuthTokens) -> Result<SessionState, SessionError> {
        let access = tokens.access.trim();
        if access.is_empty() {
            return Err(SessionError::EmptyAccessToken);
        }

        if let Some(refresh) = tokens.refresh.as_deref().filter(|r| !r.is_empty()) {
            warn_on_err("refresh token", self.primary.set(REFRESH_TOKEN_KEY, refresh, Some(REFRESH_TOKEN_TTL)));
        }
        warn_on_err("access token", self.primary.set(ACCESS_TOKEN_KEY, access, Some(ACCESS_TOKEN_TTL)));
        if let Some(fallback) = &self.fallback {
            warn_on_err("fallback token", fallback.set(FALLBACK_TOKEN_KEY, access, None));
        }

        let state = SessionState::resolved(true);
        log::info!("session established");
        self.commit(Some(access.to_owned()), state.clone());
        Ok(state)
    }

    /// Clear persisted tokens and mark the session anonymous.
    pub fn logout(&self) -> SessionState {
        warn_on_err("access token", self.primary.remove(ACCESS_TOKEN_KEY));
        warn_on_err("refresh token", self.primary.remove(REFRESH_TOKEN_KEY));
        if let Some(fallback) = &self.fallback {
            warn_on_err("fallback token", fallback.remove(FALLBACK_TOKEN_KEY));
        }

        let state = SessionState::resolved(false);
        log::info!("session cleared");
        self.commit(None, state.clone());
        state
    }

    /// Register a listener called after every state change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock().listeners.retain(|(lid, _)| *lid != id);
    }

    fn read_persisted_token(&self) -> Option<String> {
        let primary = read_token(self.primary.as_ref(), ACCESS_TOKEN_KEY);
        if primary.is_some() {
            return primary;
        }
        self.fallback.as_deref().and_then(|f| read_token(f, FALLBACK_TOKEN_KEY))
    }

    fn commit(&self, token: Option<String>, state: SessionState) {
        let listeners: Vec<Listener> = {
            let mut inner = self.lock();
            inner.token = token;
            inner.state = state.clone();
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        // Listeners run unlocked so they may read the store.
        for listener in listeners {
            listener(&state);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn read_token(storage: &dyn TokenStorage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value.filter(|v| !v.trim().is_empty()),
        Err(e) => {
            log::warn!("token read failed for `{key}`: {e}");
            None
        }
    }
}

fn warn_on_err(what: &str, result: Result<(), StorageError>) {
    if let Err(e) = result {
        log::warn!("{what} not persisted: {e}");
    }
}

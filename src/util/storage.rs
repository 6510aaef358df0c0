//! Durable token storage backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists tokens through the `TokenStorage` trait so the
//! same logic runs against browser cookies, `localStorage`, or an in-memory
//! map during SSR and tests.
//!
//! TRADE-OFFS
//! ==========
//! Browser backends resolve `window` on every call instead of caching handles,
//! which keeps them zero-sized and `Send + Sync` for Leptos context.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use cookie::{Cookie, SameSite};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Key/value persistence with optional expiry.
pub trait TokenStorage: Send + Sync {
    /// Read a value. Expired or missing entries read as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the backend cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend is unavailable or rejects the write.
    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StorageError>;

    /// Delete a value. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend is unavailable.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// COOKIE FORMAT
// =============================================================================

/// Render a `document.cookie` assignment for `name`.
///
/// `ttl = None` produces a session cookie; a zero ttl deletes the cookie.
pub fn format_cookie(name: &str, value: &str, ttl: Option<Duration>, secure: bool) -> String {
    let mut builder = Cookie::build((name.to_owned(), value.to_owned()))
        .path("/")
        .same_site(SameSite::Strict)
        .secure(secure);
    if let Some(ttl) = ttl {
        let secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        builder = builder.max_age(cookie::time::Duration::seconds(secs));
    }
    builder.build().encoded().to_string()
}

/// Find the decoded value of `name` in a `document.cookie` string.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(header.to_owned())
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_owned())
}

// =============================================================================
// MEMORY
// =============================================================================

#[derive(Debug, Clone)]
struct MemoryEntry {
    value: String,
    ttl: Option<Duration>,
    expires_at: Option<Duration>,
}

#[derive(Debug)]
struct MemoryInner {
    entries: HashMap<String, MemoryEntry>,
    now: Duration,
    available: bool,
}

/// In-process storage with a manual clock.
///
/// Serves as the SSR backend and as the test double for browser storage.
#[derive(Debug)]
pub struct MemoryStorage {
    inner: Mutex<MemoryInner>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self { inner: Mutex::new(MemoryInner { entries: HashMap::new(), now: Duration::ZERO, available: true }) }
    }

    /// Storage that rejects every call, like a browser with storage disabled.
    #[must_use]
    pub fn unavailable() -> Self {
        let storage = Self::new();
        storage.set_available(false);
        storage
    }

    pub fn set_available(&self, available: bool) {
        self.lock().available = available;
    }

    /// Move the clock forward; entries whose ttl has elapsed stop reading.
    pub fn advance(&self, by: Duration) {
        let mut inner = self.lock();
        inner.now += by;
    }

    /// The ttl an entry was written with, if it is still live.
    pub fn ttl_of(&self, key: &str) -> Option<Duration> {
        let inner = self.lock();
        inner.entries.get(key).filter(|e| is_live(e, inner.now)).and_then(|e| e.ttl)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn is_live(entry: &MemoryEntry, now: Duration) -> bool {
    entry.expires_at.map_or(true, |at| now < at)
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.lock();
        if !inner.available {
            return Err(StorageError::Unavailable("memory storage disabled".to_owned()));
        }
        Ok(inner.entries.get(key).filter(|e| is_live(e, inner.now)).map(|e| e.value.clone()))
    }

    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StorageError> {
        let mut inner = self.lock();
        if !inner.available {
            return Err(StorageError::Unavailable("memory storage disabled".to_owned()));
        }
        let expires_at = ttl.map(|t| inner.now + t);
        inner.entries.insert(key.to_owned(), MemoryEntry { value: value.to_owned(), ttl, expires_at });
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();
        if !inner.available {
            return Err(StorageError::Unavailable("memory storage disabled".to_owned()));
        }
        inner.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `document.cookie` backend. Honors ttl through `Max-Age`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieStorage;

/// `window.localStorage` backend. Ignores ttl.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn html_document() -> Result<web_sys::HtmlDocument, StorageError> {
    use wasm_bindgen::JsCast as _;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .ok_or_else(|| StorageError::Unavailable("no html document".to_owned()))
}

#[cfg(feature = "hydrate")]
fn is_https() -> bool {
    web_sys::window()
        .and_then(|w| w.location().protocol().ok())
        .is_some_and(|p| p == "https:")
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))
}

impl TokenStorage for CookieStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let raw = html_document()?
                .cookie()
                .map_err(|_| StorageError::Unavailable("cookies blocked".to_owned()))?;
            Ok(find_cookie(&raw, key))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable("cookies require a browser".to_owned()))
        }
    }

    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            html_document()?
                .set_cookie(&format_cookie(key, value, ttl, is_https()))
                .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value, ttl);
            Err(StorageError::Unavailable("cookies require a browser".to_owned()))
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.set(key, "", Some(Duration::ZERO))
    }
}

impl TokenStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable("localStorage requires a browser".to_owned()))
        }
    }

    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let _ = ttl;
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value, ttl);
            Err(StorageError::Unavailable("localStorage requires a browser".to_owned()))
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable("localStorage requires a browser".to_owned()))
        }
    }
}

//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the API base URL
//! is baked in from `ADMIN_API_BASE_URL` when the crate is compiled. Storage
//! keys, token lifetimes, and page sizes are fixed constants shared by the
//! session store and the CRUD pages.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://newrepo-4pyc.onrender.com";

/// Cookie holding the short-lived access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Cookie holding the long-lived refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// `localStorage` key mirroring the access token.
pub const FALLBACK_TOKEN_KEY: &str = "token";

pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);
pub const REFRESH_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

pub const CATEGORIES_PER_PAGE: usize = 8;
pub const LISTINGS_PER_PAGE: usize = 8;
pub const BLOGS_PER_PAGE: usize = 8;
pub const USERS_PER_PAGE: usize = 10;

/// Route the login flow and `PublicRoute` send authenticated users to.
pub const DEFAULT_AUTHENTICATED_PATH: &str = "/dashboard";
/// Route `ProtectedRoute` sends anonymous users to.
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    /// Build from compile-time environment, falling back to the hosted backend.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("ADMIN_API_BASE_URL"))
    }

    fn with_base_url(raw: Option<&str>) -> Self {
        let api_base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

//! REST client for the admin backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call resolves to
//! [`ApiError::Unavailable`], since the backend is only reachable from the
//! browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` is provided once via Leptos context. It is the only reader of
//! the session token, and any 401/403 on an authenticated call clears the
//! session sitewide so route guards bounce the user back to `/login`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::{ApiError, classify_response};
use super::form::{BlogDraft, CategoryDraft, ListingDraft, MultipartForm};
use super::types::{AdminUser, Blog, Category, Listing, LoginOutcome, LoginRequest, SignupRequest, decode_collection};
use crate::config::ClientConfig;
use crate::state::session::SessionStore;

const LOGIN_PATH: &str = "/admin/login";
const SIGNUP_PATH: &str = "/auth/signup";
const CATEGORIES_PATH: &str = "/admin/get-all-categories";
const CREATE_CATEGORY_PATH: &str = "/admin/create-category";
const BLOGS_PATH: &str = "/user/all-blogs";
const CREATE_BLOG_PATH: &str = "/admin/create-blog";
const USERS_PATH: &str = "/admin/get-all-users";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
enum Payload {
    Empty,
    Json(serde_json::Value),
    Form(MultipartForm),
}

/// Percent-encode a single path segment (RFC 3986 unreserved set passes through).
pub(crate) fn encode_path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => out.push(char::from(byte)),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn edit_category_path(id: &str) -> String {
    format!("/admin/edit-category/{}", encode_path_segment(id))
}

fn add_listing_path(category_name: &str) -> String {
    format!("/admin/add-listing/{}", encode_path_segment(category_name))
}

fn delete_path(id: &str) -> String {
    format!("/admin/delete/{}", encode_path_segment(id))
}

/// The login response may set session cookies, so it must be sent with credentials.
fn sends_credentials(path: &str) -> bool {
    path == LOGIN_PATH
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// A classified 2xx response.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Debug, Clone, PartialEq, Eq)]
struct Reply {
    status: u16,
    body: String,
}

/// Signup accepts exactly 200 or 201.
fn check_signup_status(reply: Reply) -> Result<(), ApiError> {
    if matches!(reply.status, 200 | 201) { Ok(()) } else { Err(ApiError::server(reply.status, &reply.body)) }
}

/// Session-aware REST client.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: &ClientConfig, session: SessionStore) -> Self {
        Self { base_url: config.api_base_url.clone(), session }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// `POST /admin/login`. Does not touch the session; the caller decides
    /// what to do with the outcome.
    ///
    /// # Errors
    ///
    /// Returns transport, server, or token-interpretation errors.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginOutcome, ApiError> {
        let payload = serde_json::to_value(request).map_err(|e| ApiError::Request(e.to_string()))?;
        let reply = self.execute(Verb::Post, LOGIN_PATH.to_owned(), Payload::Json(payload), false).await?;
        LoginOutcome::from_body(&reply.body)
    }

    /// `POST /auth/signup`; 200 or 201 is success.
    ///
    /// # Errors
    ///
    /// Returns transport or server errors.
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        let payload = serde_json::to_value(request).map_err(|e| ApiError::Request(e.to_string()))?;
        let reply = self.execute(Verb::Post, SIGNUP_PATH.to_owned(), Payload::Json(payload), false).await?;
        check_signup_status(reply)
    }

    // =========================================================================
    // CATEGORIES & LISTINGS
    // =========================================================================

    /// # Errors
    ///
    /// Returns transport, auth, server, or decode errors.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let body = self.execute(Verb::Get, CATEGORIES_PATH.to_owned(), Payload::Empty, true).await?.body;
        decode_collection(&body)
    }

    /// # Errors
    ///
    /// Returns validation, transport, auth, or server errors.
    pub async fn create_category(&self, draft: CategoryDraft) -> Result<(), ApiError> {
        let form = draft.into_form()?;
        self.execute(Verb::Post, CREATE_CATEGORY_PATH.to_owned(), Payload::Form(form), true).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns validation, transport, auth, or server errors.
    pub async fn update_category(&self, id: &str, draft: CategoryDraft) -> Result<(), ApiError> {
        let form = draft.into_form()?;
        self.execute(Verb::Put, edit_category_path(id), Payload::Form(form), true).await?;
        Ok(())
    }

    /// Add a listing under `category_name` and return the created record.
    ///
    /// # Errors
    ///
    /// Returns validation, transport, auth, server, or decode errors.
    pub async fn create_listing(&self, category_name: &str, draft: ListingDraft) -> Result<Listing, ApiError> {
        if category_name.trim().is_empty() {
            return Err(ApiError::validation("Category name is missing"));
        }
        let form = draft.into_form()?;
        let body = self.execute(Verb::Post, add_listing_path(category_name), Payload::Form(form), true).await?.body;
        decode_json(&body)
    }

    // =========================================================================
    // BLOGS & USERS
    // =========================================================================

    /// # Errors
    ///
    /// Returns transport, auth, server, or decode errors.
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, ApiError> {
        let body = self.execute(Verb::Get, BLOGS_PATH.to_owned(), Payload::Empty, true).await?.body;
        decode_collection(&body)
    }

    /// # Errors
    ///
    /// Returns validation, transport, auth, or server errors.
    pub async fn create_blog(&self, draft: BlogDraft) -> Result<(), ApiError> {
        let form = draft.into_form()?;
        self.execute(Verb::Post, CREATE_BLOG_PATH.to_owned(), Payload::Form(form), true).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns transport, auth, server, or decode errors.
    pub async fn list_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        let body = self.execute(Verb::Get, USERS_PATH.to_owned(), Payload::Empty, true).await?.body;
        decode_collection(&body)
    }

    /// `DELETE /admin/delete/{id}` for any record kind.
    ///
    /// # Errors
    ///
    /// Returns transport, auth, or server errors.
    pub async fn delete_record(&self, id: &str) -> Result<(), ApiError> {
        self.execute(Verb::Delete, delete_path(id), Payload::Empty, true).await?;
        Ok(())
    }

    // =========================================================================
    // TRANSPORT
    // =========================================================================

    /// Apply response classification and sitewide session invalidation.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn settle(&self, status: u16, body: String, session_bound: bool) -> Result<String, ApiError> {
        let result = classify_response(status, body, session_bound);
        match &result {
            Err(ApiError::Unauthorized { status }) => {
                log::warn!("authorization rejected ({status}); clearing session");
                self.session.logout();
            }
            Err(e) => log::warn!("request failed: {e}"),
            Ok(_) => {}
        }
        result
    }

    #[cfg(feature = "hydrate")]
    async fn execute(&self, verb: Verb, path: String, payload: Payload, session_bound: bool) -> Result<Reply, ApiError> {
        use gloo_net::http::{Method, RequestBuilder};

        let method = match verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        };
        let mut builder = RequestBuilder::new(&self.url(&path)).method(method);
        if sends_credentials(&path) {
            builder = builder.credentials(web_sys::RequestCredentials::Include);
        }
        if let Some(token) = self.session.token() {
            builder = builder.header("Authorization", &bearer(&token));
        }
        let request = match payload {
            Payload::Empty => builder.build(),
            Payload::Json(value) => builder.json(&value),
            Payload::Form(form) => builder.body(form.to_form_data()?),
        }
        .map_err(|e| ApiError::Request(e.to_string()))?;

        let response = request.send().await.map_err(|e| {
            log::error!("{verb:?} {path} unreachable: {e}");
            ApiError::Network(e.to_string())
        })?;
        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        let body = self.settle(status, body, session_bound)?;
        Ok(Reply { status, body })
    }

    #[cfg(not(feature = "hydrate"))]
    async fn execute(&self, verb: Verb, path: String, payload: Payload, session_bound: bool) -> Result<Reply, ApiError> {
        let _ = (verb, self.url(&path), payload, session_bound, bearer(""), sends_credentials(&path));
        Err(ApiError::Unavailable)
    }
}

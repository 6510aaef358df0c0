//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! `Display` output is the user-visible message. Pages render it directly in
//! their error slot; nothing is rethrown to a global handler and no call is
//! retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

pub const NETWORK_FAILURE_MESSAGE: &str = "Server connection failed. Please check if the server is running.";
pub const MISSING_TOKEN_MESSAGE: &str = "Login successful but no authentication token received";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{}", NETWORK_FAILURE_MESSAGE)]
    Network(String),
    /// 401/403 on an authenticated call. The session has been cleared.
    #[error("Your session has expired. Please log in again.")]
    Unauthorized { status: u16 },
    /// Rejected locally before any request was sent.
    #[error("{0}")]
    Validation(String),
    /// Non-success response; `text` is the server message or a generic fallback.
    #[error("{text}")]
    Server { status: u16, text: String },
    #[error("No data received from server")]
    EmptyResponse,
    #[error("{}", MISSING_TOKEN_MESSAGE)]
    MissingToken,
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    #[error("Request error: {0}")]
    Request(String),
    #[error("not available on server")]
    Unavailable,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Build a `Server` error from a failed response, passing through the
    /// body's `message` when it has one.
    #[must_use]
    pub fn server(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let text = match parsed.message.filter(|m| !m.trim().is_empty()) {
            Some(message) => message,
            None => {
                let detail = parsed.error.filter(|e| !e.trim().is_empty());
                format!("Server error: {status}. {}", detail.as_deref().unwrap_or("Please try again"))
            }
        };
        Self::Server { status, text }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Whether a status means the bearer token was rejected.
#[must_use]
pub fn is_auth_failure(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// Map a response to its body or an [`ApiError`].
///
/// `session_bound` calls treat 401/403 as an expired session; public calls
/// (login, signup) pass the server message through instead.
///
/// # Errors
///
/// Returns an error for any non-2xx status.
pub fn classify_response(status: u16, body: String, session_bound: bool) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        return Ok(body);
    }
    if session_bound && is_auth_failure(status) {
        return Err(ApiError::Unauthorized { status });
    }
    Err(ApiError::server(status, &body))
}

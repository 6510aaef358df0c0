//! Wire DTOs for the admin REST backend.
//!
//! DESIGN
//! ======
//! The backend is a document store that identifies records by `_id` but some
//! endpoints also emit a plain `id` (string or number). Records keep both and
//! expose a single [`Record::key`]. Every descriptive field is optional so a
//! partially populated document still renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::ApiError;
use crate::state::session::AuthTokens;

/// Common surface of every listable record.
pub trait Record {
    /// Identifier used for edit/delete paths.
    fn key(&self) -> Option<&str>;
    /// Human label for cards and confirmation prompts.
    fn label(&self) -> &str;
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

/// `null` reads as an empty list.
fn deserialize_vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a number or a numeric string; anything else reads as `None`.
fn deserialize_lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn pick_key<'a>(object_id: Option<&'a String>, id: Option<&'a String>) -> Option<&'a str> {
    object_id.or(id).map(String::as_str).filter(|k| !k.is_empty())
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_opt_id")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_count")]
    pub count: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub listings: Vec<Listing>,
}

impl Record for Category {
    fn key(&self) -> Option<&str> {
        pick_key(self.object_id.as_ref(), self.id.as_ref())
    }

    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled category")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Listing {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_opt_id")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "referralLink", default)]
    pub referral_link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub images: Vec<String>,
}

impl Record for Listing {
    fn key(&self) -> Option<&str> {
        pick_key(self.object_id.as_ref(), self.id.as_ref())
    }

    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled listing")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Blog {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_opt_id")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl Record for Blog {
    fn key(&self) -> Option<&str> {
        pick_key(self.object_id.as_ref(), self.id.as_ref())
    }

    fn label(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled blog")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AdminUser {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_opt_id")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub referral: Option<String>,
}

impl Record for AdminUser {
    fn key(&self) -> Option<&str> {
        pick_key(self.object_id.as_ref(), self.id.as_ref())
    }

    fn label(&self) -> &str {
        self.name.as_deref().or(self.username.as_deref()).unwrap_or("N/A")
    }
}

/// Decode a collection response, accepting a bare array or `{ "data": [...] }`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is neither shape.
pub fn decode_collection<T: serde::de::DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let items = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match map.remove("data") {
            Some(data @ Value::Array(_)) => data,
            _ => return Err(ApiError::Decode("expected an array of records".to_owned())),
        },
        _ => return Err(ApiError::Decode("expected an array of records".to_owned())),
    };
    serde_json::from_value(items).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// AUTH PAYLOADS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<String>,
}

/// How a `POST /admin/login` response should be acted on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Tokens(AuthTokens),
    /// The server reported success without issuing a token.
    AcceptedWithoutToken,
}

fn non_empty_str<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str).map(str::trim).filter(|s| !s.is_empty())
}

impl LoginOutcome {
    /// Interpret a raw login response body.
    ///
    /// # Errors
    ///
    /// - [`ApiError::EmptyResponse`] for an empty body.
    /// - [`ApiError::Decode`] for a body that is not JSON.
    /// - [`ApiError::MissingToken`] when no token and no success marker is present.
    pub fn from_body(body: &str) -> Result<Self, ApiError> {
        if body.trim().is_empty() {
            return Err(ApiError::EmptyResponse);
        }
        let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Self::from_value(&value)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] when no token and no success marker is present.
    pub fn from_value(body: &Value) -> Result<Self, ApiError> {
        if let (Some(access), Some(refresh)) = (non_empty_str(body, "accessToken"), non_empty_str(body, "refreshToken"))
        {
            return Ok(Self::Tokens(AuthTokens { access: access.to_owned(), refresh: Some(refresh.to_owned()) }));
        }

        let single = ["token", "accessToken", "access_token"].into_iter().find_map(|k| non_empty_str(body, k));
        if let Some(access) = single {
            return Ok(Self::Tokens(AuthTokens { access: access.to_owned(), refresh: None }));
        }

        let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
        let message_ok = body.get("message").and_then(Value::as_str) == Some("Login successful");
        if success || message_ok {
            return Ok(Self::AcceptedWithoutToken);
        }
        Err(ApiError::MissingToken)
    }
}

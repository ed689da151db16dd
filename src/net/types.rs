//! Backend response envelope and account payloads.
//!
//! The backend wraps every JSON body as `{code, message, data}` and signals
//! logical failures with `code != 200` even under HTTP 200, so callers check
//! `code` after the transport succeeds.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::session::UserInfo;

/// Logical success code inside the envelope.
pub const ENVELOPE_SUCCESS: i64 = 200;

/// Uniform backend response wrapper.
///
/// On logical failures the backend fills `data` with `{}` regardless of the
/// expected payload shape, so `data` deserializes leniently: a mismatched
/// payload becomes `None` instead of failing the whole envelope.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "lenient")]
    pub data: Option<T>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

impl<T> Envelope<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == ENVELOPE_SUCCESS
    }

    /// Unwrap the payload of a logically successful envelope, or the
    /// server's message for a failed one.
    ///
    /// # Errors
    ///
    /// Returns the envelope `message` when `code != 200` or `data` is absent.
    pub fn into_data(self) -> Result<T, String> {
        if !self.is_success() {
            return Err(self.message);
        }
        self.data.ok_or(self.message)
    }
}

/// Credentials posted to the login endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload of a successful login: the user record and a bearer token.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginData {
    pub user: UserInfo,
    pub token: String,
}

/// Registration form posted to the register endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

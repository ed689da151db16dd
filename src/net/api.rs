//! Typed account endpoint helpers over [`ApiClient`].
//!
//! Callers receive the backend envelope and check its logical `code`; the
//! helpers here only fix the paths and payload types.

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Envelope, LoginData, LoginRequest, RegisterRequest};

/// `POST /v1/account/login`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] for transport-level failures; logical
/// failures (wrong password) arrive as an envelope with `code != 200`.
pub async fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<Envelope<LoginData>, ApiError> {
    let request = LoginRequest { username: username.to_owned(), password: password.to_owned() };
    client.post("/v1/account/login", &request).await
}

/// `POST /v1/account/register`.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn register(
    client: &ApiClient,
    request: &RegisterRequest,
) -> Result<Envelope<serde_json::Value>, ApiError> {
    client.post("/v1/account/register", request).await
}

/// `GET /v1/account/profile` — the caller's own profile record.
///
/// # Errors
///
/// Returns the classified [`ApiError`] for transport-level failures.
pub async fn profile(
    client: &ApiClient,
) -> Result<Envelope<crate::session::UserInfo>, ApiError> {
    client.get("/v1/account/profile").await
}

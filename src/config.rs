//! Deployment configuration for the client.
//!
//! The API base address is resolved at build time from the deployment
//! environment so the same crate can target different backends. Everything
//! else here is a fixed part of the client contract.

use std::time::Duration;

/// Base address for all backend calls.
///
/// Taken from `RAGBOOK_API_BASE_URL` at compile time; defaults to the
/// same-origin `/api` prefix used by the dev reverse proxy.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("RAGBOOK_API_BASE_URL").unwrap_or("/api")
}

/// Fixed request timeout applied to every backend call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Application name suffixed onto per-route document titles.
pub const APP_TITLE: &str = "知识库管理系统";

/// Cookie key holding the session token.
pub const TOKEN_COOKIE_KEY: &str = "token";

/// localStorage key holding the serialized user info record.
pub const USER_INFO_STORAGE_KEY: &str = "userInfo";

//! Error taxonomy for the HTTP client layer.
//!
//! Every failed call is classified into one of these variants, surfaced to
//! the user as a toast, and returned to the caller — centralized handling
//! never swallows an error.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Classified failure of a backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never left the client (token store unreadable).
    #[error("request failed to send: {0}")]
    SendFailure(String),
    /// 401 — the session token is missing, expired, or revoked.
    #[error("session expired")]
    AuthExpired,
    /// 403 — authenticated but not allowed.
    #[error("permission denied")]
    Forbidden,
    /// 404.
    #[error("resource not found")]
    NotFound,
    /// 500, with the server-supplied message when one was sent.
    #[error("server error: {}", message.as_deref().unwrap_or("<no message>"))]
    ServerError { message: Option<String> },
    /// Any other HTTP status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The fixed request timeout elapsed with no response.
    #[error("request timed out")]
    Timeout,
    /// Network-level failure with no server response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be decoded.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Classify a non-2xx status, keeping the server message where the
    /// user-facing text uses it.
    #[must_use]
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => Self::AuthExpired,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            500 => Self::ServerError { message },
            _ => Self::Status { status, message },
        }
    }

    /// The transient message shown to the user for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::SendFailure(_) => "请求发送失败".to_owned(),
            Self::AuthExpired => "登录状态已过期，请重新登录".to_owned(),
            Self::Forbidden => "您没有权限执行此操作".to_owned(),
            Self::NotFound => "请求的资源不存在".to_owned(),
            Self::ServerError { message } => message
                .clone()
                .unwrap_or_else(|| "服务器错误，请稍后再试".to_owned()),
            Self::Status { message, .. } => {
                message.clone().unwrap_or_else(|| "请求失败".to_owned())
            }
            Self::Timeout => "请求超时，请检查网络连接".to_owned(),
            Self::Network(_) => "网络异常，请检查网络连接".to_owned(),
            Self::Decode(_) => "请求失败".to_owned(),
        }
    }

    /// Whether this error invalidates the session (the 401 path).
    #[must_use]
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired)
    }
}

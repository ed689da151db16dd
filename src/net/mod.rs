//! HTTP client layer: single point of egress for all backend calls.
//!
//! `client` owns the request pipeline (auth injection, body unwrapping,
//! error classification and side effects); `api` layers typed endpoint
//! helpers on top; `types` holds the backend response envelope.

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, Method, OutboundRequest, Transport, TransportFailure, TransportResponse};
pub use error::ApiError;
pub use types::Envelope;

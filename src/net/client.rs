//! The request/response pipeline behind every backend call.
//!
//! DESIGN
//! ======
//! `ApiClient` is a constructed object holding its collaborators explicitly:
//! token store, notifier, polling registry, and a `Transport` that performs
//! the actual I/O. That keeps the pipeline runnable natively with fake
//! transports, and keeps routing concerns out of the transport layer — on a
//! 401 the client emits a typed session-invalidated event and a single
//! top-level subscriber owns the redirect.
//!
//! Pipeline per request:
//! 1. read the token and attach `Authorization: Bearer <token>` when present;
//!    an unreadable store aborts the request (fail closed);
//! 2. send through the transport with the fixed 30 s timeout;
//! 3. 2xx: decode and hand the body straight to the caller;
//!    anything else: classify, toast, run the 401 side effects if applicable,
//!    and return the typed error so callers can still layer their own
//!    handling on top.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
use crate::notify::Notify;
use crate::session::{PollingRegistry, TokenStore};

/// HTTP method of an outbound request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully prepared request handed to the transport.
#[derive(Clone, Debug)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    /// Bearer credential for the `Authorization` header, when a session exists.
    pub bearer: Option<String>,
    /// JSON body for `POST` requests.
    pub body: Option<serde_json::Value>,
}

/// Raw response from the transport, before classification.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Failure with no server response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransportFailure {
    /// The fixed timeout elapsed.
    Timeout,
    /// Any other network-level failure.
    Network(String),
}

/// Seam between the pipeline and the actual I/O.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: OutboundRequest)
    -> Result<TransportResponse, TransportFailure>;
}

/// Single point of egress for all backend calls.
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn Transport>,
    tokens: Rc<dyn TokenStore>,
    notify: Rc<dyn Notify>,
    polling: PollingRegistry,
    on_session_invalidated: RefCell<Option<Rc<dyn Fn()>>>,
}

impl ApiClient {
    #[must_use]
    pub fn new(
        base_url: &str,
        transport: Rc<dyn Transport>,
        tokens: Rc<dyn TokenStore>,
        notify: Rc<dyn Notify>,
        polling: PollingRegistry,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            transport,
            tokens,
            notify,
            polling,
            on_session_invalidated: RefCell::new(None),
        }
    }

    /// Register the subscriber notified when a 401 invalidates the session.
    ///
    /// The subscriber owns the redirect to login; the client itself never
    /// touches the router.
    pub fn on_session_invalidated(&self, subscriber: impl Fn() + 'static) {
        *self.on_session_invalidated.borrow_mut() = Some(Rc::new(subscriber));
    }

    /// `GET` a path and decode the response body.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] after its side effects ran.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::Get, path, None).await
    }

    /// `POST` a JSON body to a path and decode the response body.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] after its side effects ran.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        // A body that cannot serialize never left the client, so it reports
        // as a send failure rather than a decode error.
        let body = serde_json::to_value(body).map_err(|err| {
            let err = ApiError::SendFailure(err.to_string());
            self.notify.error(&err.user_message());
            err
        })?;
        self.send(Method::Post, path, Some(body)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        // Request interception: attach the bearer credential, failing closed
        // if the token store itself is unreadable.
        let bearer = match self.tokens.get() {
            Ok(token) => token,
            Err(err) => {
                let err = ApiError::SendFailure(err.to_string());
                self.notify.error(&err.user_message());
                return Err(err);
            }
        };

        let request = OutboundRequest {
            method,
            url: format!("{}{path}", self.base_url),
            bearer,
            body,
        };

        match self.transport.send(request).await {
            Ok(response) if (200..300).contains(&response.status) => {
                serde_json::from_str(&response.body).map_err(|err| {
                    log::error!("undecodable response body: {err}");
                    let err = ApiError::Decode(err);
                    self.notify.error(&err.user_message());
                    err
                })
            }
            Ok(response) => Err(self.classify_failure(&response)),
            Err(TransportFailure::Timeout) => {
                let err = ApiError::Timeout;
                self.notify.error(&err.user_message());
                Err(err)
            }
            Err(TransportFailure::Network(detail)) => {
                let err = ApiError::Network(detail);
                self.notify.error(&err.user_message());
                Err(err)
            }
        }
    }

    /// Response interception for non-2xx statuses: toast the user, and on
    /// 401 clear the session, stop all background polling, and emit the
    /// session-invalidated event. The registry empties on the first flush,
    /// so a burst of concurrent 401s runs each cleanup exactly once.
    fn classify_failure(&self, response: &TransportResponse) -> ApiError {
        let err = ApiError::from_status(response.status, server_message(&response.body));
        self.notify.error(&err.user_message());
        if err.is_auth_expired() {
            self.tokens.clear();
            self.polling.flush_all();
            // Clone out of the cell first so a subscriber may re-register.
            let subscriber = self.on_session_invalidated.borrow().clone();
            if let Some(subscriber) = subscriber {
                subscriber();
            }
        }
        err
    }
}

/// Shared handle to the app's single client, provided via context.
#[derive(Clone)]
pub struct ApiHandle(pub Rc<ApiClient>);

/// Transport used outside the browser, where no backend is reachable.
/// Mirrors the SSR stubs in the pages: calls degrade instead of panicking.
pub struct OfflineTransport;

#[async_trait(?Send)]
impl Transport for OfflineTransport {
    async fn send(
        &self,
        _request: OutboundRequest,
    ) -> Result<TransportResponse, TransportFailure> {
        Err(TransportFailure::Network("not available outside the browser".to_owned()))
    }
}

/// Pull the server's `message` field out of an error body, if it has one.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

/// gloo-net transport with the fixed timeout raced against the response.
#[cfg(feature = "hydrate")]
pub struct GlooTransport {
    timeout: std::time::Duration,
}

#[cfg(feature = "hydrate")]
impl GlooTransport {
    #[must_use]
    pub fn new(timeout: std::time::Duration) -> Self {
        Self { timeout }
    }
}

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(
        &self,
        request: OutboundRequest,
    ) -> Result<TransportResponse, TransportFailure> {
        use futures::future::{Either, select};

        let builder = match request.method {
            Method::Get => gloo_net::http::Request::get(&request.url),
            Method::Post => gloo_net::http::Request::post(&request.url),
        };
        let mut builder = builder.header("Content-Type", "application/json");
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let prepared = match request.body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|err| TransportFailure::Network(err.to_string()))?;

        let send = Box::pin(prepared.send());
        let timeout = Box::pin(gloo_timers::future::sleep(self.timeout));
        match select(send, timeout).await {
            Either::Left((Ok(response), _)) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                Ok(TransportResponse { status, body })
            }
            Either::Left((Err(err), _)) => Err(TransportFailure::Network(err.to_string())),
            Either::Right(((), _)) => Err(TransportFailure::Timeout),
        }
    }
}

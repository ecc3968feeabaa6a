//! Executes `HttpRequest` values on the wire.
//!
//! # Design
//! `Transport` is the seam between the deterministic build/parse halves and
//! real I/O. `UreqTransport` is the default: one `ureq::Agent` held for the
//! client's lifetime so its connection pool is reused across calls. Status
//! codes are always returned as data; deciding which status is an error is
//! the parse step's job.

use thiserror::Error;
use ureq::{Agent, RequestBuilder};

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Failure to complete a round trip.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be built locally (malformed URL or header).
    /// Nothing was sent.
    #[error(transparent)]
    Request(ureq::Error),

    /// The request could not be dispatched (host unreachable, connection
    /// refused or reset before a response arrived).
    #[error(transparent)]
    Send(ureq::Error),

    /// A response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    Body(#[source] ureq::Error),
}

impl TransportError {
    /// True for dispatch failures. A received response is never re-requested.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TransportError::Send(_))
    }
}

/// Performs one HTTP round trip.
///
/// Implementations must be safe to share between threads: a single
/// `UserClient` may be used concurrently.
pub trait Transport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

/// `Transport` backed by a reusable `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Wrap an existing agent. It should be configured with
    /// `http_status_as_error(false)`, otherwise 4xx/5xx surface as
    /// transport errors instead of unexpected statuses.
    pub fn from_agent(agent: Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url.as_str();
        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(url), &request.headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(url), &request.headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => {
                with_headers(self.agent.post(url), &request.headers).send_empty()
            }
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(url), &request.headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => {
                with_headers(self.agent.put(url), &request.headers).send_empty()
            }
        };
        let mut response = result.map_err(|err| match err {
            ureq::Error::Http(_) | ureq::Error::BadUri(_) => TransportError::Request(err),
            other => TransportError::Send(other),
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(TransportError::Body)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<B>(
    mut builder: RequestBuilder<B>,
    headers: &[(String, String)],
) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

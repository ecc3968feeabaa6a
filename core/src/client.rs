//! Blocking client for the user API.
//!
//! # Design
//! `UserClient` pairs a `UserEndpoints` with a `Transport`. Every operation
//! runs the same pipeline: build the request, send it with
//! `RetryPolicy::SEND`, then check the status and decode the body once.
//! Neither the base URL nor the transport changes after construction, so one
//! client can be shared across threads.

use tracing::debug;

use crate::endpoints::UserEndpoints;
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};
use crate::retry::{retry, RetryPolicy};
use crate::transport::{Transport, TransportError, UreqTransport};
use crate::types::User;

/// Operations offered by the user service.
pub trait UserApi {
    /// `POST /users`; the server assigns the id. Expects `201 Created`.
    fn create_user(&self, input: &User) -> Result<User>;

    /// `PUT /users/{id}`. Expects `200 OK`.
    fn update_user(&self, id: &str, input: &User) -> Result<User>;

    /// `GET /users/{id}`. Expects `200 OK`.
    fn get_user(&self, id: &str) -> Result<User>;
}

/// `UserApi` over HTTP.
#[derive(Debug, Clone)]
pub struct UserClient<T = UreqTransport> {
    endpoints: UserEndpoints,
    transport: T,
}

impl UserClient<UreqTransport> {
    /// Client for the service at `base_url` using a fresh ureq agent.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl<T: Transport> UserClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            endpoints: UserEndpoints::new(base_url),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.endpoints.base_url()
    }

    pub fn endpoints(&self) -> &UserEndpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn send(&self, request: &HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
        let response = retry(&RetryPolicy::SEND, TransportError::is_retryable, |attempt| {
            debug!(
                method = request.method.as_str(),
                url = %request.url,
                attempt,
                "sending request"
            );
            self.transport.send(request)
        })?;
        debug!(
            method = request.method.as_str(),
            url = %request.url,
            status = response.status,
            "received response"
        );
        Ok(response)
    }
}

impl<T: Transport> UserApi for UserClient<T> {
    fn create_user(&self, input: &User) -> Result<User> {
        let request = self.endpoints.build_create_user(input)?;
        let response = self.send(&request)?;
        self.endpoints.parse_create_user(response)
    }

    fn update_user(&self, id: &str, input: &User) -> Result<User> {
        let request = self.endpoints.build_update_user(id, input)?;
        let response = self.send(&request)?;
        self.endpoints.parse_update_user(response)
    }

    fn get_user(&self, id: &str) -> Result<User> {
        let request = self.endpoints.build_get_user(id);
        let response = self.send(&request)?;
        self.endpoints.parse_get_user(response)
    }
}

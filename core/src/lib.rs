//! Blocking API client for the user-management service.
//!
//! # Overview
//! Create, update and fetch `User` records over HTTP with JSON bodies.
//! `UserClient` implements the `UserApi` trait on top of a pluggable
//! `Transport`, retrying only the send step.
//!
//! # Design
//! - `UserEndpoints` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network, so the I/O boundary is explicit
//!   and callers can bring their own HTTP stack.
//! - `Transport` executes one request; `UreqTransport` keeps a single
//!   `ureq::Agent` so connections are reused across calls.
//! - `retry` repeats a failed dispatch up to 3 times, 100ms apart. A
//!   response with the wrong status or an undecodable body is returned as an
//!   error straight away.
//! - `User` is defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod retry;
pub mod transport;
pub mod types;

pub use client::{UserApi, UserClient};
pub use endpoints::UserEndpoints;
pub use error::{ApiError, Result};
pub use crate::http::{HttpMethod, HttpRequest, HttpResponse};
pub use retry::RetryPolicy;
pub use transport::{Transport, TransportError, UreqTransport};
pub use types::User;

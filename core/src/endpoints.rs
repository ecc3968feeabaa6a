//! Stateless request builder and response parser for the user API.
//!
//! # Design
//! `UserEndpoints` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `UserClient` runs a transport between the two; callers
//! doing their own I/O can use this type directly.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::User;

const JSON_CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

/// Characters left as-is in a path segment: RFC 3986 unreserved, sub-delims,
/// `:` and `@`. Everything else, `/` and `%` included, is percent-encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// Builds `HttpRequest` values and parses `HttpResponse` values for the
/// `/users` resource without touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEndpoints {
    base_url: String,
}

impl UserEndpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_create_user(&self, input: &User) -> Result<HttpRequest, ApiError> {
        Ok(json_request(HttpMethod::Post, self.users_url(), encode_json(input)?))
    }

    pub fn build_update_user(&self, id: &str, input: &User) -> Result<HttpRequest, ApiError> {
        Ok(json_request(HttpMethod::Put, self.user_url(id), encode_json(input)?))
    }

    pub fn build_get_user(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.user_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response, 201)?;
        decode_user(&response.body)
    }

    pub fn parse_update_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response, 200)?;
        decode_user(&response.body)
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response, 200)?;
        decode_user(&response.body)
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: &str) -> String {
        let id = utf8_percent_encode(id, PATH_SEGMENT);
        format!("{}/users/{id}", self.base_url)
    }
}

fn json_request(method: HttpMethod, url: String, body: String) -> HttpRequest {
    let (name, value) = JSON_CONTENT_TYPE;
    HttpRequest {
        method,
        url,
        headers: vec![(name.to_string(), value.to_string())],
        body: Some(body),
    }
}

/// Serialize a request payload.
pub(crate) fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(ApiError::Serialization)
}

/// Decode a response body. Missing fields and a `null` body yield defaults;
/// only malformed JSON or mistyped fields are errors.
fn decode_user(body: &str) -> Result<User, ApiError> {
    serde_json::from_str::<Option<User>>(body)
        .map(Option::unwrap_or_default)
        .map_err(ApiError::Deserialization)
}

/// Any status other than `expected` is an error, 404 included.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ApiError::UnexpectedStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

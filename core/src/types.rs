//! Domain DTOs for the user API.
//!
//! # Design
//! `User` mirrors the mock-server's schema but is defined independently, so
//! the integration tests catch any schema drift between the two crates.
//! The same type is used for input and output: the server assigns `id` on
//! creation, so an empty `id` is left out of outbound JSON. Decoding fills
//! missing fields with defaults and does not range-check values: whatever
//! the server sends is taken as is.

use serde::{Deserialize, Serialize};

/// A user record as exchanged with the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    /// Server-assigned identifier. Empty means "not assigned yet".
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub age: i64,
}

impl User {
    /// A user without an id, as sent to `create_user` / `update_user`.
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            age,
        }
    }
}

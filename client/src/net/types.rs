//! DTOs for the client/server auth boundary.
//!
//! These mirror the claims the server attaches to verified requests, minus
//! the token bookkeeping fields (`iat`/`exp`) the UI has no use for.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity payload produced by token verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user identifier (the token's `sub`).
    #[serde(alias = "sub")]
    pub id: Uuid,
    pub email: String,
    /// Display name.
    pub name: String,
}

/// Body for `POST /api/auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from `POST /api/auth/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Identity,
}

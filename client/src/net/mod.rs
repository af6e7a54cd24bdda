//! Networking modules for the REST boundary.
//!
//! `api` handles the HTTP calls, `types` defines the DTOs shared with the
//! server's claims schema.

pub mod api;
pub mod types;

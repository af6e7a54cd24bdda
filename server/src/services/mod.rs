//! Server-side services: token verification and the user registry.

pub mod token;
pub mod users;

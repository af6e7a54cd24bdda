//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Clone is required by Axum — inner fields are cheap to clone or
//! Arc-wrapped.

use std::sync::Arc;

use crate::services::token::TokenVerifier;
use crate::services::users::UserRegistry;

#[derive(Clone)]
pub struct AppState {
    pub verifier: TokenVerifier,
    pub users: Arc<UserRegistry>,
}

impl AppState {
    #[must_use]
    pub fn new(verifier: TokenVerifier, users: UserRegistry) -> Self {
        Self { verifier, users: Arc::new(users) }
    }
}

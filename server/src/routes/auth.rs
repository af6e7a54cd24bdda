//! Auth routes — login, session introspection, and the claims middleware.
//!
//! ARCHITECTURE
//! ============
//! `attach_claims` runs before every handler: it verifies the bearer token
//! and, only on success, inserts the decoded [`VerifiedToken`] into the
//! request extensions. Handlers never see an invalid or half-verified token;
//! the `AuthUser` extractor turns a missing extension into 401. A request
//! without a valid bearer token therefore cannot reach a handler with
//! populated claims.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::{StatusCode, header, request::Parts};
use axum::middleware::Next;
use axum::response::{Json, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::token::{TokenError, VerifiedToken};
use crate::state::AppState;

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub(crate) fn bearer_token(header_value: Option<&str>) -> Result<&str, TokenError> {
    let raw = header_value.ok_or(TokenError::Missing)?;
    let token = raw.strip_prefix("Bearer ").ok_or(TokenError::Malformed)?.trim();
    if token.is_empty() {
        return Err(TokenError::Malformed);
    }
    Ok(token)
}

// =============================================================================
// MIDDLEWARE + EXTRACTOR
// =============================================================================

/// Verify the request's bearer token and attach the decoded claims.
/// On any failure the extension is simply absent — downstream treats that as
/// unauthenticated.
pub async fn attach_claims(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let verified = {
        let header_value = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        bearer_token(header_value).and_then(|token| state.verifier.verify(token))
    };

    match verified {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
        }
        Err(err) => {
            tracing::debug!(error = %err, "request carries no valid bearer token");
        }
    }

    next.run(request).await
}

/// Verified claims extracted from the request.
/// Use as a handler parameter to require authentication.
pub struct AuthUser(pub VerifiedToken);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<VerifiedToken>()
            .cloned()
            .map(Self)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
}

/// `POST /api/auth/login` — check credentials, issue a token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    let Some(user) = state.users.authenticate(&body.email, &body.password) else {
        tracing::info!(email = %body.email, "rejected login");
        return Err(StatusCode::UNAUTHORIZED);
    };

    let token = state
        .verifier
        .issue(user.id, &user.email, &user.name)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    tracing::info!(user_id = %user.id, "issued session token");
    Ok(Json(LoginResponse {
        token,
        user: PublicUser {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        },
    }))
}

/// `GET /api/auth/me` — return the verified claims for this request.
pub async fn me(AuthUser(claims): AuthUser) -> Json<VerifiedToken> {
    Json(claims)
}

/// `POST /api/auth/logout` — tokens are stateless, so there is nothing to
/// revoke server-side; the endpoint exists so the client flow has a
/// definitive end-of-session call.
pub async fn logout(AuthUser(claims): AuthUser) -> StatusCode {
    tracing::info!(user_id = %claims.sub, "logout");
    StatusCode::NO_CONTENT
}

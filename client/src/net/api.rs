//! REST API helpers for communicating with the server.
//!
//! In the browser build: real HTTP calls via `gloo-net`, with the bearer
//! token kept in `localStorage`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Session resolution fails closed: every failure mode (network error,
//! non-2xx status, undecodable body, missing token) yields `None`, which the
//! store maps to `Unauthenticated`. Callers never see a distinct error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Identity;
#[cfg(feature = "csr")]
use super::types::{LoginRequest, LoginResponse};

#[cfg(feature = "csr")]
const TOKEN_STORAGE_KEY: &str = "console_session_token";

pub(crate) fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

/// Read the stored bearer token, if any.
#[must_use]
pub fn stored_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

#[cfg(feature = "csr")]
fn store_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
    }
}

#[cfg(feature = "csr")]
fn clear_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// Resolve the current session against `GET /api/auth/me`.
/// Returns `None` if unauthenticated, on any failure, or on the server.
pub async fn fetch_session() -> Option<Identity> {
    #[cfg(feature = "csr")]
    {
        let token = stored_token()?;
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Identity>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Sign in with credentials via `POST /api/auth/login`.
/// On success the returned token is stored for subsequent requests.
///
/// # Errors
///
/// Returns a display message when the request fails or is rejected.
pub async fn login(email: &str, password: &str) -> Result<Identity, String> {
    #[cfg(feature = "csr")]
    {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        store_token(&body.token);
        Ok(body.user)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out: best-effort `POST /api/auth/logout`, then discard the token.
/// Tokens are stateless, so dropping the local copy is what ends the session.
pub async fn logout() {
    #[cfg(feature = "csr")]
    {
        if let Some(token) = stored_token() {
            let _ = gloo_net::http::Request::post("/api/auth/logout")
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await;
        }
        clear_token();
    }
}

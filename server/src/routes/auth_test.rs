use super::*;

use axum::body::Body;
use time::Duration;
use tower::ServiceExt;

use crate::services::token::TokenVerifier;
use crate::services::users::UserRegistry;

fn test_state() -> AppState {
    AppState::new(
        TokenVerifier::new(b"test-secret", Duration::minutes(5)),
        UserRegistry::parse("ada@example.com:hunter2:Ada"),
    )
}

fn app(state: AppState) -> axum::Router {
    crate::routes::app(state)
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

// =============================================================================
// bearer_token
// =============================================================================

#[test]
fn bearer_token_missing_header() {
    assert!(matches!(bearer_token(None), Err(TokenError::Missing)));
}

#[test]
fn bearer_token_wrong_scheme() {
    assert!(matches!(bearer_token(Some("Basic abc")), Err(TokenError::Malformed)));
}

#[test]
fn bearer_token_empty_token() {
    assert!(matches!(bearer_token(Some("Bearer ")), Err(TokenError::Malformed)));
    assert!(matches!(bearer_token(Some("Bearer    ")), Err(TokenError::Malformed)));
}

#[test]
fn bearer_token_extracts_token() {
    assert_eq!(bearer_token(Some("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
}

#[test]
fn bearer_token_is_case_sensitive_on_scheme() {
    assert!(matches!(bearer_token(Some("bearer abc")), Err(TokenError::Malformed)));
}

// =============================================================================
// middleware + extractor: no valid token, no claims
// =============================================================================

#[tokio::test]
async fn me_without_token_is_unauthorized() {
    let response = app(test_state())
        .oneshot(
            axum::http::Request::builder()
                .uri("/api/auth/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_garbage_token_is_unauthorized() {
    let response = app(test_state())
        .oneshot(
            axum::http::Request::builder()
                .uri("/api/auth/me")
                .header("Authorization", "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_token_from_other_secret_is_unauthorized() {
    let foreign = TokenVerifier::new(b"other-secret", Duration::minutes(5));
    let token = foreign
        .issue(uuid::Uuid::new_v4(), "ada@example.com", "Ada")
        .unwrap();

    let response = app(test_state())
        .oneshot(
            axum::http::Request::builder()
                .uri("/api/auth/me")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_valid_token_returns_claims() {
    let state = test_state();
    let sub = uuid::Uuid::new_v4();
    let token = state.verifier.issue(sub, "ada@example.com", "Ada").unwrap();

    let response = app(state)
        .oneshot(
            axum::http::Request::builder()
                .uri("/api/auth/me")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let claims = body_json(response).await;
    assert_eq!(claims["sub"], sub.to_string());
    assert_eq!(claims["email"], "ada@example.com");
    assert_eq!(claims["name"], "Ada");
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_with_valid_credentials_issues_usable_token() {
    let state = test_state();
    let login_body = serde_json::json!({
        "email": "ada@example.com",
        "password": "hunter2"
    });

    let response = app(state.clone())
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("Content-Type", "application/json")
                .body(Body::from(login_body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["user"]["email"], "ada@example.com");
    let token = body["token"].as_str().expect("token");

    // The issued token authenticates a follow-up request.
    let me = app(state)
        .oneshot(
            axum::http::Request::builder()
                .uri("/api/auth/me")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(me.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let login_body = serde_json::json!({
        "email": "ada@example.com",
        "password": "wrong"
    });

    let response = app(test_state())
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("Content-Type", "application/json")
                .body(Body::from(login_body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// =============================================================================
// logout + healthz
// =============================================================================

#[tokio::test]
async fn logout_requires_authentication() {
    let response = app(test_state())
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_with_valid_token_is_no_content() {
    let state = test_state();
    let token = state
        .verifier
        .issue(uuid::Uuid::new_v4(), "ada@example.com", "Ada")
        .unwrap();

    let response = app(state)
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn healthz_is_public() {
    let response = app(test_state())
        .oneshot(
            axum::http::Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

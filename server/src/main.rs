mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("server configuration");

    let verifier =
        services::token::TokenVerifier::new(config.auth_secret.as_bytes(), config.token_ttl);
    let users = services::users::UserRegistry::from_env();
    if users.is_empty() {
        tracing::warn!("CONSOLE_USERS not set — all logins will be rejected");
    } else {
        tracing::info!(count = users.len(), "loaded user registry");
    }

    let state = state::AppState::new(verifier, users);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "console api listening");
    axum::serve(listener, app).await.expect("server failed");
}

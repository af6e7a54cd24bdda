//! Server configuration loaded from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use time::Duration;

/// Runtime configuration for the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub auth_secret: String,
    pub token_ttl: Duration,
}

impl ServerConfig {
    /// Load configuration from `PORT`, `AUTH_SECRET`, and `TOKEN_TTL_SECS`.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok())?,
            auth_secret: require_secret(std::env::var("AUTH_SECRET").ok())?,
            token_ttl: parse_ttl(std::env::var("TOKEN_TTL_SECS").ok())?,
        })
    }
}

/// Listen port, defaulting to 3000.
pub(crate) fn parse_port(raw: Option<String>) -> Result<u16, String> {
    match raw {
        None => Ok(3000),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| format!("PORT must be a port number, got {value:?}")),
    }
}

/// The token-signing secret is required and must be non-empty.
pub(crate) fn require_secret(raw: Option<String>) -> Result<String, String> {
    match raw {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err("AUTH_SECRET must be set to a non-empty value".to_owned()),
    }
}

/// Token lifetime in seconds, defaulting to one hour. Must be positive.
pub(crate) fn parse_ttl(raw: Option<String>) -> Result<Duration, String> {
    let Some(value) = raw else {
        return Ok(Duration::seconds(3600));
    };
    let secs: i64 = value
        .trim()
        .parse()
        .map_err(|_| format!("TOKEN_TTL_SECS must be an integer, got {value:?}"))?;
    if secs <= 0 {
        return Err(format!("TOKEN_TTL_SECS must be positive, got {secs}"));
    }
    Ok(Duration::seconds(secs))
}

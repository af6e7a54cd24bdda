//! In-memory user registry seeded from the environment.
//!
//! DESIGN
//! ======
//! `CONSOLE_USERS` holds `email:password:name` entries separated by `;`.
//! Passwords are compared as SHA-256 digests; the plaintext is dropped at
//! parse time. Malformed entries are skipped with a warning rather than
//! failing startup, so a typo disables one account instead of the server.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::fmt::Write;

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// SHA-256 hex digest of a password.
#[must_use]
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    let bytes = hasher.finalize();
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// A registered user. The password never outlives parsing.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    password_digest: String,
}

/// All users allowed to sign in.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<UserRecord>,
}

impl UserRegistry {
    /// Load from `CONSOLE_USERS`. An unset variable yields an empty registry
    /// (every login rejected).
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("CONSOLE_USERS").unwrap_or_default())
    }

    /// Parse `email:password:name` entries separated by `;`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut users = Vec::new();
        for entry in raw.split(';') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let mut fields = entry.splitn(3, ':');
            let (Some(email), Some(password), Some(name)) =
                (fields.next(), fields.next(), fields.next())
            else {
                tracing::warn!(entry, "skipping malformed user entry");
                continue;
            };
            let email = email.trim().to_ascii_lowercase();
            let name = name.trim();
            if email.is_empty() || password.is_empty() || name.is_empty() {
                tracing::warn!(entry, "skipping user entry with empty field");
                continue;
            }
            users.push(UserRecord {
                id: Uuid::new_v4(),
                email,
                name: name.to_owned(),
                password_digest: password_digest(password),
            });
        }
        Self { users }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check credentials; email comparison is case-insensitive.
    #[must_use]
    pub fn authenticate(&self, email: &str, password: &str) -> Option<&UserRecord> {
        let email = email.trim().to_ascii_lowercase();
        let digest = password_digest(password);
        self.users
            .iter()
            .find(|u| u.email == email && u.password_digest == digest)
    }
}

//! Client runtime configuration.
//!
//! The diagnostic overlay is always mounted by the shell; whether it shows
//! anything is a pure function of this config, so both settings can be
//! exercised in tests without rebuilding.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[cfg(feature = "csr")]
const DEBUG_STORAGE_KEY: &str = "console_debug";

/// Environment-derived flags injected into the component tree as context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Show the diagnostic overlay's contents.
    pub debug_overlay: bool,
}

/// Parse a user-supplied flag value. Mirrors the server's env parsing so
/// the same spellings work on both sides.
#[must_use]
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl ClientConfig {
    /// Load from the browser (`localStorage["console_debug"]`).
    /// Defaults to everything off outside a browser or when unset.
    #[must_use]
    pub fn from_browser() -> Self {
        #[cfg(feature = "csr")]
        {
            let debug_overlay = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|s| s.get_item(DEBUG_STORAGE_KEY).ok().flatten())
                .and_then(|raw| parse_flag(&raw))
                .unwrap_or(false);
            Self { debug_overlay }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

//! UI state for the theme preference.
//!
//! DESIGN
//! ======
//! The theme is real state, not a DOM side channel: components flip it
//! through [`UiState::toggle_theme`] and a single app-level effect restyles
//! the page body, so the DOM write has one owner. Collapse state
//! deliberately does not live here — the layout shell is its single owner.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[cfg(feature = "csr")]
const THEME_STORAGE_KEY: &str = "console_theme";
#[cfg(feature = "csr")]
const DARK_CLASS: &str = "theme-dark";

/// Theme state shared through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}

impl UiState {
    /// Restore the theme from the stored preference, falling back to the
    /// system color scheme when the user never chose one.
    #[must_use]
    pub fn restore() -> Self {
        Self { dark_mode: stored_preference().unwrap_or_else(system_prefers_dark) }
    }

    /// Flip the theme and persist the new preference. Restyling the page is
    /// left to the effect watching this state.
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        persist_preference(self.dark_mode);
    }
}

/// The explicit preference from `localStorage`, if the user ever set one.
/// Accepts the same flag spellings as the debug-overlay config.
fn stored_preference() -> Option<bool> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(THEME_STORAGE_KEY).ok().flatten()?;
        crate::util::config::parse_flag(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

fn persist_preference(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(THEME_STORAGE_KEY, if enabled { "true" } else { "false" });
        }
    }
    #[cfg(not(feature = "csr"))]
    let _ = enabled;
}

/// Apply the current theme to the page body.
pub fn apply_theme(dark: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let classes = body.class_list();
            let _ = if dark { classes.add_1(DARK_CLASS) } else { classes.remove_1(DARK_CLASS) };
        }
    }
    #[cfg(not(feature = "csr"))]
    let _ = dark;
}

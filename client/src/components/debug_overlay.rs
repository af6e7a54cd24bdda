//! Diagnostic overlay showing live shell state.
//!
//! Always mounted by the shell; whether it renders anything is a pure
//! function of the injected [`ClientConfig`], never a compile-time branch.

#[cfg(test)]
#[path = "debug_overlay_test.rs"]
mod debug_overlay_test;

use leptos::prelude::*;

use crate::state::session::{SessionState, SessionStore};
use crate::util::config::ClientConfig;

#[must_use]
pub fn overlay_enabled(config: &ClientConfig) -> bool {
    config.debug_overlay
}

/// Short label for the current session phase.
#[must_use]
pub fn phase_label(state: &SessionState) -> &'static str {
    match state {
        SessionState::Pending => "pending",
        SessionState::Authenticated(_) => "authenticated",
        SessionState::Unauthenticated => "unauthenticated",
    }
}

/// Diagnostic overlay. Mounted unconditionally; shows session phase,
/// resolution generation, and collapse state when enabled.
#[component]
pub fn DebugOverlay(#[prop(into)] collapsed: Signal<bool>) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<SessionStore>>();
    let enabled = overlay_enabled(&config);

    view! {
        <div class="debug-overlay">
            <Show when=move || enabled>
                <dl class="debug-overlay__stats">
                    <dt>"session"</dt>
                    <dd>{move || phase_label(session.get().state())}</dd>
                    <dt>"generation"</dt>
                    <dd>{move || session.get().generation().to_string()}</dd>
                    <dt>"nav collapsed"</dt>
                    <dd>{move || collapsed.get().to_string()}</dd>
                </dl>
            </Show>
        </div>
    }
}

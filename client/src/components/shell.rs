//! Layout shell: navigation rail, top bar, content region, overlay.
//!
//! DESIGN
//! ======
//! The shell is the single owner of the collapse state. The rail receives
//! the current value plus a change callback (state down, intent up); setting
//! the current value again is a no-op re-render. The diagnostic overlay is
//! mounted unconditionally — its own config decides whether it shows
//! anything. Collapse preference is not persisted.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;

use crate::components::debug_overlay::DebugOverlay;
use crate::components::nav_rail::NavRail;
use crate::components::top_bar::TopBar;

/// CSS class for the content region at a given collapse state. The wide
/// variant reclaims the rail's width.
#[must_use]
pub fn content_class(collapsed: bool) -> &'static str {
    if collapsed {
        "app-shell__content app-shell__content--wide"
    } else {
        "app-shell__content"
    }
}

/// Dashboard layout shell wrapping the routed page content.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let collapsed = RwSignal::new(false);
    let on_toggle = Callback::new(move |next: bool| collapsed.set(next));

    view! {
        <div class="app-shell">
            <NavRail collapsed=collapsed on_toggle=on_toggle/>
            <div class=move || content_class(collapsed.get())>
                <TopBar/>
                <main class="app-shell__main">{children()}</main>
            </div>
            <DebugOverlay collapsed=collapsed/>
        </div>
    }
}

//! Collapsible navigation rail.
//!
//! DESIGN
//! ======
//! Controlled component: the shell owns the collapse state and passes the
//! current value down with a change callback. The rail never mutates shared
//! state — a toggle raises `on_toggle` exactly once with the desired value.

#[cfg(test)]
#[path = "nav_rail_test.rs"]
mod nav_rail_test;

use leptos::prelude::*;

/// The value a toggle requests given the current collapse state.
#[must_use]
pub fn toggle_intent(collapsed: bool) -> bool {
    !collapsed
}

/// Navigation rail with a collapse toggle and the dashboard sections.
#[component]
pub fn NavRail(
    #[prop(into)] collapsed: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <nav class="nav-rail" class:nav-rail--collapsed=move || collapsed.get()>
            <button
                class="nav-rail__toggle"
                title="Toggle navigation"
                on:click=move |_| on_toggle.run(toggle_intent(collapsed.get()))
            >
                {move || if collapsed.get() { "\u{25B6}" } else { "\u{25C0}" }}
            </button>

            <Show when=move || !collapsed.get()>
                <ul class="nav-rail__links">
                    <li><a href="/" class="nav-rail__link">"Dashboard"</a></li>
                    <li><a href="/leads" class="nav-rail__link">"Leads"</a></li>
                    <li><a href="/workflows" class="nav-rail__link">"Workflows"</a></li>
                    <li><a href="/settings" class="nav-rail__link">"Settings"</a></li>
                </ul>
            </Show>
        </nav>
    }
}

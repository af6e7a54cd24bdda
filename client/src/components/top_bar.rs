//! Top bar displaying the signed-in user, theme toggle, and sign-out.

use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::state::ui::UiState;

/// Stateless header over the content region. Reads the ambient session and
/// theme contexts; owns nothing itself.
#[component]
pub fn TopBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let user_name = move || {
        session
            .get()
            .state()
            .identity()
            .map_or_else(String::new, |identity| identity.name.clone())
    };

    let on_theme_toggle = move |_| {
        ui.update(UiState::toggle_theme);
    };

    let on_sign_out = move |_| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                session.update(SessionStore::sign_out);
                // Navigate via window.location for a clean state.
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <header class="top-bar">
            <span class="top-bar__title">"Console"</span>
            <div class="top-bar__actions">
                <button class="top-bar__theme" title="Toggle theme" on:click=on_theme_toggle>
                    {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263E}" }}
                </button>
                <span class="top-bar__user">{user_name}</span>
                <button class="top-bar__sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}

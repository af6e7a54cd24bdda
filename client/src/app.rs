//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::config::ClientConfig;

/// Kick off an asynchronous session resolution against the API server.
///
/// The store hands out a generation before the call suspends; if a newer
/// resolution (or a sign-out) happens while this one is in flight, the late
/// outcome is discarded by `apply_resolution`.
pub fn resolve_session(session: RwSignal<SessionStore>) {
    let generation = session
        .try_update(SessionStore::begin_resolution)
        .unwrap_or_default();

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let identity = crate::net::api::fetch_session().await;
        session.update(|s| {
            s.apply_resolution(generation, identity);
        });
    });

    #[cfg(not(feature = "csr"))]
    let _ = generation;
}

/// Root application component.
///
/// Provides the session store, theme state, and client config as contexts,
/// sets up routing, and starts the initial session resolution.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::default());
    let ui = RwSignal::new(UiState::restore());

    provide_context(session);
    provide_context(ui);
    provide_context(ClientConfig::from_browser());

    resolve_session(session);

    Effect::new(move || {
        crate::state::ui::apply_theme(ui.get().dark_mode);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/console.css"/>
        <Title text="Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

//! Dashboard home page, gated behind the route guard.

use leptos::prelude::*;

use crate::components::guard::RequireAuth;
use crate::components::shell::AppShell;
use crate::state::session::SessionStore;

/// Home page — the layout shell and its content mount only once the session
/// store confirms an identity, so no protected fetch can fire earlier.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <AppShell>
                <Greeting/>
                <section class="home-page__cards">
                    <div class="home-card">
                        <h2>"Leads"</h2>
                        <p>"Review and qualify incoming leads."</p>
                    </div>
                    <div class="home-card">
                        <h2>"Workflows"</h2>
                        <p>"Automations currently running for your team."</p>
                    </div>
                </section>
            </AppShell>
        </RequireAuth>
    }
}

#[component]
fn Greeting() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let name = move || {
        session
            .get()
            .state()
            .identity()
            .map_or_else(String::new, |identity| identity.name.clone())
    };
    view! {
        <h1 class="home-page__greeting">{move || format!("Welcome back, {}", name())}</h1>
    }
}

//! Protected route guard.
//!
//! DESIGN
//! ======
//! The render decision is a pure function of the session state so it can be
//! tested without a DOM. The component wraps it with a continuous
//! subscription to the store: children are mounted only while the latest
//! observed state is authenticated, and an `authenticated ->
//! unauthenticated` transition (session expiry) unmounts them and redirects
//! in the same reactive turn. Resolution failures never reach here as a
//! distinct state — the store has already collapsed them to unauthenticated.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionState, SessionStore};

/// What the guard does with its children for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Resolution in flight: show a placeholder, mount nothing.
    Loading,
    /// Identity confirmed: mount children unchanged.
    Render,
    /// No session: mount nothing and redirect to the login page.
    Redirect,
}

#[must_use]
pub fn guard_outcome(state: &SessionState) -> GuardOutcome {
    match state {
        SessionState::Pending => GuardOutcome::Loading,
        SessionState::Authenticated(_) => GuardOutcome::Render,
        SessionState::Unauthenticated => GuardOutcome::Redirect,
    }
}

/// Redirect to `/login` whenever the store settles unauthenticated.
/// Runs as an effect so it re-fires on every later transition too.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionStore>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if guard_outcome(session.get().state()) == GuardOutcome::Redirect {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Route guard: renders `children` only while the session is authenticated.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    install_unauth_redirect(session, use_navigate());

    move || match guard_outcome(session.get().state()) {
        GuardOutcome::Loading => view! {
            <div class="guard-loading">
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        GuardOutcome::Redirect => ().into_any(),
        GuardOutcome::Render => children().into_any(),
    }
}

//! Session state for the current browser user.
//!
//! DESIGN
//! ======
//! The store is an explicit, injectable object rather than an ambient
//! global: the route guard receives it by reference (via context) and can be
//! tested against controlled state transitions. Asynchronous resolution is
//! generation-checked so a stale response can never overwrite a newer state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Identity;

/// Current authentication phase.
///
/// Exactly one variant holds at a time. Transitions are
/// `Pending -> Authenticated` or `Pending -> Unauthenticated`; the only way
/// back is an explicit re-check (`begin_resolution`) or `sign_out`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// Resolution in flight; identity not yet known.
    #[default]
    Pending,
    /// Identity confirmed by the server.
    Authenticated(Identity),
    /// No valid session. Any resolution failure collapses here.
    Unauthenticated,
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The confirmed identity, if any.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

/// Session store: authentication phase plus a resolution generation counter.
///
/// The generation counter implements stale-response discard: every
/// `begin_resolution` invalidates all outstanding resolutions, and
/// `apply_resolution` only accepts the outcome carrying the latest
/// generation. Overlapping requests therefore settle on the result of the
/// most recently issued call regardless of completion order.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    state: SessionState,
    generation: u64,
}

impl SessionStore {
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new resolution: the state returns to `Pending` and the
    /// returned generation must be passed back to `apply_resolution`.
    pub fn begin_resolution(&mut self) -> u64 {
        self.generation += 1;
        self.state = SessionState::Pending;
        self.generation
    }

    /// Settle a resolution. `Some(identity)` confirms the session; `None`
    /// means the check failed for any reason and the store fails closed to
    /// `Unauthenticated`.
    ///
    /// Returns `false` (and changes nothing) when `generation` is not the
    /// latest one issued — the outcome belongs to a superseded request.
    pub fn apply_resolution(&mut self, generation: u64, identity: Option<Identity>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.state = match identity {
            Some(identity) => SessionState::Authenticated(identity),
            None => SessionState::Unauthenticated,
        };
        true
    }

    /// Drop the current identity. Bumps the generation so an in-flight
    /// resolution started before sign-out cannot resurrect the session.
    pub fn sign_out(&mut self) {
        self.generation += 1;
        self.state = SessionState::Unauthenticated;
    }
}

use super::*;
use crate::net::types::Identity;
use uuid::Uuid;

#[test]
fn overlay_enabled_follows_config_flag() {
    assert!(!overlay_enabled(&ClientConfig { debug_overlay: false }));
    assert!(overlay_enabled(&ClientConfig { debug_overlay: true }));
}

#[test]
fn phase_label_covers_all_states() {
    assert_eq!(phase_label(&SessionState::Pending), "pending");
    assert_eq!(phase_label(&SessionState::Unauthenticated), "unauthenticated");

    let state = SessionState::Authenticated(Identity {
        id: Uuid::new_v4(),
        email: "ada@example.com".to_owned(),
        name: "Ada".to_owned(),
    });
    assert_eq!(phase_label(&state), "authenticated");
}

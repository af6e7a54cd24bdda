use super::*;

// ============================================================================
// parse_port
// ============================================================================

#[test]
fn port_defaults_when_unset() {
    assert_eq!(parse_port(None).unwrap(), 3000);
}

#[test]
fn port_parses_explicit_value() {
    assert_eq!(parse_port(Some("8080".into())).unwrap(), 8080);
}

#[test]
fn port_trims_whitespace() {
    assert_eq!(parse_port(Some(" 4000 ".into())).unwrap(), 4000);
}

#[test]
fn port_rejects_garbage() {
    assert!(parse_port(Some("http".into())).is_err());
    assert!(parse_port(Some("70000".into())).is_err());
}

// ============================================================================
// require_secret
// ============================================================================

#[test]
fn secret_is_required() {
    assert!(require_secret(None).is_err());
}

#[test]
fn secret_rejects_blank() {
    assert!(require_secret(Some("   ".into())).is_err());
}

#[test]
fn secret_passes_through() {
    assert_eq!(require_secret(Some("s3cret".into())).unwrap(), "s3cret");
}

// ============================================================================
// parse_ttl
// ============================================================================

#[test]
fn ttl_defaults_to_one_hour() {
    assert_eq!(parse_ttl(None).unwrap(), Duration::seconds(3600));
}

#[test]
fn ttl_parses_explicit_seconds() {
    assert_eq!(parse_ttl(Some("120".into())).unwrap(), Duration::seconds(120));
}

#[test]
fn ttl_rejects_zero_and_negative() {
    assert!(parse_ttl(Some("0".into())).is_err());
    assert!(parse_ttl(Some("-60".into())).is_err());
}

#[test]
fn ttl_rejects_garbage() {
    assert!(parse_ttl(Some("soon".into())).is_err());
}

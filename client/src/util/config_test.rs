use super::*;

// =============================================================
// parse_flag
// =============================================================

#[test]
fn parse_flag_true_variants() {
    for val in ["1", "true", "yes", "on"] {
        assert_eq!(parse_flag(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_flag_false_variants() {
    for val in ["0", "false", "no", "off"] {
        assert_eq!(parse_flag(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_flag_case_insensitive_and_trimmed() {
    assert_eq!(parse_flag("  TRUE  "), Some(true));
    assert_eq!(parse_flag("Off"), Some(false));
}

#[test]
fn parse_flag_invalid_returns_none() {
    assert_eq!(parse_flag("maybe"), None);
    assert_eq!(parse_flag(""), None);
}

// =============================================================
// ClientConfig
// =============================================================

#[test]
fn client_config_default_overlay_off() {
    assert!(!ClientConfig::default().debug_overlay);
}

#[cfg(not(feature = "csr"))]
#[test]
fn from_browser_defaults_off_without_browser() {
    assert_eq!(ClientConfig::from_browser(), ClientConfig::default());
}

use super::*;

fn verifier() -> TokenVerifier {
    TokenVerifier::new(b"test-secret", Duration::minutes(5))
}

fn some_user() -> (Uuid, &'static str, &'static str) {
    (Uuid::new_v4(), "ada@example.com", "Ada")
}

// =============================================================
// issue / verify
// =============================================================

#[test]
fn issued_token_verifies_with_same_claims() {
    let v = verifier();
    let (sub, email, name) = some_user();

    let token = v.issue(sub, email, name).expect("issue");
    let claims = v.verify(&token).expect("verify");

    assert_eq!(claims.sub, sub);
    assert_eq!(claims.email, email);
    assert_eq!(claims.name, name);
    assert_eq!(claims.exp - claims.iat, 300);
}

#[test]
fn garbage_token_is_rejected() {
    let v = verifier();
    assert!(v.verify("not-a-jwt").is_err());
    assert!(v.verify("").is_err());
}

#[test]
fn tampered_token_is_rejected() {
    let v = verifier();
    let (sub, email, name) = some_user();
    let token = v.issue(sub, email, name).expect("issue");

    // Flip a character in the payload segment.
    let mut parts: Vec<String> = token.split('.').map(str::to_owned).collect();
    assert_eq!(parts.len(), 3);
    let payload = &mut parts[1];
    let tampered_char = if payload.ends_with('A') { "B" } else { "A" };
    payload.replace_range(payload.len() - 1.., tampered_char);
    let tampered = parts.join(".");

    assert!(v.verify(&tampered).is_err());
}

#[test]
fn token_signed_with_other_secret_is_rejected() {
    let issuer = TokenVerifier::new(b"other-secret", Duration::minutes(5));
    let (sub, email, name) = some_user();
    let token = issuer.issue(sub, email, name).expect("issue");

    assert!(verifier().verify(&token).is_err());
}

#[test]
fn expired_token_is_rejected() {
    let v = verifier();
    let (sub, email, name) = some_user();
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let claims = VerifiedToken {
        sub,
        email: email.to_owned(),
        name: name.to_owned(),
        iat: now - 600,
        exp: now - 300,
    };
    let token = encode(&Header::default(), &claims, &v.encoding).expect("encode");

    assert!(v.verify(&token).is_err());
}

#[test]
fn token_error_messages_name_the_failure() {
    assert_eq!(TokenError::Missing.to_string(), "missing bearer token");
    assert_eq!(TokenError::Malformed.to_string(), "malformed authorization header");
}

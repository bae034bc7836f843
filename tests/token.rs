use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use product_like_api::{dto::auth::Claims, error::AuthError, token::TokenCodec};

const SECRET: &str = "token-test-secret";

#[test]
fn issued_token_verifies_to_user_id() {
    let codec = TokenCodec::new(SECRET, Duration::hours(24));
    let token = codec.issue(42).expect("issue");

    assert_eq!(codec.verify(&token), Ok(42));
    assert_eq!(codec.ttl_seconds(), 24 * 3600);
}

#[test]
fn token_signed_with_other_secret_is_rejected() {
    let issuer = TokenCodec::new("some-other-secret", Duration::hours(1));
    let verifier = TokenCodec::new(SECRET, Duration::hours(1));
    let token = issuer.issue(7).expect("issue");

    assert_eq!(verifier.verify(&token), Err(AuthError::InvalidSignature));
}

#[test]
fn expired_token_is_rejected() {
    let codec = TokenCodec::new(SECRET, Duration::seconds(-120));
    let token = codec.issue(7).expect("issue");

    assert_eq!(codec.verify(&token), Err(AuthError::Expired));
}

#[test]
fn garbage_token_is_malformed() {
    let codec = TokenCodec::new(SECRET, Duration::hours(1));

    assert_eq!(codec.verify("not-a-token"), Err(AuthError::Malformed));
    assert_eq!(codec.verify("a.b.c"), Err(AuthError::Malformed));
}

#[test]
fn non_numeric_subject_is_malformed() {
    let codec = TokenCodec::new(SECRET, Duration::hours(1));
    let now = Utc::now();
    let claims = Claims {
        sub: "alice".into(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(1)).timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("encode");

    assert_eq!(codec.verify(&token), Err(AuthError::Malformed));
}

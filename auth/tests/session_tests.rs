mod common;

use chrono::Duration;
use common::sample_claims;
use common::TestAuth;
use nexevent_auth::AuthenticationError;
use nexevent_auth::Role;
use nexevent_auth::SessionClaims;

#[test]
fn test_issue_then_verify_scenario() {
    let auth = TestAuth::new();
    let claims = SessionClaims::new("u1", "a@b.com", Role::User);

    let token = auth
        .authenticator
        .issue_token(&claims)
        .expect("Failed to issue token");

    assert_eq!(auth.authenticator.validate_token(token.as_str()), Some(claims));
}

#[test]
fn test_claims_survive_round_trip() {
    let auth = TestAuth::new();

    for claims in sample_claims() {
        let token = auth.authenticator.issue_token(&claims).unwrap();
        assert_eq!(auth.authenticator.validate_token(token.as_str()), Some(claims));
    }
}

#[test]
fn test_token_expires_after_ttl() {
    let auth = TestAuth::new();
    let handler = auth.authenticator.jwt_handler();

    for claims in sample_claims() {
        auth.clock.set(common::start());
        let token = auth.authenticator.issue_token(&claims).unwrap();
        assert_eq!(token.expires_at(), common::start() + Duration::days(7));

        auth.clock.advance(handler.ttl() - Duration::seconds(1));
        assert!(auth.authenticator.validate_token(token.as_str()).is_some());

        auth.clock.advance(Duration::seconds(1) + handler.leeway());
        assert_eq!(auth.authenticator.validate_token(token.as_str()), None);
    }
}

#[test]
fn test_any_single_character_alteration_invalidates_token() {
    let auth = TestAuth::new();
    let claims = SessionClaims::new("u1", "a@b.com", Role::User);
    let token = auth.authenticator.issue_token(&claims).unwrap().into_string();

    for (index, original) in token.char_indices() {
        for replacement in ['A', 'z', '0', '-', '_', '.'] {
            if replacement == original {
                continue;
            }

            let mut tampered = token.clone();
            tampered.replace_range(index..index + original.len_utf8(), &replacement.to_string());

            assert_eq!(
                auth.authenticator.validate_token(&tampered),
                None,
                "altering position {} from {:?} to {:?} was accepted",
                index,
                original,
                replacement
            );
        }
    }
}

#[test]
fn test_malformed_tokens_are_rejected() {
    let auth = TestAuth::new();

    for token in ["", "garbage", "a.b", "a.b.c", "..", "Bearer x.y.z"] {
        assert_eq!(auth.authenticator.validate_token(token), None);
    }
}

#[test]
fn test_token_from_other_secret_is_rejected() {
    let issuer = TestAuth::with_secret(b"first-secret-key-for-jwt-signing-32-bytes");
    let verifier = TestAuth::with_secret(b"second-secret-key-for-jwt-signing-32-bytes");

    let token = issuer
        .authenticator
        .issue_token(&SessionClaims::new("u1", "a@b.com", Role::User))
        .unwrap();

    assert_eq!(verifier.authenticator.validate_token(token.as_str()), None);
}

#[tokio::test]
async fn test_login_flow() {
    let auth = TestAuth::new();
    let claims = SessionClaims::new("u1", "a@b.com", Role::Organizer);

    let stored_hash = auth.authenticator.hash_password("s3cret").await.unwrap();

    let token = auth
        .authenticator
        .authenticate("s3cret", &stored_hash, &claims)
        .await
        .expect("Authentication failed");

    let header = format!("Bearer {}", token.as_str());
    assert_eq!(auth.authenticator.authorize(Some(&header)), Some(claims.clone()));

    let result = auth
        .authenticator
        .authenticate("wrong", &stored_hash, &claims)
        .await;
    assert!(matches!(
        result,
        Err(AuthenticationError::InvalidCredentials)
    ));
}

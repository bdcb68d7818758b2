#![allow(dead_code)]

use std::sync::Arc;

use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;
use nexevent_auth::Authenticator;
use nexevent_auth::HashingCost;
use nexevent_auth::JwtHandler;
use nexevent_auth::ManualClock;
use nexevent_auth::PasswordHasher;
use nexevent_auth::Role;
use nexevent_auth::SessionClaims;

pub const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Authenticator wired to a manual clock and the cheapest Argon2 cost.
pub struct TestAuth {
    pub authenticator: Arc<Authenticator>,
    pub clock: ManualClock,
}

impl TestAuth {
    pub fn new() -> Self {
        Self::with_secret(SECRET)
    }

    pub fn with_secret(secret: &[u8]) -> Self {
        let clock = ManualClock::new(start());
        let password_hasher =
            PasswordHasher::with_cost(HashingCost::MINIMAL).expect("Minimal cost is valid");
        let jwt_handler = JwtHandler::new(secret).with_clock(Arc::new(clock.clone()));

        Self {
            authenticator: Arc::new(Authenticator::new(password_hasher, jwt_handler)),
            clock,
        }
    }
}

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 4, 18, 0, 0).unwrap()
}

pub fn sample_claims() -> Vec<SessionClaims> {
    vec![
        SessionClaims::new("u1", "a@b.com", Role::User),
        SessionClaims::new("org-42", "events@venue.example", Role::Organizer),
        SessionClaims::new("7f3c2a90-1b2d-4e5f-8a9b-0c1d2e3f4a5b", "root@nexevent.io", Role::Admin),
        SessionClaims::new("ünïcødé", "名前@example.jp", Role::User),
    ]
}

pub fn sample_passwords() -> Vec<&'static str> {
    vec!["s3cret", "a", "correct horse battery staple", "pässwörd🔒", "  padded  "]
}

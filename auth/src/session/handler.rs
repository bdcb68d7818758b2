use std::collections::HashSet;
use std::sync::Arc;

use chrono::Duration;
use chrono::SubsecRound;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::SessionClaims;
use super::claims::TokenPayload;
use super::errors::JwtError;
use super::token::SessionToken;
use crate::clock::Clock;
use crate::clock::SystemClock;

/// JWT handler for issuing and verifying session tokens.
///
/// Uses HS256 (HMAC with SHA-256) over a secret supplied at construction.
/// The secret is never re-read: rotating it means building a new handler,
/// after which tokens signed with the old secret stop verifying.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
    leeway: Duration,
    clock: Arc<dyn Clock>,
}

impl JwtHandler {
    pub const DEFAULT_TTL_HOURS: i64 = 7 * 24;
    pub const DEFAULT_LEEWAY_SECONDS: i64 = 5;

    /// Create a new JWT handler with a secret key.
    ///
    /// Tokens live for seven days, expiry is checked with five seconds of
    /// leeway against the system clock.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl: Duration::hours(Self::DEFAULT_TTL_HOURS),
            leeway: Duration::seconds(Self::DEFAULT_LEEWAY_SECONDS),
            clock: Arc::new(SystemClock),
        }
    }

    /// Set how long issued tokens stay valid. Must be positive.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        debug_assert!(ttl > Duration::zero(), "token TTL must be positive");
        self.ttl = ttl;
        self
    }

    /// Set the clock skew tolerated when checking expiration. Must not be
    /// negative.
    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        debug_assert!(leeway >= Duration::zero(), "token leeway must not be negative");
        self.leeway = leeway;
        self
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn leeway(&self) -> Duration {
        self.leeway
    }

    /// Sign claims into a session token expiring `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, claims: &SessionClaims) -> Result<SessionToken, JwtError> {
        let issued_at = self.clock.now().trunc_subsecs(0);
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| JwtError::EncodingFailed("Expiration out of range".to_string()))?;

        let payload = TokenPayload {
            claims: claims.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &payload, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))?;

        tracing::debug!(
            subject = %claims.sub,
            role = %claims.role,
            expires_at = %expires_at,
            "Session token issued"
        );

        Ok(SessionToken::new(token, expires_at))
    }

    /// Verify a session token.
    ///
    /// # Returns
    /// The embedded claims when the signature matches this handler's secret
    /// and the token has not expired. `None` for every other outcome:
    /// malformed input, foreign or tampered signature, or expiry.
    pub fn verify(&self, token: &str) -> Option<SessionClaims> {
        match self.decode(token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                tracing::debug!(reason = %e, "Session token rejected");
                None
            }
        }
    }

    fn decode(&self, token: &str) -> Result<SessionClaims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against the injected clock
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::from(["exp".to_string()]);

        let token_data = decode::<TokenPayload>(token, &self.decoding_key, &validation)
            .map_err(|e| JwtError::DecodingFailed(e.to_string()))?;

        let payload = token_data.claims;
        if payload.is_expired(self.clock.now().timestamp(), self.leeway.num_seconds()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(payload.claims)
    }
}

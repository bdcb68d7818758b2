use tokio::task;

use crate::bearer;
use crate::config::AuthConfig;
use crate::config::ConfigurationError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::session::JwtError;
use crate::session::JwtHandler;
use crate::session::SessionClaims;
use crate::session::SessionToken;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Password hashing and verification are CPU-bound and run on tokio's
/// blocking pool; token operations run inline. Share it behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    /// Wrong password or unusable stored hash. Deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    pub fn new(password_hasher: PasswordHasher, jwt_handler: JwtHandler) -> Self {
        Self {
            password_hasher,
            jwt_handler,
        }
    }

    /// Build an authenticator from loaded configuration.
    ///
    /// # Errors
    /// * `Invalid` - The configured hashing cost is rejected by Argon2
    pub fn from_config(config: &AuthConfig) -> Result<Self, ConfigurationError> {
        let password_hasher = PasswordHasher::with_cost(config.password)
            .map_err(|e| ConfigurationError::Invalid(e.to_string()))?;

        let jwt_handler = JwtHandler::new(config.jwt.secret.as_bytes())
            .with_ttl(config.jwt.ttl())
            .with_leeway(config.jwt.leeway());

        Ok(Self::new(password_hasher, jwt_handler))
    }

    pub fn password_hasher(&self) -> &PasswordHasher {
        &self.password_hasher
    }

    pub fn jwt_handler(&self) -> &JwtHandler {
        &self.jwt_handler
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `EmptyPassword` - The plaintext is empty
    /// * `HashingFailed` - Hashing failed or the blocking task was lost
    pub async fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        let hasher = self.password_hasher.clone();
        let password = password.to_owned();

        task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
    }

    /// Check a password against a stored hash.
    ///
    /// Never fails: a lost blocking task counts as a mismatch.
    pub async fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        let hasher = self.password_hasher.clone();
        let password = password.to_owned();
        let stored_hash = stored_hash.to_owned();

        task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Password verification task failed");
                false
            })
    }

    /// Verify credentials and issue a session token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `JwtError` - Token generation failed
    pub async fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &SessionClaims,
    ) -> Result<SessionToken, AuthenticationError> {
        if !self.verify_password(password, stored_hash).await {
            tracing::info!(subject = %claims.sub, "Authentication failed");
            return Err(AuthenticationError::InvalidCredentials);
        }

        let token = self.jwt_handler.issue(claims)?;

        tracing::info!(
            subject = %claims.sub,
            role = %claims.role,
            expires_at = %token.expires_at(),
            "Authentication succeeded"
        );

        Ok(token)
    }

    /// Issue a session token without password verification.
    ///
    /// For flows where the principal was already authenticated, such as
    /// right after registration.
    pub fn issue_token(&self, claims: &SessionClaims) -> Result<SessionToken, JwtError> {
        self.jwt_handler.issue(claims)
    }

    /// Validate a session token.
    pub fn validate_token(&self, token: &str) -> Option<SessionClaims> {
        self.jwt_handler.verify(token)
    }

    /// Validate the value of an `Authorization: Bearer <token>` header.
    pub fn authorize(&self, authorization: Option<&str>) -> Option<SessionClaims> {
        let token = authorization.and_then(bearer::extract_token)?;
        self.validate_token(token)
    }
}

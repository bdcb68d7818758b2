use thiserror::Error;

/// Error type for password operations.
///
/// Verification never produces an error: a mismatch and a malformed stored
/// hash both come back as `false` from [`PasswordHasher::verify`].
///
/// [`PasswordHasher::verify`]: super::PasswordHasher::verify
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Invalid hashing cost: {0}")]
    InvalidCost(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

use thiserror::Error;

/// Error type for JWT operations.
///
/// Only issuance surfaces these to callers. Verification failures are
/// logged with their reason and then collapsed into `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,
}

/// Error for Role parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

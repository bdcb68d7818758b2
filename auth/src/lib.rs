//! Credential and session-token library for NexEvent
//!
//! Provides:
//! - Password hashing (Argon2id, configurable cost)
//! - Session token issuance and validation (HS256 JWT)
//! - A login coordinator that keeps CPU-bound hashing off the async executor
//! - Layered configuration with a mandatory signing secret
//!
//! Verification never raises: a password check answers `bool`, a token
//! check answers `Option<SessionClaims>`, whatever the cause of failure.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use nexevent_auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("s3cret").unwrap();
//! assert!(hasher.verify("s3cret", &hash));
//! assert!(!hasher.verify("wrong", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use nexevent_auth::{JwtHandler, Role, SessionClaims};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = SessionClaims::new("u1", "a@b.com", Role::User);
//! let token = handler.issue(&claims).unwrap();
//! assert_eq!(handler.verify(token.as_str()), Some(claims));
//! assert_eq!(handler.verify("garbage"), None);
//! ```

pub mod authenticator;
pub mod bearer;
pub mod clock;
pub mod config;
pub mod password;
pub mod session;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use config::AuthConfig;
pub use config::ConfigurationError;
pub use config::SigningSecret;
pub use password::HashingCost;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use session::JwtError;
pub use session::JwtHandler;
pub use session::Role;
pub use session::SessionClaims;
pub use session::SessionToken;

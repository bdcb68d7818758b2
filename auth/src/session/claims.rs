use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use super::errors::RoleError;

/// Role of an authenticated principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Organizer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Organizer => "ORGANIZER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    /// Parse a role name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "ORGANIZER" => Ok(Role::Organizer),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(RoleError::Unknown(s.to_string())),
        }
    }
}

/// Identity carried by a session token.
///
/// Immutable once minted into a token: the verifier hands back exactly what
/// the issuer was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (account identifier)
    pub sub: String,

    /// Account email address
    pub email: String,

    /// Account role
    pub role: Role,
}

impl SessionClaims {
    pub fn new(sub: impl ToString, email: impl ToString, role: Role) -> Self {
        Self {
            sub: sub.to_string(),
            email: email.to_string(),
            role,
        }
    }
}

/// Signed JWT body: the session claims plus issued-at and expiration as
/// Unix timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TokenPayload {
    #[serde(flatten)]
    pub claims: SessionClaims,

    pub iat: i64,

    pub exp: i64,
}

impl TokenPayload {
    /// A token stays valid while `now` is strictly before `exp + leeway`.
    pub fn is_expired(&self, current_timestamp: i64, leeway_seconds: i64) -> bool {
        current_timestamp >= self.exp.saturating_add(leeway_seconds)
    }
}

use std::fmt;

use chrono::DateTime;
use chrono::Utc;

/// Signed compact token handed to the client as a bearer credential.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl SessionToken {
    pub(crate) fn new(value: String, expires_at: DateTime<Utc>) -> Self {
        Self { value, expires_at }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Instant after which the token no longer verifies (leeway aside).
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

// Keeps the bearer credential out of debug logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

use std::env;
use std::fmt;

use ::config::builder::DefaultState;
use ::config::Config as Settings;
use ::config::ConfigBuilder;
use ::config::ConfigError;
use ::config::Environment;
use ::config::File;
use ::config::FileFormat;
use chrono::Duration;
use serde::Deserialize;
use thiserror::Error;

use crate::password::HashingCost;
use crate::session::JwtHandler;

/// Error for configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Missing required setting: jwt.secret")]
    MissingSecret,

    #[error("Invalid setting: {0}")]
    Invalid(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt: JwtConfig,
    pub password: HashingCost,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: SigningSecret,
    pub expiration_hours: i64,
    pub leeway_seconds: i64,
}

impl JwtConfig {
    pub fn ttl(&self) -> Duration {
        Duration::hours(self.expiration_hours)
    }

    pub fn leeway(&self) -> Duration {
        Duration::seconds(self.leeway_seconds)
    }
}

/// Symmetric key used to sign and verify session tokens.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct SigningSecret(String);

impl SigningSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

impl AuthConfig {
    pub const ENV_PREFIX: &'static str = "NEXEVENT";

    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables prefixed with `NEXEVENT__`
    ///    (NEXEVENT__JWT__SECRET, NEXEVENT__PASSWORD__MEMORY_KIB, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults (everything except the signing secret)
    ///
    /// # Errors
    /// * `MissingSecret` - No non-blank `jwt.secret` in any source
    /// * `Invalid` - A setting is out of range
    /// * `Load` - A source could not be read or deserialized
    pub fn load() -> Result<Self, ConfigurationError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: NEXEVENT__JWT__SECRET=... overrides jwt.secret
            .add_source(
                Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            );

        Self::build(builder)
    }

    /// Parse configuration from a TOML document, applying the same defaults
    /// and validation as [`AuthConfig::load`].
    pub fn from_toml(document: &str) -> Result<Self, ConfigurationError> {
        let builder = Self::defaults()?.add_source(File::from_str(document, FileFormat::Toml));

        Self::build(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let cost = HashingCost::default();

        Settings::builder()
            .set_default("jwt.expiration_hours", JwtHandler::DEFAULT_TTL_HOURS)?
            .set_default("jwt.leeway_seconds", JwtHandler::DEFAULT_LEEWAY_SECONDS)?
            .set_default("password.memory_kib", i64::from(cost.memory_kib))?
            .set_default("password.iterations", i64::from(cost.iterations))?
            .set_default("password.parallelism", i64::from(cost.parallelism))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigurationError> {
        let configuration = builder.build()?;

        match configuration.get_string("jwt.secret") {
            Ok(secret) if !secret.trim().is_empty() => {}
            Ok(_) | Err(ConfigError::NotFound(_)) => return Err(ConfigurationError::MissingSecret),
            Err(e) => return Err(e.into()),
        }

        let config: AuthConfig = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.jwt.secret.is_blank() {
            return Err(ConfigurationError::MissingSecret);
        }
        if self.jwt.expiration_hours <= 0 {
            return Err(ConfigurationError::Invalid(format!(
                "jwt.expiration_hours must be positive, got {}",
                self.jwt.expiration_hours
            )));
        }
        if self.jwt.leeway_seconds < 0 {
            return Err(ConfigurationError::Invalid(format!(
                "jwt.leeway_seconds must not be negative, got {}",
                self.jwt.leeway_seconds
            )));
        }

        Ok(())
    }
}

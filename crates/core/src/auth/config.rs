//! Token configuration, loaded once at startup and immutable afterwards.

use chrono::{Duration, Utc};

/// Default access-token lifetime in seconds.
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 3600;
/// Default refresh-token lifetime in hours (60 days).
pub const DEFAULT_REFRESH_TOKEN_TTL_HOURS: i64 = 1440;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in the environment")]
    Missing(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{var} must be a valid integer, got {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("{var} must be a positive lifetime that fits the calendar, got {value}")]
    OutOfRange { var: &'static str, value: i64 },
}

/// Signing secret and token lifetimes shared by issue and validate.
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 key material for access tokens.
    pub secret: String,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .finish()
    }
}

impl AuthConfig {
    /// Build a config with the default lifetimes.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_ttl: Duration::seconds(DEFAULT_ACCESS_TOKEN_TTL_SECS),
            refresh_token_ttl: Duration::hours(DEFAULT_REFRESH_TOKEN_TTL_HOURS),
        }
    }

    /// Load token configuration from environment variables.
    ///
    /// | Env Var                   | Required | Default |
    /// |---------------------------|----------|---------|
    /// | `JWT_SECRET`              | **yes**  | --      |
    /// | `ACCESS_TOKEN_TTL_SECS`   | no       | `3600`  |
    /// | `REFRESH_TOKEN_TTL_HOURS` | no       | `1440`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        if secret.is_empty() {
            return Err(ConfigError::Empty("JWT_SECRET"));
        }

        let access_token_ttl = parse_ttl(
            "ACCESS_TOKEN_TTL_SECS",
            std::env::var("ACCESS_TOKEN_TTL_SECS").ok(),
            DEFAULT_ACCESS_TOKEN_TTL_SECS,
            Duration::try_seconds,
        )?;
        let refresh_token_ttl = parse_ttl(
            "REFRESH_TOKEN_TTL_HOURS",
            std::env::var("REFRESH_TOKEN_TTL_HOURS").ok(),
            DEFAULT_REFRESH_TOKEN_TTL_HOURS,
            Duration::try_hours,
        )?;

        Ok(Self {
            secret,
            access_token_ttl,
            refresh_token_ttl,
        })
    }
}

/// Read an optional integer variable, falling back to `default` when unset.
pub fn env_i64(var: &'static str, default: i64) -> Result<i64, ConfigError> {
    parse_i64(var, std::env::var(var).ok(), default)
}

fn parse_i64(var: &'static str, raw: Option<String>, default: i64) -> Result<i64, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

/// Turn a raw lifetime setting into a [`Duration`] in the given unit.
///
/// Rejects zero, negatives, and anything that would overflow either the
/// duration type or `now + ttl`.
fn parse_ttl(
    var: &'static str,
    raw: Option<String>,
    default: i64,
    unit: fn(i64) -> Option<Duration>,
) -> Result<Duration, ConfigError> {
    let value = parse_i64(var, raw, default)?;
    if value <= 0 {
        return Err(ConfigError::OutOfRange { var, value });
    }
    let ttl = unit(value).ok_or(ConfigError::OutOfRange { var, value })?;
    if Utc::now().checked_add_signed(ttl).is_none() {
        return Err(ConfigError::OutOfRange { var, value });
    }
    Ok(ttl)
}

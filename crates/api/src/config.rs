use axum::http::HeaderValue;
use chirpy_core::auth::config::{env_i64, ConfigError as AuthConfigError};
use chirpy_core::auth::AuthConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Auth(#[from] AuthConfigError),

    #[error("PORT must be a valid u16, got {0:?}")]
    InvalidPort(String),

    #[error("REQUEST_TIMEOUT_SECS must be a positive integer, got {0}")]
    InvalidTimeout(i64),

    #[error("Invalid CORS origin {0:?}")]
    InvalidCorsOrigin(String),
}

/// Server configuration loaded from environment variables.
///
/// Loaded once at startup and shared read-only through `AppState`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Signing secret and token lifetimes.
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:8080`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// Token settings are read by [`AuthConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port_raw = std::env::var("PORT").unwrap_or_else(|_| "8080".into());
        let port: u16 = port_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;

        let cors_origins = parse_cors_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:8080".into()),
        )?;

        let timeout = env_i64("REQUEST_TIMEOUT_SECS", 30)?;
        let request_timeout_secs =
            u64::try_from(timeout).map_err(|_| ConfigError::InvalidTimeout(timeout))?;
        if request_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(timeout));
        }

        let auth = AuthConfig::from_env()?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            auth,
        })
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_cors_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|o| {
            HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidCorsOrigin(o.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_origins_are_trimmed_and_blanks_dropped() {
        let origins = parse_cors_origins(" http://a.test , ,http://b.test").unwrap();
        assert_eq!(origins, ["http://a.test", "http://b.test"]);
    }

    #[test]
    fn cors_origin_with_control_characters_is_rejected() {
        assert!(parse_cors_origins("http://a.test\n").is_ok(), "trailing newline is trimmed");
        assert!(parse_cors_origins("http://a\u{7f}.test").is_err());
    }
}

//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CHRONO_HOST` - Bind address (default: 127.0.0.1)
//! - `CHRONO_PORT` - Listen port (default: 3000)
//! - `CHRONO_BASE_URL` - Public URL (default: `http://{host}:{port}`)
//! - `CHRONO_STATIC_DIR` - Static asset directory (default: crates/storefront/static)
//! - `CHRONO_SESSION_DAYS` - Days of inactivity before a visitor's stored
//!   cart, filters and login are dropped (default: 365)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_SESSION_DAYS: u16 = 365;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Inactivity lifetime of the visitor session, in days
    pub session_days: u16,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        let host = IpAddr::from([127, 0, 0, 1]);
        let port = 3000;
        Self {
            host,
            port,
            base_url: format!("http://{host}:{port}"),
            static_dir: PathBuf::from("crates/storefront/static"),
            session_days: DEFAULT_SESSION_DAYS,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_or("CHRONO_HOST", lookup("CHRONO_HOST"), defaults.host)?;
        let port = parse_or("CHRONO_PORT", lookup("CHRONO_PORT"), defaults.port)?;
        let session_days = parse_or(
            "CHRONO_SESSION_DAYS",
            lookup("CHRONO_SESSION_DAYS"),
            defaults.session_days,
        )?;
        if session_days == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "CHRONO_SESSION_DAYS".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let base_url = lookup("CHRONO_BASE_URL")
            .map_or_else(|| format!("http://{host}:{port}"), |url| {
                url.trim_end_matches('/').to_string()
            });
        let static_dir = lookup("CHRONO_STATIC_DIR").map_or(defaults.static_dir, PathBuf::from);

        Ok(Self {
            host,
            port,
            base_url,
            static_dir,
            session_days,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the public URL is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or<T>(key: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.static_dir, PathBuf::from("crates/storefront/static"));
        assert_eq!(config.session_days, 365);
        assert!(config.sentry_dsn.is_none());
        assert!(!config.is_secure());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("CHRONO_HOST", "0.0.0.0"),
            ("CHRONO_PORT", "8080"),
            ("CHRONO_BASE_URL", "https://chronoroyale.es/"),
            ("CHRONO_SESSION_DAYS", "30"),
            ("SENTRY_DSN", ""),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.base_url, "https://chronoroyale.es");
        assert!(config.is_secure());
        assert_eq!(config.session_days, 30);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_base_url_follows_host_and_port() {
        let config = load(&[("CHRONO_PORT", "4000")]).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:4000");
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("CHRONO_PORT", "puerto")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "CHRONO_PORT"));
    }

    #[test]
    fn test_invalid_host() {
        assert!(load(&[("CHRONO_HOST", "localhost:80")]).is_err());
    }

    #[test]
    fn test_zero_session_days_rejected() {
        assert!(load(&[("CHRONO_SESSION_DAYS", "0")]).is_err());
    }
}

//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `STOREFRONT_LOGOUT_TIMEOUT_MS` - Upper bound on the auth gateway
//!   logout call in milliseconds (default: 5000, must be > 0)
//! - `STOREFRONT_CURRENCY` - ISO 4217 code prices are displayed in
//!   (default: RUB)

use std::env;
use std::time::Duration;

use thiserror::Error;

use clementine_core::CurrencyCode;

/// Default bound on the logout suspension point.
const DEFAULT_LOGOUT_TIMEOUT_MS: u64 = 5000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront state layer configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Upper bound on the auth gateway logout call.
    pub logout_timeout: Duration,
    /// Currency prices are displayed in.
    pub currency: CurrencyCode,
}

impl StorefrontConfig {
    /// Load configuration from the environment.
    ///
    /// Reads a `.env` file first if one is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if a variable is set but
    /// cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            logout_timeout: parse_timeout(env::var("STOREFRONT_LOGOUT_TIMEOUT_MS").ok())?,
            currency: parse_currency(env::var("STOREFRONT_CURRENCY").ok())?,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            logout_timeout: Duration::from_millis(DEFAULT_LOGOUT_TIMEOUT_MS),
            currency: CurrencyCode::default(),
        }
    }
}

/// Parse the logout timeout, falling back to the default when unset.
fn parse_timeout(raw: Option<String>) -> Result<Duration, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Duration::from_millis(DEFAULT_LOGOUT_TIMEOUT_MS));
    };

    let ms: u64 = raw.parse().map_err(|_| {
        ConfigError::InvalidEnvVar(
            "STOREFRONT_LOGOUT_TIMEOUT_MS".to_owned(),
            format!("expected a positive integer, got {raw:?}"),
        )
    })?;

    if ms == 0 {
        return Err(ConfigError::InvalidEnvVar(
            "STOREFRONT_LOGOUT_TIMEOUT_MS".to_owned(),
            "timeout must be greater than zero".to_owned(),
        ));
    }

    Ok(Duration::from_millis(ms))
}

/// Parse the display currency, falling back to the default when unset.
fn parse_currency(raw: Option<String>) -> Result<CurrencyCode, ConfigError> {
    match raw {
        None => Ok(CurrencyCode::default()),
        Some(raw) => raw.parse().map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_CURRENCY".to_owned(), format!("{e}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        assert_eq!(
            parse_timeout(None).expect("default timeout"),
            Duration::from_millis(DEFAULT_LOGOUT_TIMEOUT_MS)
        );
        assert_eq!(parse_currency(None).expect("default currency"), CurrencyCode::RUB);
    }

    #[test]
    fn timeout_parses_milliseconds() {
        let parsed = parse_timeout(Some("250".to_owned())).expect("valid timeout");
        assert_eq!(parsed, Duration::from_millis(250));
    }

    #[test]
    fn zero_and_garbage_timeouts_are_rejected() {
        assert!(parse_timeout(Some("0".to_owned())).is_err());
        assert!(parse_timeout(Some("soon".to_owned())).is_err());
    }

    #[test]
    fn currency_parses_iso_code() {
        let parsed = parse_currency(Some("usd".to_owned())).expect("valid currency");
        assert_eq!(parsed, CurrencyCode::USD);
        assert!(parse_currency(Some("BTC".to_owned())).is_err());
    }
}

//! Allocator configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then passed by
//! value into [`crate::application::services::ShortUrlService`]. Nothing in
//! the crate reads the environment after startup.
//!
//! ## Variables
//!
//! - `SHORT_KEY_LENGTH` - Length of generated short keys (default: 7)
//! - `MAX_SHORT_URL_RETRY` - Generation attempts before giving up (default: 5)
//! - `DEFAULT_URL_EXPIRATION_DAYS` - Lifetime when the caller supplies none (default: 30)
//! - `MAX_URL_EXPIRATION_DAYS` - Hard cap on any requested lifetime (default: 365)
//! - `RUST_LOG` - Log level (default: `info`)

use anyhow::Result;
use std::env;

/// Immutable service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Exact length of every short key, generated or custom.
    pub short_key_length: usize,
    /// Number of generation attempts before `RetryExhausted`.
    pub max_short_url_retry: u32,
    /// Lifetime in days applied when the caller requests none.
    pub default_url_expiration_days: i64,
    /// Upper bound in days on any requested lifetime.
    pub max_url_expiration_days: i64,
    pub log_level: String,
}

/// A 128-bit seed has at most 22 base-62 digits, and values below 62^21 can
/// produce only 21. Keys longer than that cannot be filled from one seed.
const MAX_KEY_LENGTH: usize = 21;

impl Default for Config {
    fn default() -> Self {
        Self {
            short_key_length: 7,
            max_short_url_retry: 5,
            default_url_expiration_days: 30,
            max_url_expiration_days: 365,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to their defaults; call
    /// [`Config::validate`] afterwards to reject inconsistent combinations.
    pub fn from_env() -> Self {
        let defaults = Config::default();

        let short_key_length = env::var("SHORT_KEY_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.short_key_length);

        let max_short_url_retry = env::var("MAX_SHORT_URL_RETRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_short_url_retry);

        let default_url_expiration_days = env::var("DEFAULT_URL_EXPIRATION_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.default_url_expiration_days);

        let max_url_expiration_days = env::var("MAX_URL_EXPIRATION_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_url_expiration_days);

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);

        Self {
            short_key_length,
            max_short_url_retry,
            default_url_expiration_days,
            max_url_expiration_days,
            log_level,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `short_key_length` is 0 or exceeds what a 128-bit seed can fill
    /// - `max_short_url_retry` is 0
    /// - either expiration is below one day
    /// - the default expiration exceeds the maximum
    pub fn validate(&self) -> Result<()> {
        if self.short_key_length == 0 || self.short_key_length > MAX_KEY_LENGTH {
            anyhow::bail!(
                "SHORT_KEY_LENGTH must be between 1 and {}, got {}",
                MAX_KEY_LENGTH,
                self.short_key_length
            );
        }

        if self.max_short_url_retry == 0 {
            anyhow::bail!("MAX_SHORT_URL_RETRY must be at least 1");
        }

        if self.default_url_expiration_days < 1 {
            anyhow::bail!(
                "DEFAULT_URL_EXPIRATION_DAYS must be at least 1, got {}",
                self.default_url_expiration_days
            );
        }

        if self.max_url_expiration_days < 1 {
            anyhow::bail!(
                "MAX_URL_EXPIRATION_DAYS must be at least 1, got {}",
                self.max_url_expiration_days
            );
        }

        if self.default_url_expiration_days > self.max_url_expiration_days {
            anyhow::bail!(
                "DEFAULT_URL_EXPIRATION_DAYS ({}) must not exceed MAX_URL_EXPIRATION_DAYS ({})",
                self.default_url_expiration_days,
                self.max_url_expiration_days
            );
        }

        Ok(())
    }

    /// Prints the loaded configuration.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Short key length: {}", self.short_key_length);
        tracing::info!("  Max generation retries: {}", self.max_short_url_retry);
        tracing::info!(
            "  Default expiration: {} days",
            self.default_url_expiration_days
        );
        tracing::info!("  Max expiration: {} days", self.max_url_expiration_days);
        tracing::info!("  Log level: {}", self.log_level);
    }
}

/// Loads `.env` if present, then loads and validates configuration.
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<Config> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.short_key_length, 7);
        assert_eq!(config.max_short_url_retry, 5);
        assert_eq!(config.default_url_expiration_days, 30);
        assert_eq!(config.max_url_expiration_days, 365);
    }

    #[test]
    fn test_validation_rejects_zero_key_length() {
        let config = Config {
            short_key_length: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_key_length_beyond_seed_width() {
        let config = Config {
            short_key_length: MAX_KEY_LENGTH + 1,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            short_key_length: MAX_KEY_LENGTH,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_retries() {
        let config = Config {
            max_short_url_retry: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_default_above_max_expiration() {
        let config = Config {
            default_url_expiration_days: 400,
            max_url_expiration_days: 365,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_sub_day_expirations() {
        let config = Config {
            default_url_expiration_days: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            max_url_expiration_days: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SHORT_KEY_LENGTH", "9");
            env::set_var("MAX_SHORT_URL_RETRY", "3");
            env::set_var("DEFAULT_URL_EXPIRATION_DAYS", "14");
            env::set_var("MAX_URL_EXPIRATION_DAYS", "180");
        }

        let config = Config::from_env();

        assert_eq!(config.short_key_length, 9);
        assert_eq!(config.max_short_url_retry, 3);
        assert_eq!(config.default_url_expiration_days, 14);
        assert_eq!(config.max_url_expiration_days, 180);

        // Cleanup
        unsafe {
            env::remove_var("SHORT_KEY_LENGTH");
            env::remove_var("MAX_SHORT_URL_RETRY");
            env::remove_var("DEFAULT_URL_EXPIRATION_DAYS");
            env::remove_var("MAX_URL_EXPIRATION_DAYS");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_garbage_values() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SHORT_KEY_LENGTH", "not-a-number");
        }

        let config = Config::from_env();
        assert_eq!(config.short_key_length, 7);

        // Cleanup
        unsafe {
            env::remove_var("SHORT_KEY_LENGTH");
        }
    }
}

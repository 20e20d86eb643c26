//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export APP_DEEPLINK_PREFIX="app://open"
//! export GIFT_CARD_CATALOG_PATH="./catalog.json"
//! ```
//!
//! ## Optional Variables
//!
//! - `APP_DEEPLINK_PREFIX` - Application deep-link prefix (default: `app://open`)
//! - `GIFT_CARD_CATALOG_PATH` - JSON file with the initial gift-card catalog
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

/// Prefix used when `APP_DEEPLINK_PREFIX` is not set.
pub const DEFAULT_DEEPLINK_PREFIX: &str = "app://open";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix stripped from links before route matching. Constant for the
    /// process lifetime.
    pub deeplink_prefix: String,
    /// Initial gift-card catalog. An empty catalog is used when unset.
    pub catalog_path: Option<String>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let deeplink_prefix = env::var("APP_DEEPLINK_PREFIX")
            .unwrap_or_else(|_| DEFAULT_DEEPLINK_PREFIX.to_string());

        let catalog_path = env::var("GIFT_CARD_CATALOG_PATH")
            .ok()
            .filter(|p| !p.is_empty());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            deeplink_prefix,
            catalog_path,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `deeplink_prefix` is empty or has no `://` separator
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.deeplink_prefix.is_empty() {
            anyhow::bail!("APP_DEEPLINK_PREFIX must not be empty");
        }

        if !self.deeplink_prefix.contains("://") {
            anyhow::bail!(
                "APP_DEEPLINK_PREFIX must look like 'scheme://host', got '{}'",
                self.deeplink_prefix
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Deep-link prefix: {}", self.deeplink_prefix);

        if let Some(ref path) = self.catalog_path {
            tracing::info!("  Gift-card catalog: {}", path);
        } else {
            tracing::info!("  Gift-card catalog: none (empty)");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

/// Installs the global tracing subscriber for `log_level` and `log_format`.
pub fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            deeplink_prefix: "app://open".to_string(),
            catalog_path: None,
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.deeplink_prefix = String::new();
        assert!(config.validate().is_err());

        config.deeplink_prefix = "open".to_string();
        assert!(config.validate().is_err());

        config.deeplink_prefix = "bitpay://".to_string();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("APP_DEEPLINK_PREFIX");
            env::remove_var("GIFT_CARD_CATALOG_PATH");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.deeplink_prefix, DEFAULT_DEEPLINK_PREFIX);
        assert!(config.catalog_path.is_none());
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("APP_DEEPLINK_PREFIX", "bitpay://");
            env::set_var("GIFT_CARD_CATALOG_PATH", "/etc/catalog.json");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.deeplink_prefix, "bitpay://");
        assert_eq!(config.catalog_path.as_deref(), Some("/etc/catalog.json"));

        // Cleanup
        unsafe {
            env::remove_var("APP_DEEPLINK_PREFIX");
            env::remove_var("GIFT_CARD_CATALOG_PATH");
        }
    }

    #[test]
    #[serial]
    fn test_empty_catalog_path_is_ignored() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("GIFT_CARD_CATALOG_PATH", "");
        }

        let config = Config::from_env().unwrap();
        assert!(config.catalog_path.is_none());

        unsafe {
            env::remove_var("GIFT_CARD_CATALOG_PATH");
        }
    }
}

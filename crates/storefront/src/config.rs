//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `LOCALMART_API_URL` - GraphQL account API endpoint
//!
//! ## Optional
//! - `LOCALMART_API_TIMEOUT_SECS` - HTTP timeout for account API calls (default: 10)
//! - `LOCALMART_STORAGE_PREFIX` - Key prefix for persisted state (default: localmart)
//! - `LOCALMART_FREE_DELIVERY_THRESHOLD` - Subtotal above which delivery is free (default: 30)
//! - `LOCALMART_DELIVERY_FEE` - Flat delivery fee below the threshold (default: 5.99)
//! - `LOCALMART_TAX_RATE` - Tax rate applied to the subtotal (default: 0.08)

use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::pricing::PricingConfig;

/// Default HTTP timeout for account API calls, in seconds.
const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// Default prefix for persisted storage keys.
const DEFAULT_STORAGE_PREFIX: &str = "localmart";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Account API configuration.
    pub api: AccountApiConfig,
    /// Order pricing constants.
    pub pricing: PricingConfig,
    /// Prefix for persisted storage keys (session, cart, wishlist).
    pub storage_prefix: String,
}

/// Remote GraphQL account API configuration.
#[derive(Debug, Clone)]
pub struct AccountApiConfig {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if required variables are missing or any
    /// variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let endpoint = get_required_env("LOCALMART_API_URL")?;
        // Validate the endpoint shape up front so a typo fails at startup,
        // not on the first login attempt.
        url::Url::parse(&endpoint).map_err(|e| {
            ConfigError::InvalidEnvVar("LOCALMART_API_URL".to_string(), e.to_string())
        })?;

        let timeout_secs = get_env_or_default(
            "LOCALMART_API_TIMEOUT_SECS",
            &DEFAULT_API_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("LOCALMART_API_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        let storage_prefix = get_env_or_default("LOCALMART_STORAGE_PREFIX", DEFAULT_STORAGE_PREFIX);

        let defaults = PricingConfig::default();
        let pricing = PricingConfig {
            free_delivery_threshold: get_decimal_or(
                "LOCALMART_FREE_DELIVERY_THRESHOLD",
                defaults.free_delivery_threshold,
            )?,
            delivery_fee: get_decimal_or("LOCALMART_DELIVERY_FEE", defaults.delivery_fee)?,
            tax_rate: get_decimal_or("LOCALMART_TAX_RATE", defaults.tax_rate)?,
        };

        Ok(Self {
            api: AccountApiConfig {
                endpoint,
                timeout: Duration::from_secs(timeout_secs),
            },
            pricing,
            storage_prefix,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a decimal environment variable, falling back to a default when unset.
fn get_decimal_or(key: &str, default: Decimal) -> Result<Decimal, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<Decimal>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

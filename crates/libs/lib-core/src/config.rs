//! # Application Configuration
//!
//! Configuration for the asset verification flow, loaded from environment variables
//! and validated on startup to fail fast if misconfigured.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SUPPORT_UNVERIFIED_ASSET` | `false` | Enables the unverified-asset actions and banner copy |
//! | `ASSET_UPDATE_POLICY` | `optimistic` | `optimistic` or `strict` handling of rejected updates |
//! | `SNACKBAR_CAPACITY` | `8` | Maximum queued snackbar messages |
//!
//! ## Global Config Access
//!
//! ```rust,no_run
//! use lib_core::config::{core_config, init_config};
//!
//! init_config().expect("invalid configuration");
//! let config = core_config();
//! println!("{:?}", config.update_failure_policy);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use lib_utils::envs::{get_env_bool_or, get_env_parse_or};

use crate::error::{AppError, Result};
use crate::features::FeatureFlag;

const ENV_ASSET_UPDATE_POLICY: &str = "ASSET_UPDATE_POLICY";
const ENV_SNACKBAR_CAPACITY: &str = "SNACKBAR_CAPACITY";

/// What happens after "Add to asset list" when the store rejects the update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateFailurePolicy {
    /// Show the confirmation and close anyway; the outcome still records the rejection.
    #[default]
    Optimistic,
    /// Keep the panel open and show an error message.
    Strict,
}

impl FromStr for UpdateFailurePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimistic" => Ok(UpdateFailurePolicy::Optimistic),
            "strict" => Ok(UpdateFailurePolicy::Strict),
            other => Err(AppError::Config(format!(
                "{ENV_ASSET_UPDATE_POLICY} must be 'optimistic' or 'strict', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for UpdateFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateFailurePolicy::Optimistic => f.write_str("optimistic"),
            UpdateFailurePolicy::Strict => f.write_str("strict"),
        }
    }
}

/// Asset verification configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub support_unverified_asset: bool,
    pub update_failure_policy: UpdateFailurePolicy,
    pub snackbar_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            support_unverified_asset: false,
            update_failure_policy: UpdateFailurePolicy::Optimistic,
            snackbar_capacity: 8,
        }
    }
}

impl Config {
    /// Load configuration from environment variables. Unset variables take their defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let support_unverified_asset = get_env_bool_or(
            FeatureFlag::SupportUnverifiedAsset.env_key(),
            defaults.support_unverified_asset,
        )?;

        let update_failure_policy = match lib_utils::get_env(ENV_ASSET_UPDATE_POLICY) {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.update_failure_policy,
        };

        let snackbar_capacity = get_env_parse_or(ENV_SNACKBAR_CAPACITY, defaults.snackbar_capacity)?;

        Ok(Self {
            support_unverified_asset,
            update_failure_policy,
            snackbar_capacity,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.snackbar_capacity == 0 || self.snackbar_capacity > 64 {
            return Err(AppError::Config(format!(
                "{ENV_SNACKBAR_CAPACITY} must be between 1 and 64"
            )));
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration from `.env` and the process environment.
///
/// # Errors
///
/// Returns an error if a variable is malformed, validation fails, or the
/// config has already been initialized.
pub fn init_config() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        support_unverified_asset = config.support_unverified_asset,
        update_failure_policy = %config.update_failure_policy,
        snackbar_capacity = config.snackbar_capacity,
        "Asset configuration loaded"
    );

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration.
///
/// Falls back to [`Config::default`] when [`init_config`] was never called
/// (the browser build has no process environment).
pub fn core_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("Strict".parse::<UpdateFailurePolicy>(), Ok(UpdateFailurePolicy::Strict));
        assert_eq!(
            " optimistic ".parse::<UpdateFailurePolicy>(),
            Ok(UpdateFailurePolicy::Optimistic)
        );
        assert!(matches!(
            "yolo".parse::<UpdateFailurePolicy>(),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(!config.support_unverified_asset);
        assert_eq!(config.update_failure_policy, UpdateFailurePolicy::Optimistic);
    }

    // The only test in this crate that touches these variables.
    #[test]
    fn test_from_env_reads_variables() {
        std::env::set_var("SUPPORT_UNVERIFIED_ASSET", "1");
        std::env::set_var(ENV_ASSET_UPDATE_POLICY, "strict");
        std::env::set_var(ENV_SNACKBAR_CAPACITY, "3");

        let config = Config::from_env();

        std::env::remove_var("SUPPORT_UNVERIFIED_ASSET");
        std::env::remove_var(ENV_ASSET_UPDATE_POLICY);
        std::env::remove_var(ENV_SNACKBAR_CAPACITY);

        assert_eq!(
            config,
            Ok(Config {
                support_unverified_asset: true,
                update_failure_policy: UpdateFailurePolicy::Strict,
                snackbar_capacity: 3,
            })
        );
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = Config {
            snackbar_capacity: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }
}

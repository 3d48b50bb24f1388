//! # Feature Flags
//!
//! Boolean gates queried by the verification panel. Flags come from
//! [`Config`](crate::config::Config) (native) or from build-time constants (browser).

use std::collections::HashSet;

use crate::config::Config;

/// Known feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureFlag {
    /// Unverified-asset support: new banner copy plus "Don't show" / "Add to asset list".
    SupportUnverifiedAsset,
}

impl FeatureFlag {
    /// Environment variable backing this flag.
    pub fn env_key(&self) -> &'static str {
        match self {
            FeatureFlag::SupportUnverifiedAsset => "SUPPORT_UNVERIFIED_ASSET",
        }
    }
}

/// Read-only flag lookup.
pub trait FeatureFlagService: Send + Sync {
    fn is_enabled(&self, flag: FeatureFlag) -> bool;
}

/// Fixed set of enabled flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    enabled: HashSet<FeatureFlag>,
}

impl FeatureFlags {
    /// All flags disabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, flag: FeatureFlag, enabled: bool) -> Self {
        self.set(flag, enabled);
        self
    }

    pub fn set(&mut self, flag: FeatureFlag, enabled: bool) {
        if enabled {
            self.enabled.insert(flag);
        } else {
            self.enabled.remove(&flag);
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new().with(FeatureFlag::SupportUnverifiedAsset, config.support_unverified_asset)
    }
}

impl FeatureFlagService for FeatureFlags {
    fn is_enabled(&self, flag: FeatureFlag) -> bool {
        self.enabled.contains(&flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_disables_everything() {
        assert!(!FeatureFlags::new().is_enabled(FeatureFlag::SupportUnverifiedAsset));
    }

    #[test]
    fn test_toggle() {
        let mut flags = FeatureFlags::new().with(FeatureFlag::SupportUnverifiedAsset, true);
        assert!(flags.is_enabled(FeatureFlag::SupportUnverifiedAsset));

        flags.set(FeatureFlag::SupportUnverifiedAsset, false);
        assert!(!flags.is_enabled(FeatureFlag::SupportUnverifiedAsset));
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            support_unverified_asset: true,
            ..Config::default()
        };
        assert!(FeatureFlags::from_config(&config).is_enabled(FeatureFlag::SupportUnverifiedAsset));
        assert!(!FeatureFlags::from_config(&Config::default())
            .is_enabled(FeatureFlag::SupportUnverifiedAsset));
    }

    #[test]
    fn test_env_key_matches_config_variable() {
        assert_eq!(FeatureFlag::SupportUnverifiedAsset.env_key(), "SUPPORT_UNVERIFIED_ASSET");
    }
}

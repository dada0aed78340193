//! # Counter Configuration
//!
//! Configuration for the stock and billing collaborators.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SCOOP_SHOP_NAME="Harbour Kiosk"                                    │
//! │     SCOOP_STOCK_VANILLA=40                                             │
//! │     SCOOP_MAX_RECEIPTS=500                                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/scoop/scoop.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.scoop.counter/scoop.toml (macOS) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     20 balls of every flavor, unlimited receipts                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [shop]
//! name = "Scoop Counter"
//!
//! [stock]
//! chocolate = 20
//! vanilla = 20
//! strawberry = 20
//!
//! [billing]
//! max_receipts = 500  # omit for no limit
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use scoop_core::Flavor;

use crate::error::{CounterError, CounterResult};

// =============================================================================
// Shop Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopSettings {
    /// Name printed in the CLI summary and logs.
    #[serde(default = "default_shop_name")]
    pub name: String,
}

fn default_shop_name() -> String {
    "Scoop Counter".to_string()
}

impl Default for ShopSettings {
    fn default() -> Self {
        ShopSettings {
            name: default_shop_name(),
        }
    }
}

// =============================================================================
// Stock Settings
// =============================================================================

/// Opening stock, in balls per flavor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSettings {
    #[serde(default = "default_scoops")]
    pub chocolate: u32,

    #[serde(default = "default_scoops")]
    pub vanilla: u32,

    #[serde(default = "default_scoops")]
    pub strawberry: u32,
}

fn default_scoops() -> u32 {
    20
}

impl Default for StockSettings {
    fn default() -> Self {
        StockSettings {
            chocolate: default_scoops(),
            vanilla: default_scoops(),
            strawberry: default_scoops(),
        }
    }
}

impl StockSettings {
    /// Opening balls for one flavor.
    pub fn scoops(&self, flavor: Flavor) -> u32 {
        match flavor {
            Flavor::Chocolate => self.chocolate,
            Flavor::Vanilla => self.vanilla,
            Flavor::Strawberry => self.strawberry,
        }
    }

    fn scoops_mut(&mut self, flavor: Flavor) -> &mut u32 {
        match flavor {
            Flavor::Chocolate => &mut self.chocolate,
            Flavor::Vanilla => &mut self.vanilla,
            Flavor::Strawberry => &mut self.strawberry,
        }
    }
}

// =============================================================================
// Billing Settings
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingSettings {
    /// Receipts the ledger accepts before refusing charges. `None` = no limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_receipts: Option<usize>,
}

// =============================================================================
// Main Counter Configuration
// =============================================================================

/// Complete counter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    #[serde(default)]
    pub shop: ShopSettings,

    #[serde(default)]
    pub stock: StockSettings,

    #[serde(default)]
    pub billing: BillingSettings,
}

impl CounterConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (scoop.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CounterResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading counter config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load counter config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> CounterResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| CounterError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CounterError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| CounterError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Counter config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CounterResult<()> {
        if self.shop.name.trim().is_empty() {
            return Err(CounterError::InvalidConfig(
                "shop.name must not be empty".into(),
            ));
        }

        if self.billing.max_receipts == Some(0) {
            return Err(CounterError::InvalidConfig(
                "billing.max_receipts must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies `SCOOP_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("SCOOP_SHOP_NAME") {
            debug!(name = %name, "Overriding shop name from environment");
            self.shop.name = name;
        }

        for flavor in Flavor::ALL {
            let key = format!("SCOOP_STOCK_{}", flavor.to_string().to_uppercase());
            if let Some(value) = lookup(&key) {
                match value.parse::<u32>() {
                    Ok(scoops) => {
                        debug!(%flavor, scoops, "Overriding opening stock from environment");
                        *self.stock.scoops_mut(flavor) = scoops;
                    }
                    Err(_) => warn!(key = %key, value = %value, "Ignoring non-numeric stock override"),
                }
            }
        }

        if let Some(value) = lookup("SCOOP_MAX_RECEIPTS") {
            match value.parse::<usize>() {
                Ok(max) => self.billing.max_receipts = Some(max),
                Err(_) => warn!(value = %value, "Ignoring non-numeric SCOOP_MAX_RECEIPTS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "scoop", "counter")
            .map(|dirs| dirs.config_dir().join("scoop.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = CounterConfig::default();
        assert_eq!(config.shop.name, "Scoop Counter");
        assert_eq!(config.stock.scoops(Flavor::Vanilla), 20);
        assert_eq!(config.billing.max_receipts, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: CounterConfig = toml::from_str(
            r#"
            [stock]
            chocolate = 3

            [billing]
            max_receipts = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.stock.chocolate, 3);
        assert_eq!(config.stock.vanilla, 20);
        assert_eq!(config.shop.name, "Scoop Counter");
        assert_eq!(config.billing.max_receipts, Some(10));
    }

    #[test]
    fn test_config_validation() {
        let mut config = CounterConfig::default();

        config.shop.name = "   ".to_string();
        assert!(config.validate().is_err());

        config.shop.name = "Kiosk".to_string();
        config.billing.max_receipts = Some(0);
        assert!(config.validate().is_err());

        config.billing.max_receipts = Some(1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("SCOOP_SHOP_NAME", "Harbour Kiosk"),
            ("SCOOP_STOCK_STRAWBERRY", "7"),
            ("SCOOP_STOCK_VANILLA", "lots"),
            ("SCOOP_MAX_RECEIPTS", "50"),
        ]
        .into_iter()
        .collect();

        let mut config = CounterConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.shop.name, "Harbour Kiosk");
        assert_eq!(config.stock.strawberry, 7);
        assert_eq!(config.stock.vanilla, 20);
        assert_eq!(config.billing.max_receipts, Some(50));
    }

    #[test]
    fn test_toml_serialization() {
        let config = CounterConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[shop]"));
        assert!(toml_str.contains("[stock]"));

        let parsed: CounterConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("scoop-config-{}", uuid::Uuid::new_v4()));
        let path = dir.join("scoop.toml");

        let mut config = CounterConfig::default();
        config.stock.chocolate = 2;
        config.save(Some(path.clone())).unwrap();

        let loaded = CounterConfig::load(Some(path)).unwrap();
        assert_eq!(loaded.stock.chocolate, 2);

        std::fs::remove_dir_all(dir).unwrap();
    }

    fn write_config(contents: &str) -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir().join(format!("scoop-config-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("scoop.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let (dir, path) = write_config("[stock]\nchocolate = 4\n");

        let config = CounterConfig::load(Some(path)).unwrap();
        std::fs::remove_dir_all(dir).unwrap();

        assert_eq!(config.stock.chocolate, 4);
        assert_eq!(config.stock.strawberry, 20);
        assert_eq!(config.shop.name, "Scoop Counter");
    }

    #[test]
    fn test_load_validates_file() {
        let (dir, path) = write_config("[billing]\nmax_receipts = 0\n");

        let err = CounterConfig::load(Some(path)).unwrap_err();
        std::fs::remove_dir_all(dir).unwrap();

        assert!(matches!(err, CounterError::InvalidConfig(_)));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir()
            .join(format!("scoop-missing-{}", uuid::Uuid::new_v4()))
            .join("scoop.toml");

        let config = CounterConfig::load(Some(path)).unwrap();
        assert_eq!(config.shop.name, "Scoop Counter");
        assert_eq!(config.billing.max_receipts, None);
    }

    #[test]
    fn test_load_or_default_falls_back_on_invalid_file() {
        let (dir, path) = write_config("[shop]\nname = \"\"\n");

        let config = CounterConfig::load_or_default(Some(path));
        std::fs::remove_dir_all(dir).unwrap();

        assert_eq!(config, CounterConfig::default());
    }
}

//! # Demo Configuration
//!
//! Configuration for the cart demo.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (highest priority)                                    │
//! │     --tax-rate 0.0825                                                  │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     CART_DEMO_TAX_RATE=0.0825                                          │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/cart-demo/cart-demo.toml (Linux)                         │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     8% tax, the laptop / mouse / keyboard / monitor cart               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! Prices are money strings, parsed by `money_core`:
//! ```toml
//! tax_rate = 0.08
//! remove = ["Keyboard"]
//!
//! [[items]]
//! name = "Laptop"
//! description = "High-performance laptop"
//! price = "$1,299.99"
//! quantity = 1
//!
//! [[extra_items]]
//! name = "Mouse"
//! description = "Additional wireless mouse"
//! price = "$29.95"
//! ```

use std::path::{Path, PathBuf};

use money_core::Money;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cart::MAX_ITEM_QUANTITY;
use crate::error::{DemoError, DemoResult};

/// Environment variable overriding [`DemoConfig::tax_rate`].
pub const TAX_RATE_ENV: &str = "CART_DEMO_TAX_RATE";

const CONFIG_FILE_NAME: &str = "cart-demo.toml";

// =============================================================================
// Item Config
// =============================================================================

/// One product line to put in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Unit price, e.g. `"$1,299.99"`.
    pub price: Money,

    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl ItemConfig {
    fn new(name: &str, description: &str, cents: i64, quantity: u32) -> Self {
        ItemConfig {
            name: name.to_string(),
            description: description.to_string(),
            price: Money::from_cents(cents),
            quantity,
        }
    }
}

fn default_quantity() -> u32 {
    1
}

fn default_tax_rate() -> f64 {
    0.08
}

fn default_items() -> Vec<ItemConfig> {
    vec![
        ItemConfig::new("Laptop", "High-performance laptop", 129999, 1),
        ItemConfig::new("Mouse", "Wireless optical mouse", 2995, 2),
        ItemConfig::new("Keyboard", "Mechanical gaming keyboard", 14950, 1),
        ItemConfig::new("Monitor", "27-inch 4K display", 39900, 1),
    ]
}

fn default_extra_items() -> Vec<ItemConfig> {
    vec![ItemConfig::new("Mouse", "Additional wireless mouse", 2995, 1)]
}

fn default_remove() -> Vec<String> {
    vec!["Keyboard".to_string()]
}

// =============================================================================
// Demo Config
// =============================================================================

/// Complete demo configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Sales tax as a fraction (0.08 = 8%).
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,

    /// Product names removed before the final listing.
    #[serde(default = "default_remove")]
    pub remove: Vec<String>,

    /// Lines added at the start of the demo.
    #[serde(default = "default_items")]
    pub items: Vec<ItemConfig>,

    /// Lines added after the first listing; duplicates merge quantities.
    #[serde(default = "default_extra_items")]
    pub extra_items: Vec<ItemConfig>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            tax_rate: default_tax_rate(),
            remove: default_remove(),
            items: default_items(),
            extra_items: default_extra_items(),
        }
    }
}

impl DemoConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (an explicit path must exist; the platform default
    ///    path is optional)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> DemoResult<Self> {
        Self::load_with_tax_rate_override(config_path, std::env::var(TAX_RATE_ENV).ok())
    }

    /// [`DemoConfig::load`] with the `CART_DEMO_TAX_RATE` value passed in
    /// rather than read from the process environment.
    fn load_with_tax_rate_override(
        config_path: Option<PathBuf>,
        tax_rate_override: Option<String>,
    ) -> DemoResult<Self> {
        let mut config = match config_path {
            Some(path) if !path.exists() => return Err(DemoError::ConfigNotFound(path)),
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                path => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_tax_rate_override(tax_rate_override);
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document; missing keys fall back to defaults.
    pub fn from_toml_str(contents: &str) -> DemoResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn from_file(path: &Path) -> DemoResult<Self> {
        info!(?path, "Loading demo config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> DemoResult<()> {
        if !self.tax_rate.is_finite() || self.tax_rate < 0.0 {
            return Err(DemoError::InvalidConfig(format!(
                "tax_rate must be a non-negative number, got {}",
                self.tax_rate
            )));
        }

        for item in self.items.iter().chain(&self.extra_items) {
            if item.name.trim().is_empty() {
                return Err(DemoError::InvalidConfig("item name is required".into()));
            }

            if item.quantity == 0 || item.quantity > MAX_ITEM_QUANTITY {
                return Err(DemoError::InvalidConfig(format!(
                    "quantity for '{}' must be between 1 and {}, got {}",
                    item.name, MAX_ITEM_QUANTITY, item.quantity
                )));
            }
        }

        Ok(())
    }

    /// Applies the tax rate environment override; an unparsable value is
    /// logged and ignored.
    fn apply_tax_rate_override(&mut self, value: Option<String>) {
        if let Some(rate) = value {
            match rate.parse::<f64>() {
                Ok(parsed) => {
                    debug!(tax_rate = parsed, "Overriding tax rate from environment");
                    self.tax_rate = parsed;
                }
                Err(_) => warn!(value = %rate, "Ignoring unparsable {}", TAX_RATE_ENV),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "money", "cart-demo")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

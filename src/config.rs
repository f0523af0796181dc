//! Shop configuration
//!
//! The configuration is a TOML document compiled into the binary, so the
//! program reads no files or environment variables at runtime.

use crate::catalog::{Product, ProductCatalog};
use crate::error::{ShopError, ShopResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Embedded default configuration
pub const EMBEDDED_CONFIG: &str = include_str!("../assets/shop.toml");

fn default_title() -> String {
    "Online Shopping System".to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub struct ShopConfig {
    /// Heading printed above the menu
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Seed products loaded into the catalog at startup
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl LoggingConfig {
    fn default_level() -> String {
        "warn".to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            format: LogFormat::default(),
        }
    }
}

impl ShopConfig {
    /// Parses the embedded configuration.
    pub fn load() -> ShopResult<Self> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    /// Parses and validates a TOML configuration document.
    pub fn from_toml_str(source: &str) -> ShopResult<Self> {
        let config: ShopConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ShopResult<()> {
        let mut seen = HashSet::new();
        for product in &self.products {
            if product.id == 0 {
                return Err(ShopError::Config(format!(
                    "product '{}' uses reserved id 0",
                    product.name
                )));
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(ShopError::Config(format!(
                    "product {} has invalid price {}",
                    product.id, product.price
                )));
            }
            if !seen.insert(product.id) {
                return Err(ShopError::Config(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(())
    }

    /// Builds the startup catalog from the seed products
    pub fn catalog(&self) -> ProductCatalog {
        ProductCatalog::from_products(self.products.iter().cloned())
    }
}

// File: src/config.rs
// Purpose: Configuration parsing from order-form.toml

use crate::catalog::{Topping, ToppingCatalog};
use crate::schema::is_topping_id;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Order form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderFormConfig {
    #[serde(default)]
    pub transport: TransportConfig,

    /// Overrides the built-in topping list when non-empty
    #[serde(default)]
    pub toppings: Vec<Topping>,
}

/// Where and how orders are sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds (0 disables the timeout)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "http://localhost:9009/api/order".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TransportConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl OrderFormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Load configuration from default path (./order-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("order-form.toml")
    }

    /// Parse and check configuration text
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: OrderFormConfig =
            toml::from_str(content).context("Failed to parse order form config")?;
        config.check()?;

        Ok(config)
    }

    /// Topping catalog in effect: configured list, or the built-in one
    pub fn catalog(&self) -> ToppingCatalog {
        if self.toppings.is_empty() {
            ToppingCatalog::default()
        } else {
            ToppingCatalog::new(self.toppings.clone())
        }
    }

    fn check(&self) -> Result<()> {
        if self.transport.endpoint.trim().is_empty() {
            bail!("transport.endpoint must not be empty");
        }

        let mut seen = BTreeSet::new();
        for topping in &self.toppings {
            if !seen.insert(topping.id.as_str()) {
                bail!("topping id {:?} ({}) is listed more than once", topping.id, topping.label);
            }
            if !is_topping_id(&topping.id) {
                bail!(
                    "topping id {:?} ({}) must be a single digit 1-5",
                    topping.id,
                    topping.label
                );
            }
        }

        Ok(())
    }
}

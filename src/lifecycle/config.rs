//! # Configuration
//!
//! The desk is configured by a small JSON document. Every field is optional;
//! anything left out falls back to [`DeskConfig::default`].
//!
//! ```json
//! {
//!   "buffer_size": 32,
//!   "menu": [
//!     { "name": "Beer", "category": "Beer", "price": "2.00" },
//!     { "name": "Cola", "category": "Refreshments", "price": "1.75" }
//!   ]
//! }
//! ```
//!
//! Prices may be written as strings or as JSON numbers. The menu is checked
//! once at load time, so the desk itself never meets a malformed catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::model::{Catalog, MenuItem};

/// Highest unit price a menu item may carry.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Errors raised while loading or checking a [`DeskConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid menu: {0}")]
    InvalidMenu(String),

    #[error("Invalid buffer size: {0}")]
    InvalidBufferSize(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Capacity of the desk actor's request channel.
    pub buffer_size: usize,
    pub menu: Vec<MenuItem>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            menu: default_menu(),
        }
    }
}

/// The built-in menu.
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Beer", "Beer", Decimal::new(200, 2)),
        MenuItem::new("Cola", "Refreshments", Decimal::new(175, 2)),
    ]
}

impl DeskConfig {
    /// Reads and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading config");
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&raw)?;
        info!(path = %path.display(), items = config.menu.len(), "Config loaded");
        Ok(config)
    }

    /// Parses and validates a config document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::InvalidBufferSize(self.buffer_size));
        }
        if self.menu.is_empty() {
            return Err(ConfigError::InvalidMenu("menu has no items".into()));
        }

        let mut seen = HashSet::new();
        for item in &self.menu {
            if item.name.trim().is_empty() {
                return Err(ConfigError::InvalidMenu(format!(
                    "item in category {:?} has a blank name",
                    item.category
                )));
            }
            if item.category.trim().is_empty() {
                return Err(ConfigError::InvalidMenu(format!("{:?} has a blank category", item.name)));
            }
            if item.price.is_sign_negative() && !item.price.is_zero() {
                return Err(ConfigError::InvalidMenu(format!(
                    "{} has a negative price {}",
                    item.key(),
                    item.price
                )));
            }
            if item.price > MAX_PRICE {
                return Err(ConfigError::InvalidMenu(format!(
                    "{} costs {}, above the {} limit",
                    item.key(),
                    item.price,
                    MAX_PRICE
                )));
            }
            if !seen.insert(item.key()) {
                return Err(ConfigError::InvalidMenu(format!("{} is listed twice", item.key())));
            }
        }
        Ok(())
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.menu.clone())
    }
}

//! # Configuration Loading
//!
//! Agent settings read from TOML. Every field is optional; missing fields
//! take the defaults below.
//!
//! ```toml
//! store_capacity = 4096
//! validation = "permissive"
//!
//! [threshold]
//! enabled = true
//! product = "IBM"
//! below = "100"
//! quantity = 1000
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::engine::ThresholdPolicy;
use crate::error::{ConfigError, InvalidOrderError};

/// Default pre-allocated store capacity
pub const DEFAULT_STORE_CAPACITY: usize = 1024;

/// Root configuration schema for the agent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentConfig {
    /// Pending order slots to pre-allocate
    pub store_capacity: usize,

    /// How new orders are checked before entering the store
    pub validation: OrderValidation,

    /// Fixed buy-below-threshold rule
    pub threshold: ThresholdPolicy,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            store_capacity: DEFAULT_STORE_CAPACITY,
            validation: OrderValidation::default(),
            threshold: ThresholdPolicy::default(),
        }
    }
}

impl AgentConfig {
    /// Load configuration from file path
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&config_str)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

/// Order admission policy.
///
/// `Strict` rejects orders that can never be meaningful (zero quantity, zero
/// limit, empty product). `Permissive` stores whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderValidation {
    #[default]
    Strict,
    Permissive,
}

impl OrderValidation {
    /// Check an order's fields under this policy
    pub fn check(self, product: &str, quantity: u64, limit: u64) -> Result<(), InvalidOrderError> {
        if self == OrderValidation::Permissive {
            return Ok(());
        }
        if product.is_empty() {
            return Err(InvalidOrderError::EmptyProduct);
        }
        if quantity == 0 {
            return Err(InvalidOrderError::ZeroQuantity);
        }
        if limit == 0 {
            return Err(InvalidOrderError::ZeroLimit);
        }
        Ok(())
    }
}

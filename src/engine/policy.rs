//! Threshold buy policy.
//!
//! A fixed rule that buys a set quantity of one product whenever a tick for
//! that product prints strictly below a threshold. It ignores the order
//! store entirely and fires on every qualifying tick.

use serde::Deserialize;

use crate::types::price::{deserialize_fixed, SCALE};
use crate::types::PriceTick;

/// Default threshold: 100.00000000
pub const DEFAULT_THRESHOLD: u64 = 100 * SCALE;

/// Default quantity bought when the threshold is crossed
pub const DEFAULT_QUANTITY: u64 = 1000;

/// Buy `quantity` of `product` whenever its price is below `below`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThresholdPolicy {
    /// Disabled policies never fire
    pub enabled: bool,

    pub product: String,

    /// Threshold in fixed-point (scaled by 10^8); the tick must be strictly below
    #[serde(deserialize_with = "deserialize_fixed")]
    pub below: u64,

    pub quantity: u64,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            product: "IBM".to_string(),
            below: DEFAULT_THRESHOLD,
            quantity: DEFAULT_QUANTITY,
        }
    }
}

impl ThresholdPolicy {
    pub fn new(product: impl Into<String>, below: u64, quantity: u64) -> Self {
        Self {
            enabled: true,
            product: product.into(),
            below,
            quantity,
        }
    }

    /// A policy that never fires
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Whether `tick` should trigger a buy
    pub fn triggers(&self, tick: &PriceTick) -> bool {
        self.enabled && tick.product == self.product && tick.price < self.below
    }
}

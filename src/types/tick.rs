//! Price tick: a single observed price for a product.

use crate::types::price::to_fixed;

/// A single price update delivered by the feed.
///
/// Ticks are ephemeral: the agent evaluates them and keeps nothing but a
/// sequence counter. Arrival order is the only timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTick {
    /// Product identifier
    pub product: String,

    /// Observed price in fixed-point (scaled by 10^8)
    pub price: u64,
}

impl PriceTick {
    /// Create a tick from an already-scaled price
    pub fn new(product: impl Into<String>, price: u64) -> Self {
        Self {
            product: product.into(),
            price,
        }
    }

    /// Create a tick from a decimal price string
    ///
    /// ```
    /// use limit_order_agent::types::PriceTick;
    ///
    /// let tick = PriceTick::parse("IBM", "95.5").unwrap();
    /// assert_eq!(tick.price, 9_550_000_000);
    /// assert!(PriceTick::parse("IBM", "n/a").is_none());
    /// ```
    pub fn parse(product: impl Into<String>, price: &str) -> Option<Self> {
        Some(Self::new(product, to_fixed(price)?))
    }
}

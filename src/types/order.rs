//! Order types for the limit order agent.
//!
//! ## Fixed-Point Representation
//!
//! Limit prices are stored as u64 scaled by 10^8 (see [`crate::types::price`]).
//! Quantities are whole units.
//!
//! ## SSZ Serialization
//!
//! [`Order`] carries a variable-length product string, so it is not encoded
//! directly. [`OrderRecord`] is its fixed-size SSZ image, with the product
//! replaced by its SHA-256 digest.

use std::fmt;

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::types::price::from_fixed_trimmed;
use crate::types::PriceTick;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
///
/// Represented as u8 for SSZ compatibility:
/// - Buy = 0
/// - Sell = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy order - executes when the market trades at or below the limit
    #[default]
    Buy,
    /// Sell order - executes when the market trades at or above the limit
    Sell,
}

impl Side {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Buy),
            1 => Some(Side::Sell),
            _ => None,
        }
    }

    /// Lowercase name as passed to execution clients
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// OrderState enum
// ============================================================================

/// Lifecycle state of an order
///
/// `Pending` is the only state an order can have while it sits in the store.
/// `Executed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderState {
    #[default]
    Pending,
    Executed,
    Cancelled,
}

impl OrderState {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            OrderState::Pending => 0,
            OrderState::Executed => 1,
            OrderState::Cancelled => 2,
        }
    }

    /// Whether the order can no longer change state
    pub fn is_terminal(self) -> bool {
        !matches!(self, OrderState::Pending)
    }
}

// ============================================================================
// OrderId
// ============================================================================

/// Unique order identifier, assigned by the store on insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(pub u64);

impl OrderId {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A limit order waiting for a price tick.
///
/// ## Example
///
/// ```
/// use limit_order_agent::types::{Order, OrderId, OrderState, Side};
/// use limit_order_agent::types::price::from_units;
///
/// // Sell 500 IBM once the price reaches 105
/// let order = Order::new(OrderId(1), Side::Sell, "IBM", 500, from_units(105).unwrap());
/// assert_eq!(order.state(), OrderState::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Unique order identifier (assigned by the store)
    pub id: OrderId,

    /// Buy or sell
    pub side: Side,

    /// Product identifier, compared byte-for-byte with tick products
    pub product: String,

    /// Quantity in whole units, always executed in full
    pub quantity: u64,

    /// Limit price in fixed-point (scaled by 10^8)
    pub limit: u64,

    state: OrderState,
}

impl Order {
    /// Create a new pending limit order
    pub fn new(id: OrderId, side: Side, product: impl Into<String>, quantity: u64, limit: u64) -> Self {
        Self {
            id,
            side,
            product: product.into(),
            quantity,
            limit,
            state: OrderState::Pending,
        }
    }

    /// Current lifecycle state
    #[inline]
    pub fn state(&self) -> OrderState {
        self.state
    }

    /// Check if the order is still waiting for a tick
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.state == OrderState::Pending
    }

    /// Check whether a trade at `price` satisfies this order's limit
    ///
    /// - Buy: `price <= limit`
    /// - Sell: `price >= limit`
    #[inline]
    pub fn limit_satisfied(&self, price: u64) -> bool {
        match self.side {
            Side::Buy => price <= self.limit,
            Side::Sell => price >= self.limit,
        }
    }

    /// Check whether `tick` triggers this order (same product, limit satisfied)
    ///
    /// ```
    /// use limit_order_agent::types::{Order, OrderId, PriceTick, Side};
    /// use limit_order_agent::types::price::from_units;
    ///
    /// let buy = Order::new(OrderId(1), Side::Buy, "IBM", 100, from_units(100).unwrap());
    /// assert!(buy.is_triggered_by(&PriceTick::new("IBM", from_units(99).unwrap())));
    /// assert!(!buy.is_triggered_by(&PriceTick::new("IBM", from_units(101).unwrap())));
    /// assert!(!buy.is_triggered_by(&PriceTick::new("MSFT", from_units(50).unwrap())));
    /// ```
    pub fn is_triggered_by(&self, tick: &PriceTick) -> bool {
        self.product == tick.product && self.limit_satisfied(tick.price)
    }

    /// Fixed-size SSZ image of this order
    pub fn to_record(&self) -> OrderRecord {
        OrderRecord {
            id: self.id.0,
            side_raw: self.side.to_u8(),
            state_raw: self.state.to_u8(),
            product_digest: product_digest(&self.product),
            quantity: self.quantity,
            limit: self.limit,
        }
    }

    pub(crate) fn into_executed(mut self) -> Self {
        self.state = OrderState::Executed;
        self
    }

    pub(crate) fn into_cancelled(mut self) -> Self {
        self.state = OrderState::Cancelled;
        self
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} @ {}",
            self.id,
            self.side,
            self.quantity,
            self.product,
            from_fixed_trimmed(self.limit)
        )
    }
}

// ============================================================================
// OrderRecord
// ============================================================================

/// Fixed-size SSZ record of an order.
///
/// ## SSZ Layout
///
/// 8 (id) + 1 (side) + 1 (state) + 32 (product digest) + 8 (quantity)
/// + 8 (limit) = 58 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct OrderRecord {
    pub id: u64,
    pub side_raw: u8,
    pub state_raw: u8,
    pub product_digest: [u8; 32],
    pub quantity: u64,
    pub limit: u64,
}

/// SHA-256 digest of a product identifier
pub fn product_digest(product: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(product.as_bytes());
    let result = hasher.finalize();

    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

// ============================================================================
// Unit Tests
// ============================================================================

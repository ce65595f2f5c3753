//! Core data types for the limit order agent
//!
//! ## Types
//!
//! - [`Order`]: A pending (or terminal) limit order
//! - [`Side`]: Buy or Sell
//! - [`OrderState`]: Pending, Executed or Cancelled
//! - [`PriceTick`]: A single price observation
//! - [`TickReceipt`] / [`TickOutcome`]: Result of processing a tick
//!
//! ## Fixed-Point Arithmetic
//!
//! All prices are stored as `u64` scaled by 10^8.
//! Example: 105.25 is stored as 10_525_000_000u64

mod order;
mod receipt;
mod tick;
pub mod price;

pub use order::{product_digest, Order, OrderId, OrderRecord, OrderState, Side};
pub use receipt::{TickOutcome, TickReceipt};
pub use tick::PriceTick;

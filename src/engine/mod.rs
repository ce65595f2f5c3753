//! Matching engine module for the limit order agent.
//!
//! ## Matching Rules
//!
//! - **Buy orders** execute when `tick.price <= limit`
//! - **Sell orders** execute when `tick.price >= limit`
//! - Only orders for the tick's product are considered
//! - Orders execute in full; there are no partial fills
//!
//! The [`ThresholdPolicy`] is a separate rule applied through
//! [`LimitOrderAgent::handle_market_data`]; it never touches pending orders.
//!
//! ## Example
//!
//! ```
//! use limit_order_agent::client::RecordingClient;
//! use limit_order_agent::engine::LimitOrderAgent;
//! use limit_order_agent::types::{PriceTick, Side};
//! use limit_order_agent::types::price::from_units;
//!
//! let mut agent = LimitOrderAgent::new(RecordingClient::new());
//! agent.add_order(Side::Sell, "IBM", 500, from_units(105).unwrap()).unwrap();
//!
//! let outcome = agent.price_tick(&PriceTick::new("IBM", from_units(105).unwrap())).unwrap();
//!
//! assert_eq!(outcome.executed.len(), 1);
//! assert!(agent.store().is_empty());
//! ```

pub mod agent;
pub mod policy;

pub use agent::LimitOrderAgent;
pub use policy::ThresholdPolicy;

//! # Limit Order Agent
//!
//! Holds pending limit orders and executes them through an external
//! execution client when a price tick satisfies their limit.
//!
//! ## Architecture
//!
//! - **Types**: Order, PriceTick, TickReceipt
//! - **Store**: slab-backed pending order store
//! - **Engine**: tick matching plus the threshold buy policy
//! - **Client**: the execution capability the engine calls into
//!
//! ## Design Principles
//!
//! 1. **No Floating Point**: prices are fixed-point (10^8 scaling)
//! 2. **Snapshot then Mutate**: matched ids are collected before removal
//! 3. **Synchronous Execution**: one tick is fully processed before the next
//! 4. **Deterministic Receipts**: every tick reports a state root of the
//!    pending orders

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, PriceTick, TickReceipt
pub mod types;

/// Pending order storage
pub mod store;

/// Tick matching and the threshold policy
pub mod engine;

/// Execution client trait and implementations
pub mod client;

/// TOML configuration
pub mod config;

/// Error taxonomy
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use client::{ExecutionClient, LoggingClient, RecordingClient};
pub use config::{AgentConfig, OrderValidation};
pub use engine::{LimitOrderAgent, ThresholdPolicy};
pub use error::{AgentError, ConfigError, ExecutionError, InvalidOrderError};
pub use store::OrderStore;
pub use types::{Order, OrderId, OrderState, PriceTick, Side, TickOutcome, TickReceipt};

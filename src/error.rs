//! Error types for the limit order agent
//!
//! Error taxonomy using thiserror

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Order, OrderId};

/// Top-level agent error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgentError {
    #[error("Invalid order: {0}")]
    InvalidOrder(#[from] InvalidOrderError),

    /// The execution client refused a matched order. The order is still
    /// pending and no later match in the same tick was attempted.
    #[error("Execution failed for order {order}: {source}")]
    ExecutionFailed {
        order: Box<Order>,
        source: ExecutionError,
    },

    #[error("Threshold policy execution failed (buy {quantity} {product}): {source}")]
    PolicyExecutionFailed {
        product: String,
        quantity: u64,
        source: ExecutionError,
    },

    #[error("Failed to encode order {order_id}: {reason}")]
    Encoding { order_id: OrderId, reason: String },
}

/// Order validation errors (strict validation only)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidOrderError {
    #[error("quantity must be positive")]
    ZeroQuantity,

    #[error("limit price must be positive")]
    ZeroLimit,

    #[error("product identifier must not be empty")]
    EmptyProduct,
}

/// Failure reported by an execution client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("order rejected: {0}")]
    Rejected(String),

    #[error("execution venue unavailable: {0}")]
    Unavailable(String),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

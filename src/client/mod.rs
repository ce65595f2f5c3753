//! Execution clients.
//!
//! The agent never fills orders itself: it hands every matched order to an
//! [`ExecutionClient`] and treats the call as the fill. Implementations:
//!
//! - [`LoggingClient`]: reports each execution through `tracing`
//! - [`RecordingClient`]: keeps every call in memory, optionally failing
//! - [`NoopClient`]: accepts everything silently

mod logging;
mod recording;

pub use logging::LoggingClient;
pub use recording::{ExecutionCall, RecordingClient};

use crate::error::ExecutionError;
use crate::types::Side;

/// Capability to submit an order to an execution venue.
///
/// Calls are synchronous. A returned error aborts the tick that issued it.
pub trait ExecutionClient {
    /// Execute `amount` units of `product` on `side`.
    fn execute_order(&mut self, product: &str, amount: u64, side: Side) -> Result<(), ExecutionError>;
}

impl<C: ExecutionClient + ?Sized> ExecutionClient for &mut C {
    fn execute_order(&mut self, product: &str, amount: u64, side: Side) -> Result<(), ExecutionError> {
        (**self).execute_order(product, amount, side)
    }
}

impl<C: ExecutionClient + ?Sized> ExecutionClient for Box<C> {
    fn execute_order(&mut self, product: &str, amount: u64, side: Side) -> Result<(), ExecutionError> {
        (**self).execute_order(product, amount, side)
    }
}

/// Client that accepts every order and does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClient;

impl ExecutionClient for NoopClient {
    fn execute_order(&mut self, _product: &str, _amount: u64, _side: Side) -> Result<(), ExecutionError> {
        Ok(())
    }
}

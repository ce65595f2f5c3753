//! In-memory client that records every call.

use crate::client::ExecutionClient;
use crate::error::ExecutionError;
use crate::types::Side;

/// One `execute_order` call as seen by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionCall {
    pub product: String,
    pub amount: u64,
    pub side: Side,
}

impl ExecutionCall {
    pub fn new(product: impl Into<String>, amount: u64, side: Side) -> Self {
        Self {
            product: product.into(),
            amount,
            side,
        }
    }
}

/// Client that records calls in memory.
///
/// Can be told to reject every order for one product, or to start rejecting
/// after a number of successful calls. Rejected calls are recorded too.
#[derive(Debug, Default, Clone)]
pub struct RecordingClient {
    calls: Vec<ExecutionCall>,
    fail_product: Option<String>,
    fail_after: Option<usize>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every order for `product`
    pub fn failing_on(product: impl Into<String>) -> Self {
        Self {
            fail_product: Some(product.into()),
            ..Self::default()
        }
    }

    /// Accept the first `successes` calls, reject all later ones
    pub fn failing_after(successes: usize) -> Self {
        Self {
            fail_after: Some(successes),
            ..Self::default()
        }
    }

    /// Every call received so far, rejected ones included
    pub fn calls(&self) -> &[ExecutionCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<ExecutionCall> {
        self.calls
    }

    /// Stop rejecting
    pub fn heal(&mut self) {
        self.fail_product = None;
        self.fail_after = None;
    }

    fn should_reject(&self, product: &str) -> bool {
        let product_blocked = self.fail_product.as_deref() == Some(product);
        let budget_spent = self.fail_after.is_some_and(|n| self.calls.len() >= n);
        product_blocked || budget_spent
    }
}

impl ExecutionClient for RecordingClient {
    fn execute_order(&mut self, product: &str, amount: u64, side: Side) -> Result<(), ExecutionError> {
        let reject = self.should_reject(product);
        self.calls.push(ExecutionCall::new(product, amount, side));

        if reject {
            return Err(ExecutionError::Rejected(format!("{} {} {}", side, amount, product)));
        }
        Ok(())
    }
}

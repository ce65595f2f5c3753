//! Client that reports executions through `tracing`.

use tracing::info;

use crate::client::ExecutionClient;
use crate::error::ExecutionError;
use crate::types::Side;

/// Execution client for demos and dry runs: every order is logged and
/// reported as filled.
#[derive(Debug, Default, Clone)]
pub struct LoggingClient {
    executed: u64,
}

impl LoggingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of orders reported so far
    pub fn executed(&self) -> u64 {
        self.executed
    }
}

impl ExecutionClient for LoggingClient {
    fn execute_order(&mut self, product: &str, amount: u64, side: Side) -> Result<(), ExecutionError> {
        self.executed += 1;
        info!("Executed order: {} {} shares of {}", side, amount, product);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_executions() {
        let mut client = LoggingClient::new();
        client.execute_order("IBM", 500, Side::Sell).unwrap();
        client.execute_order("IBM", 1000, Side::Buy).unwrap();

        assert_eq!(client.executed(), 2);
    }
}

//! The limit order agent: pending orders plus an execution client.
//!
//! ## Tick Processing
//!
//! 1. Collect the ids of pending orders for the tick's product
//! 2. Keep those whose limit the tick price satisfies
//! 3. For each, call the execution client, then remove the order
//!
//! Ids are collected before anything is removed, so the store is never
//! mutated while it is being iterated.
//!
//! ## Failure
//!
//! A client error ends the tick at the failing order. Orders executed
//! earlier in the same tick stay executed; the failing order and every
//! later match stay pending and are retried by the next qualifying tick.

use tracing::{debug, info, warn};

use crate::client::ExecutionClient;
use crate::config::{AgentConfig, OrderValidation};
use crate::engine::ThresholdPolicy;
use crate::error::AgentError;
use crate::store::OrderStore;
use crate::types::{Order, OrderId, PriceTick, Side, TickOutcome, TickReceipt};

/// Limit order agent.
///
/// Single-threaded: every operation takes `&mut self`, so a tick is fully
/// processed before the next one can be submitted.
#[derive(Debug)]
pub struct LimitOrderAgent<C: ExecutionClient> {
    store: OrderStore,
    client: C,
    validation: OrderValidation,
    threshold: ThresholdPolicy,
    tick_seq: u64,
    /// State root of the store, cleared whenever the store changes
    cached_root: Option<[u8; 32]>,
}

impl<C: ExecutionClient> LimitOrderAgent<C> {
    /// Create an agent with the default configuration
    pub fn new(client: C) -> Self {
        Self::with_config(client, &AgentConfig::default())
    }

    /// Create an agent from a configuration
    pub fn with_config(client: C, config: &AgentConfig) -> Self {
        Self {
            store: OrderStore::with_capacity(config.store_capacity),
            client,
            validation: config.validation,
            threshold: config.threshold.clone(),
            tick_seq: 0,
            cached_root: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Pending orders
    #[inline]
    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    #[inline]
    pub fn client(&self) -> &C {
        &self.client
    }

    #[inline]
    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn into_client(self) -> C {
        self.client
    }

    #[inline]
    pub fn threshold(&self) -> &ThresholdPolicy {
        &self.threshold
    }

    /// Number of ticks passed to `price_tick` so far
    #[inline]
    pub fn tick_seq(&self) -> u64 {
        self.tick_seq
    }

    // ========================================================================
    // Order Management
    // ========================================================================

    /// Add a pending limit order
    ///
    /// Under strict validation, zero quantity, zero limit and empty product
    /// are rejected and nothing is stored.
    pub fn add_order(
        &mut self,
        side: Side,
        product: impl Into<String>,
        quantity: u64,
        limit: u64,
    ) -> Result<OrderId, AgentError> {
        let product = product.into();
        self.validation.check(&product, quantity, limit)?;

        let id = self.store.add(side, product, quantity, limit);
        self.cached_root = None;
        debug!(order_id = id.get(), %side, quantity, limit, "order added");
        Ok(id)
    }

    /// Cancel a pending order
    ///
    /// Returns the order in state `Cancelled`, or `None` if it is not
    /// pending (unknown, already executed or already cancelled).
    pub fn cancel_order(&mut self, id: OrderId) -> Option<Order> {
        let cancelled = self.store.remove(id)?.into_cancelled();
        self.cached_root = None;
        debug!(order_id = id.get(), "order cancelled");
        Some(cancelled)
    }

    // ========================================================================
    // Market Data
    // ========================================================================

    /// Execute every pending order the tick satisfies
    ///
    /// Orders are executed in store iteration order, which is unspecified.
    pub fn price_tick(&mut self, tick: &PriceTick) -> Result<TickOutcome, AgentError> {
        self.tick_seq += 1;

        let candidates = self.store.ids_for_product(&tick.product);
        let evaluated = candidates.len() as u64;
        let matched: Vec<OrderId> = candidates
            .into_iter()
            .filter(|&id| self.store.get(id).is_some_and(|order| order.limit_satisfied(tick.price)))
            .collect();

        let mut executed = Vec::with_capacity(matched.len());
        for id in matched {
            let Some(order) = self.store.get(id) else {
                continue;
            };

            if let Err(source) = self.client.execute_order(&order.product, order.quantity, order.side) {
                warn!(order_id = id.get(), error = %source, "execution failed, abandoning tick");
                return Err(AgentError::ExecutionFailed {
                    order: Box::new(order.clone()),
                    source,
                });
            }

            if let Some(order) = self.store.remove(id) {
                self.cached_root = None;
                info!(
                    order_id = id.get(),
                    side = %order.side,
                    quantity = order.quantity,
                    product = %order.product,
                    "order executed"
                );
                executed.push(order.into_executed());
            }
        }

        let state_root = self.state_root()?;
        let receipt = TickReceipt::new(self.tick_seq, evaluated, executed.len() as u64, state_root);

        Ok(TickOutcome { executed, receipt })
    }

    /// State root of the pending orders, recomputed only after a change
    pub fn state_root(&mut self) -> Result<[u8; 32], AgentError> {
        if let Some(root) = self.cached_root {
            return Ok(root);
        }
        let root = self.store.compute_state_root()?;
        self.cached_root = Some(root);
        Ok(root)
    }

    /// Apply the threshold policy to a tick
    ///
    /// Returns `true` when the policy fired. The order store is not touched.
    pub fn handle_market_data(&mut self, tick: &PriceTick) -> Result<bool, AgentError> {
        if !self.threshold.triggers(tick) {
            return Ok(false);
        }

        let policy = &self.threshold;
        self.client
            .execute_order(&policy.product, policy.quantity, Side::Buy)
            .map_err(|source| {
                warn!(product = %policy.product, error = %source, "threshold buy failed");
                AgentError::PolicyExecutionFailed {
                    product: policy.product.clone(),
                    quantity: policy.quantity,
                    source,
                }
            })?;

        info!(product = %policy.product, quantity = policy.quantity, price = tick.price, "threshold buy issued");
        Ok(true)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ExecutionCall, RecordingClient};
    use crate::error::{ExecutionError, InvalidOrderError};
    use crate::types::price::from_units;
    use crate::types::OrderState;

    fn units(n: u64) -> u64 {
        from_units(n).unwrap()
    }

    fn tick(product: &str, price: u64) -> PriceTick {
        PriceTick::new(product, units(price))
    }

    fn agent() -> LimitOrderAgent<RecordingClient> {
        LimitOrderAgent::new(RecordingClient::new())
    }

    #[test]
    fn test_sell_executes_at_limit() {
        let mut agent = agent();
        let id = agent.add_order(Side::Sell, "IBM", 500, units(105)).unwrap();

        let outcome = agent.price_tick(&tick("IBM", 105)).unwrap();

        assert_eq!(outcome.executed_count(), 1);
        assert_eq!(outcome.executed[0].id, id);
        assert_eq!(outcome.executed[0].state(), OrderState::Executed);
        assert!(!agent.store().contains(id));
        assert_eq!(agent.client().calls(), &[ExecutionCall::new("IBM", 500, Side::Sell)]);
    }

    #[test]
    fn test_buy_above_limit_stays_pending() {
        let mut agent = agent();
        let id = agent.add_order(Side::Buy, "IBM", 100, units(100)).unwrap();

        let outcome = agent.price_tick(&tick("IBM", 101)).unwrap();

        assert!(outcome.executed.is_empty());
        assert_eq!(outcome.receipt.orders_evaluated, 1);
        assert!(agent.store().contains(id));
        assert!(agent.client().calls().is_empty());
    }

    #[test]
    fn test_executed_order_not_retriggered() {
        let mut agent = agent();
        agent.add_order(Side::Buy, "IBM", 100, units(100)).unwrap();

        agent.price_tick(&tick("IBM", 90)).unwrap();
        let second = agent.price_tick(&tick("IBM", 80)).unwrap();

        assert!(second.executed.is_empty());
        assert_eq!(agent.client().calls().len(), 1);
    }

    #[test]
    fn test_cancel_then_tick() {
        let mut agent = agent();
        let id = agent.add_order(Side::Buy, "IBM", 100, units(100)).unwrap();

        let cancelled = agent.cancel_order(id).unwrap();
        assert_eq!(cancelled.state(), OrderState::Cancelled);
        assert!(agent.cancel_order(id).is_none());

        agent.price_tick(&tick("IBM", 50)).unwrap();
        assert!(agent.client().calls().is_empty());
    }

    #[test]
    fn test_strict_validation_rejects() {
        let mut agent = agent();

        let err = agent.add_order(Side::Buy, "IBM", 0, units(100)).unwrap_err();
        assert_eq!(err, AgentError::InvalidOrder(InvalidOrderError::ZeroQuantity));
        assert!(agent.store().is_empty());
    }

    #[test]
    fn test_permissive_validation_accepts_zero_limit() {
        let config = AgentConfig {
            validation: OrderValidation::Permissive,
            ..AgentConfig::default()
        };
        let mut agent = LimitOrderAgent::with_config(RecordingClient::new(), &config);

        // A zero-limit sell is satisfied by any tick
        agent.add_order(Side::Sell, "IBM", 0, 0).unwrap();
        let outcome = agent.price_tick(&tick("IBM", 0)).unwrap();

        assert_eq!(outcome.executed_count(), 1);
        assert_eq!(agent.client().calls(), &[ExecutionCall::new("IBM", 0, Side::Sell)]);
    }

    #[test]
    fn test_failure_leaves_order_pending() {
        let mut agent = LimitOrderAgent::new(RecordingClient::failing_on("IBM"));
        let id = agent.add_order(Side::Sell, "IBM", 500, units(105)).unwrap();

        let err = agent.price_tick(&tick("IBM", 110)).unwrap_err();

        match err {
            AgentError::ExecutionFailed { order, source } => {
                assert_eq!(order.id, id);
                assert_eq!(order.state(), OrderState::Pending);
                assert!(matches!(source, ExecutionError::Rejected(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(agent.store().contains(id));

        // Retried once the client recovers
        agent.client_mut().heal();
        let outcome = agent.price_tick(&tick("IBM", 110)).unwrap();
        assert_eq!(outcome.executed_count(), 1);
        assert!(agent.store().is_empty());
    }

    #[test]
    fn test_threshold_policy_fires_independently() {
        let mut agent = agent();
        let id = agent.add_order(Side::Sell, "IBM", 500, units(105)).unwrap();

        assert!(agent.handle_market_data(&tick("IBM", 95)).unwrap());
        assert!(!agent.handle_market_data(&tick("IBM", 100)).unwrap());

        assert_eq!(agent.client().calls(), &[ExecutionCall::new("IBM", 1000, Side::Buy)]);
        assert!(agent.store().contains(id));
        assert_eq!(agent.tick_seq(), 0);
    }

    #[test]
    fn test_threshold_policy_failure() {
        let mut agent = LimitOrderAgent::new(RecordingClient::failing_on("IBM"));

        let err = agent.handle_market_data(&tick("IBM", 95)).unwrap_err();
        assert!(matches!(
            err,
            AgentError::PolicyExecutionFailed { ref product, quantity: 1000, .. } if product == "IBM"
        ));
    }

    #[test]
    fn test_cached_root_tracks_store() {
        let mut agent = agent();
        let empty = agent.state_root().unwrap();

        let id = agent.add_order(Side::Buy, "IBM", 100, units(100)).unwrap();
        let one = agent.state_root().unwrap();
        assert_ne!(empty, one);
        assert_eq!(one, agent.store().compute_state_root().unwrap());

        agent.cancel_order(id);
        assert_eq!(agent.state_root().unwrap(), empty);
    }

    #[test]
    fn test_tick_seq_counts_ticks() {
        let mut agent = agent();

        let first = agent.price_tick(&tick("IBM", 1)).unwrap();
        let second = agent.price_tick(&tick("MSFT", 1)).unwrap();

        assert_eq!(first.receipt.tick_seq, 1);
        assert_eq!(second.receipt.tick_seq, 2);
        assert_eq!(agent.tick_seq(), 2);
    }
}

//! Tick receipt: summary of one `price_tick` call.
//!
//! The receipt carries the state root of the pending order set after the tick
//! so two agents fed the same orders and ticks can be compared byte for byte.

use ssz_rs::prelude::*;

use crate::types::Order;

/// Summary of a processed tick.
///
/// ## State Root
///
/// The 32-byte state root is a SHA-256 hash over the SSZ records of every
/// order still pending after the tick (see
/// [`OrderStore::compute_state_root`](crate::store::OrderStore::compute_state_root)).
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct TickReceipt {
    /// Sequence number of the tick (first tick = 1)
    pub tick_seq: u64,

    /// Pending orders whose product matched the tick
    pub orders_evaluated: u64,

    /// Orders executed and removed by this tick
    pub orders_executed: u64,

    /// State root of the pending order set after the tick
    pub state_root: [u8; 32],
}

impl TickReceipt {
    pub fn new(tick_seq: u64, orders_evaluated: u64, orders_executed: u64, state_root: [u8; 32]) -> Self {
        Self {
            tick_seq,
            orders_evaluated,
            orders_executed,
            state_root,
        }
    }

    /// Hex rendering of the state root
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }
}

/// Everything a tick produced: the executed orders and the receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    /// Orders executed by this tick, in execution order, state `Executed`
    pub executed: Vec<Order>,

    pub receipt: TickReceipt,
}

impl TickOutcome {
    /// Number of orders this tick executed
    pub fn executed_count(&self) -> usize {
        self.executed.len()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

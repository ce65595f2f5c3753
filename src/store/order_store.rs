//! Pending order store.
//!
//! ## Architecture
//!
//! - **Slab**: Pre-allocated storage for O(1) insert and remove
//! - **HashMap**: Order ID to slab key mapping for O(1) lookup and cancel
//!
//! There are no price levels: the agent checks every pending order of a
//! product against each tick, so the store only needs cheap membership and
//! iteration.
//!
//! ## Iteration Order
//!
//! Iteration follows slab keys. Keys are reused after removal, so the order
//! in which pending orders are visited is unrelated to insertion order and
//! must not be relied upon.
//!
//! ## Example
//!
//! ```
//! use limit_order_agent::store::OrderStore;
//! use limit_order_agent::types::Side;
//! use limit_order_agent::types::price::from_units;
//!
//! let mut store = OrderStore::with_capacity(16);
//! let id = store.add(Side::Sell, "IBM", 500, from_units(105).unwrap());
//!
//! assert!(store.contains(id));
//! assert_eq!(store.len(), 1);
//!
//! store.remove(id);
//! assert!(store.is_empty());
//! ```

use std::collections::HashMap;

use sha2::{Digest, Sha256};
use slab::Slab;

use crate::error::AgentError;
use crate::types::{Order, OrderId, Side};

/// Store of pending limit orders
#[derive(Debug)]
pub struct OrderStore {
    /// Pre-allocated order storage
    orders: Slab<Order>,

    /// Order ID to slab key mapping
    index: HashMap<OrderId, usize>,

    /// Next order ID (ids start at 1 and are never reused)
    next_order_id: u64,
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            orders: Slab::new(),
            index: HashMap::new(),
            next_order_id: 1,
        }
    }

    /// Create a store with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            orders: Slab::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            next_order_id: 1,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    #[inline]
    pub fn capacity(&self) -> usize {
        self.orders.capacity()
    }

    /// Number of pending orders
    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the next order ID without allocating it
    #[inline]
    pub fn peek_next_order_id(&self) -> OrderId {
        OrderId(self.next_order_id)
    }

    // ========================================================================
    // Order Management
    // ========================================================================

    /// Create a pending order, assign it a fresh id and store it
    ///
    /// No validation happens here; callers that want quantity or limit
    /// checks apply them before calling `add`.
    pub fn add(&mut self, side: Side, product: impl Into<String>, quantity: u64, limit: u64) -> OrderId {
        let id = OrderId(self.next_order_id);
        self.next_order_id += 1;

        let key = self.orders.insert(Order::new(id, side, product, quantity, limit));
        self.index.insert(id, key);

        id
    }

    /// Remove an order by id
    ///
    /// Returns the removed order, or `None` if no such order is pending.
    /// Removing an absent id is not an error.
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        let key = self.index.remove(&id)?;
        Some(self.orders.remove(key))
    }

    /// Get a pending order by id
    #[inline]
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.index.get(&id).and_then(|&key| self.orders.get(key))
    }

    /// Check if an order is pending
    #[inline]
    pub fn contains(&self, id: OrderId) -> bool {
        self.index.contains_key(&id)
    }

    /// Iterate pending orders (unspecified order)
    pub fn iter(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter().map(|(_, order)| order)
    }

    /// Owned copy of every pending order
    pub fn snapshot(&self) -> Vec<Order> {
        self.iter().cloned().collect()
    }

    /// Ids of pending orders for `product`, in iteration order
    pub fn ids_for_product(&self, product: &str) -> Vec<OrderId> {
        self.iter()
            .filter(|order| order.product == product)
            .map(|order| order.id)
            .collect()
    }

    /// Remove every pending order. Id allocation continues where it was.
    pub fn clear(&mut self) {
        self.orders.clear();
        self.index.clear();
    }

    // ========================================================================
    // State Root
    // ========================================================================

    /// SHA-256 over the SSZ records of all pending orders, ascending by id
    ///
    /// Independent of slab layout, so two stores holding the same pending
    /// orders produce the same root.
    pub fn compute_state_root(&self) -> Result<[u8; 32], AgentError> {
        let mut pending: Vec<&Order> = self.iter().collect();
        pending.sort_unstable_by_key(|order| order.id);

        let mut hasher = Sha256::new();
        for order in pending {
            let bytes = ssz_rs::serialize(&order.to_record()).map_err(|e| AgentError::Encoding {
                order_id: order.id,
                reason: format!("{:?}", e),
            })?;
            hasher.update(&bytes);
        }

        let mut root = [0u8; 32];
        root.copy_from_slice(&hasher.finalize());
        Ok(root)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

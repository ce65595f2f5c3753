//! Order store for the limit order agent.
//!
//! ## Components
//!
//! - [`OrderStore`]: slab-backed map from [`OrderId`](crate::types::OrderId)
//!   to pending [`Order`](crate::types::Order)
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Add order | O(1) |
//! | Remove / cancel by ID | O(1) |
//! | Lookup by ID | O(1) |
//! | Orders for a product | O(n) |
//! | State root | O(n log n) |

pub mod order_store;

pub use order_store::OrderStore;

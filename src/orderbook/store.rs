//! Order store holding the resting bids and asks of the current round.
//!
//! ## Memory Model
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - `Slab::with_capacity(n)` pre-allocates n slots
//! - O(1) insert and lookup
//!
//! Orders are only ever appended (or dropped all at once by [`OrderStore::clear`]),
//! so slab keys are dense and iteration order is insertion order.
//!
//! ## Example
//!
//! ```
//! use lot_auction::orderbook::OrderStore;
//! use lot_auction::types::{Author, Order};
//! use rust_decimal::Decimal;
//!
//! let mut store = OrderStore::with_capacity(16);
//! let bob = Author::new("Bob", "2");
//!
//! store.add_bid(Order::new(bob.clone(), "b-1", 10, Decimal::from(120)));
//! store.add_ask(Order::new(bob, "a-1", 7, Decimal::from(90)));
//!
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.bids.len(), 1);
//! assert_eq!(snapshot.asks.len(), 1);
//! ```

use slab::Slab;

use crate::types::{Order, Side};

/// Handle to an order held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderKey {
    pub side: Side,
    pub slot: usize,
}

/// Point-in-time copy of the resting orders, unsplit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub bids: Vec<Order>,
    pub asks: Vec<Order>,
}

impl Snapshot {
    /// Sum of all bid amounts
    pub fn total_bid_amount(&self) -> u64 {
        self.bids.iter().map(|o| o.amount).sum()
    }

    /// Sum of all ask amounts
    pub fn total_ask_amount(&self) -> u64 {
        self.asks.iter().map(|o| o.amount).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

/// Resting bids and asks, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    bids: Slab<Order>,
    asks: Slab<Order>,
}

impl OrderStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with pre-allocated capacity per side
    pub fn with_capacity(capacity_per_side: usize) -> Self {
        Self {
            bids: Slab::with_capacity(capacity_per_side),
            asks: Slab::with_capacity(capacity_per_side),
        }
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Append a bid. Duplicate ids are accepted.
    pub fn add_bid(&mut self, order: Order) -> OrderKey {
        self.add(Side::Buy, order)
    }

    /// Append an ask. Duplicate ids are accepted.
    pub fn add_ask(&mut self, order: Order) -> OrderKey {
        self.add(Side::Sell, order)
    }

    /// Append an order to the given side.
    pub fn add(&mut self, side: Side, order: Order) -> OrderKey {
        let slot = self.side_mut(side).insert(order);
        OrderKey { side, slot }
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Look up an order by key
    #[inline]
    pub fn get(&self, key: OrderKey) -> Option<&Order> {
        self.side(key.side).get(key.slot)
    }

    /// Resting bids in insertion order
    pub fn bids(&self) -> impl Iterator<Item = &Order> {
        self.bids.iter().map(|(_, order)| order)
    }

    /// Resting asks in insertion order
    pub fn asks(&self) -> impl Iterator<Item = &Order> {
        self.asks.iter().map(|(_, order)| order)
    }

    /// Copy the current bids and asks.
    ///
    /// Reflects every order added before the call; later insertions do not
    /// affect the returned value.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            bids: self.bids().cloned().collect(),
            asks: self.asks().cloned().collect(),
        }
    }

    #[inline]
    pub fn bid_count(&self) -> usize {
        self.bids.len()
    }

    #[inline]
    pub fn ask_count(&self) -> usize {
        self.asks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Total resting amount on one side
    pub fn total_amount(&self, side: Side) -> u64 {
        self.side(side).iter().map(|(_, order)| order.amount).sum()
    }

    /// Drop every order on both sides
    pub fn clear(&mut self) {
        self.bids.clear();
        self.asks.clear();
    }

    fn side(&self, side: Side) -> &Slab<Order> {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Slab<Order> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Author;
    use rust_decimal::Decimal;

    fn order(id: &str, amount: u64, price: i64) -> Order {
        Order::new(Author::new("Alice", "1"), id, amount, Decimal::from(price))
    }

    #[test]
    fn test_store_new() {
        let store = OrderStore::new();
        assert!(store.is_empty());
        assert_eq!(store.bid_count(), 0);
        assert_eq!(store.ask_count(), 0);
    }

    #[test]
    fn test_add_and_get() {
        let mut store = OrderStore::with_capacity(8);

        let bid_key = store.add_bid(order("b-1", 10, 100));
        let ask_key = store.add_ask(order("a-1", 3, 90));

        assert_eq!(bid_key.side, Side::Buy);
        assert_eq!(ask_key.side, Side::Sell);
        assert_eq!(store.get(bid_key).unwrap().id, "b-1");
        assert_eq!(store.get(ask_key).unwrap().id, "a-1");
        assert_eq!(store.bid_count(), 1);
        assert_eq!(store.ask_count(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = OrderStore::new();
        store.add_bid(order("b-3", 1, 300));
        store.add_bid(order("b-1", 1, 100));
        store.add_bid(order("b-2", 1, 200));

        let ids: Vec<_> = store.bids().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["b-3", "b-1", "b-2"]);
    }

    #[test]
    fn test_duplicate_ids_accepted() {
        let mut store = OrderStore::new();
        store.add_ask(order("dup", 5, 10));
        store.add_ask(order("dup", 5, 10));
        assert_eq!(store.ask_count(), 2);
    }

    #[test]
    fn test_snapshot_excludes_later_orders() {
        let mut store = OrderStore::new();
        store.add_bid(order("b-1", 10, 100));

        let snapshot = store.snapshot();
        store.add_bid(order("b-2", 10, 100));

        assert_eq!(snapshot.bids.len(), 1);
        assert_eq!(store.bid_count(), 2);
    }

    #[test]
    fn test_totals() {
        let mut store = OrderStore::new();
        store.add_bid(order("b-1", 10, 100));
        store.add_bid(order("b-2", 15, 100));
        store.add_ask(order("a-1", 7, 50));

        assert_eq!(store.total_amount(Side::Buy), 25);
        assert_eq!(store.total_amount(Side::Sell), 7);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.total_bid_amount(), 25);
        assert_eq!(snapshot.total_ask_amount(), 7);
    }

    #[test]
    fn test_clear() {
        let mut store = OrderStore::new();
        store.add_bid(order("b-1", 10, 100));
        store.add_ask(order("a-1", 7, 50));

        store.clear();

        assert!(store.is_empty());
        assert!(store.snapshot().is_empty());
    }
}

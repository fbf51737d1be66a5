//! Auction engine: order intake and one clearing round per call.
//!
//! ## Round
//!
//! 1. Snapshot the resting bids and asks
//! 2. Split both sides into lots sorted ascending by price
//! 3. Compute the clearing quantity `q`
//! 4. Pair the top `q` bid lots with the bottom `q` ask lots and build the
//!    execution books
//!
//! A round reads the store through a shared borrow, so no order can be added
//! while one is running. Rounds do not consume orders: running twice without
//! new orders gives identical books.

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::engine::builder::{build_books, pair_lots};
use crate::engine::clearing::clearing_quantity;
use crate::engine::splitter::split_and_sort;
use crate::error::Result;
use crate::orderbook::{OrderKey, OrderStore, Snapshot};
use crate::types::quantity::decimal_to_fixed;
use crate::types::{ExecutionBooks, MatchReceipt, Order, Side};

/// Everything produced by one clearing round.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchResult {
    /// Bid and ask execution books
    pub books: ExecutionBooks,

    /// Clearing quantity `q` (number of crossing lot pairings)
    pub clearing_quantity: Decimal,

    /// Lot-unit volume of the crossing asks
    pub matched_volume: Decimal,

    /// Pairings actually written into the books
    pub matched_pairs: usize,

    pub bid_orders: usize,
    pub ask_orders: usize,
    pub bid_lots: usize,
    pub ask_lots: usize,
}

impl MatchResult {
    /// Build the SSZ receipt for this round.
    pub fn receipt(&self) -> MatchReceipt {
        let clearing = decimal_to_fixed(self.clearing_quantity.max(Decimal::ZERO)).unwrap_or(0);
        MatchReceipt::new(
            self.bid_orders as u64,
            self.ask_orders as u64,
            self.bid_lots as u64,
            self.ask_lots as u64,
            self.matched_pairs as u64,
            clearing,
            self.books.digest(),
        )
    }
}

/// Run one clearing round over a snapshot.
///
/// Pure function of the snapshot and the lot size.
pub fn run_round(snapshot: &Snapshot, lot_size: u64) -> MatchResult {
    let bid_lots = split_and_sort(&snapshot.bids, lot_size);
    let ask_lots = split_and_sort(&snapshot.asks, lot_size);

    let quantity = clearing_quantity(&bid_lots, &ask_lots, lot_size);
    let pairings = pair_lots(&bid_lots, &ask_lots, quantity.lots);
    let books = build_books(&pairings);

    debug!(
        "round: {} bids / {} asks -> {} bid lots / {} ask lots, q={}, volume={}, pairs={}",
        snapshot.bids.len(),
        snapshot.asks.len(),
        bid_lots.len(),
        ask_lots.len(),
        quantity.lots,
        quantity.volume,
        pairings.len()
    );

    MatchResult {
        matched_pairs: pairings.len(),
        books,
        clearing_quantity: quantity.lots,
        matched_volume: quantity.volume,
        bid_orders: snapshot.bids.len(),
        ask_orders: snapshot.asks.len(),
        bid_lots: bid_lots.len(),
        ask_lots: ask_lots.len(),
    }
}

/// Caller-owned double-auction engine.
///
/// ## Example
///
/// ```
/// use lot_auction::{AuctionEngine, EngineConfig};
/// use lot_auction::types::{Author, Order};
/// use rust_decimal::Decimal;
///
/// let mut engine = AuctionEngine::new(EngineConfig::default()).unwrap();
/// let buyer = Author::new("Buyer", "1");
/// let seller = Author::new("Seller", "2");
///
/// engine.add_bid(Order::new(buyer, "b-1", 100, Decimal::from(150))).unwrap();
/// engine.add_ask(Order::new(seller, "a-1", 7, Decimal::from(50))).unwrap();
///
/// let books = engine.match_orders();
/// let seller_lots = books.ask_execution_book.get("Seller").unwrap();
/// assert_eq!(seller_lots.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct AuctionEngine {
    config: EngineConfig,
    store: OrderStore,
}

impl Default for AuctionEngine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            store: OrderStore::new(),
        }
    }
}

impl AuctionEngine {
    /// Create an engine with a validated config.
    ///
    /// # Errors
    ///
    /// [`AuctionError::InvalidConfig`](crate::error::AuctionError::InvalidConfig)
    /// for a zero lot size.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            store: OrderStore::new(),
        })
    }

    /// Create an engine with pre-allocated order capacity per side.
    pub fn with_capacity(config: EngineConfig, capacity_per_side: usize) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            store: OrderStore::with_capacity(capacity_per_side),
        })
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn lot_size(&self) -> u64 {
        self.config.lot_size
    }

    /// Read access to the resting orders
    #[inline]
    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    // ========================================================================
    // Order Intake
    // ========================================================================

    /// Add a bid to the next round.
    ///
    /// # Errors
    ///
    /// [`AuctionError::InvalidOrder`](crate::error::AuctionError::InvalidOrder)
    /// for a zero amount or negative price. Rejected orders are not stored.
    pub fn add_bid(&mut self, order: Order) -> Result<OrderKey> {
        self.add(Side::Buy, order)
    }

    /// Add an ask to the next round. Same validation as [`Self::add_bid`].
    pub fn add_ask(&mut self, order: Order) -> Result<OrderKey> {
        self.add(Side::Sell, order)
    }

    fn add(&mut self, side: Side, order: Order) -> Result<OrderKey> {
        if let Err(err) = order.validate() {
            if self.config.log_rejections {
                warn!("rejected {} from {}: {err}", side.label(), order.author.name);
            }
            return Err(err);
        }
        Ok(self.store.add(side, order))
    }

    /// Copy of the resting orders, unsplit.
    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// Drop all resting orders.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Run one clearing round and return the full result.
    pub fn run_auction(&self) -> MatchResult {
        run_round(&self.snapshot(), self.config.lot_size)
    }

    /// Run one clearing round and return only the execution books.
    pub fn match_orders(&self) -> ExecutionBooks {
        self.run_auction().books
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

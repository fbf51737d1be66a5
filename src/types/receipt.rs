//! Match receipt summarizing one clearing round.
//!
//! The receipt is a fixed-size SSZ container so it can be stored or compared
//! byte-for-byte. The `books_root` commits to the full content of both
//! execution books.

use ssz_rs::prelude::*;

/// Summary of one matching round.
///
/// ## Example
///
/// ```
/// use lot_auction::types::MatchReceipt;
///
/// let receipt = MatchReceipt::new(1, 1, 20, 2, 2, 200_000_000, [0u8; 32]);
/// assert_eq!(receipt.matched_pairs, 2);
/// assert!(!receipt.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchReceipt {
    /// Resting bids in the snapshot
    pub bid_orders: u64,

    /// Resting asks in the snapshot
    pub ask_orders: u64,

    /// Lots derived from the bids
    pub bid_lots: u64,

    /// Lots derived from the asks
    pub ask_lots: u64,

    /// Pairings written into the books
    pub matched_pairs: u64,

    /// Clearing quantity in fixed-point (scaled by 10^8), zero when negative
    pub clearing_quantity: u64,

    /// SHA-256 of both execution books
    pub books_root: [u8; 32],
}

impl MatchReceipt {
    pub fn new(
        bid_orders: u64,
        ask_orders: u64,
        bid_lots: u64,
        ask_lots: u64,
        matched_pairs: u64,
        clearing_quantity: u64,
        books_root: [u8; 32],
    ) -> Self {
        Self {
            bid_orders,
            ask_orders,
            bid_lots,
            ask_lots,
            matched_pairs,
            clearing_quantity,
            books_root,
        }
    }

    /// Get the books root as a hex string
    pub fn books_root_hex(&self) -> String {
        hex::encode(self.books_root)
    }

    /// True when the round matched nothing
    pub fn is_empty(&self) -> bool {
        self.matched_pairs == 0
    }

    /// Share of ask lots that were matched.
    ///
    /// Returns None if there were no ask lots.
    pub fn ask_fill_rate(&self) -> Option<f64> {
        if self.ask_lots == 0 {
            None
        } else {
            Some(self.matched_pairs as f64 / self.ask_lots as f64)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

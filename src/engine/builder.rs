//! Execution book construction.
//!
//! For `i` in `0..q` the builder pairs bid lot `len(bids) - q + i` with ask
//! lot `i`. A pairing whose index is not an integral in-bounds position
//! (fractional or oversized `q`) is skipped, never reported as an error.
//! Each side records its own lot amount as split, tagged with the
//! counterparty order id. A full lot meeting a remainder lot is not clipped.

use log::trace;
use rust_decimal::Decimal;

use crate::types::quantity::to_index;
use crate::types::{ExecutionBooks, Lot, MatchedAmount};

/// One bid lot paired with one ask lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing<'a> {
    pub bid: &'a Lot,
    pub ask: &'a Lot,
}

impl Pairing<'_> {
    /// `ask.price <= bid.price`
    pub fn crosses(&self) -> bool {
        self.ask.price <= self.bid.price
    }
}

/// Select the pairings implied by `q`.
///
/// Nothing is paired when `q <= 0`.
pub fn pair_lots<'a>(bid_lots: &'a [Lot], ask_lots: &'a [Lot], q: Decimal) -> Vec<Pairing<'a>> {
    let mut pairings = Vec::new();
    if q <= Decimal::ZERO {
        return pairings;
    }

    let bid_len = Decimal::from(bid_lots.len());
    let mut skipped = 0usize;
    let mut i = 0usize;

    // past the last ask every pairing would be skipped
    while i < ask_lots.len() && Decimal::from(i) < q {
        let bid = to_index(bid_len - q + Decimal::from(i)).and_then(|idx| bid_lots.get(idx));
        match (bid, ask_lots.get(i)) {
            (Some(bid), Some(ask)) => pairings.push(Pairing { bid, ask }),
            _ => skipped += 1,
        }
        i += 1;
    }

    if skipped > 0 {
        trace!("skipped {skipped} out-of-range pairings for q={q}");
    }
    pairings
}

/// Aggregate pairings into bid and ask execution books.
pub fn build_books(pairings: &[Pairing<'_>]) -> ExecutionBooks {
    let mut books = ExecutionBooks::default();
    for pairing in pairings {
        books.bid_execution_book.record(
            &pairing.bid.author.name,
            MatchedAmount::new(pairing.bid.amount, pairing.ask.source_order_id.clone()),
        );
        books.ask_execution_book.record(
            &pairing.ask.author.name,
            MatchedAmount::new(pairing.ask.amount, pairing.bid.source_order_id.clone()),
        );
    }
    books
}

/// Pair the lots for `q` and build both execution books.
pub fn build_execution_books(bid_lots: &[Lot], ask_lots: &[Lot], q: Decimal) -> ExecutionBooks {
    build_books(&pair_lots(bid_lots, ask_lots, q))
}

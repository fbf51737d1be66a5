//! Clearing quantity: how many lots can cross in one round.
//!
//! ## Pairing Rule
//!
//! With both lot sequences sorted ascending, the `q` cheapest asks (head of
//! the ask lots) are paired index-by-index with the `q` most expensive bids
//! (tail of the bid lots). `q` is the largest count for which every pair
//! satisfies `ask.price <= bid.price`.
//!
//! ## Scan
//!
//! Ask lot `i` can only sit against bids at or above `lo(i)`, the first bid
//! position priced at least `ask[i].price`. Taking `k` lots puts ask `i`
//! against bid position `n - k + i`, so `k` is feasible iff
//! `k <= n - lo(i) + i` for every `i < k`. The bound on the right is the
//! slack of ask `i`. `lo(i)` only moves forward as asks get dearer, so one
//! forward cursor per side and a running minimum of the slack give `q` in a
//! single pass. Feasibility is monotone in `k`: once the running minimum
//! falls below the next count the scan stops.

use rust_decimal::Decimal;

use crate::types::Lot;

/// Result of the clearing scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearingQuantity {
    /// Number of lot pairings that cross (`q`)
    pub lots: Decimal,

    /// Lot-unit volume of the crossing asks; partial lots count as fractions
    pub volume: Decimal,
}

impl ClearingQuantity {
    /// True when nothing can be matched (`q <= 0`).
    pub fn is_empty(&self) -> bool {
        self.lots <= Decimal::ZERO
    }
}

/// Compute the clearing quantity for two ascending lot sequences.
pub fn clearing_quantity(bid_lots: &[Lot], ask_lots: &[Lot], lot_size: u64) -> ClearingQuantity {
    let bid_len = bid_lots.len();
    let mut bid_cursor = 0usize;
    let mut min_slack = usize::MAX;
    let mut crossed = 0usize;
    let mut volume = Decimal::ZERO;

    for (ask_cursor, ask) in ask_lots.iter().enumerate() {
        // bids below this ask can never cross it or any dearer ask
        while bid_cursor < bid_len && bid_lots[bid_cursor].price < ask.price {
            bid_cursor += 1;
        }
        if bid_cursor == bid_len {
            break;
        }

        let slack = bid_len - bid_cursor + ask_cursor;
        min_slack = min_slack.min(slack);
        if ask_cursor + 1 > min_slack {
            break;
        }

        crossed = ask_cursor + 1;
        volume += ask.units(lot_size);
    }

    ClearingQuantity {
        lots: Decimal::from(crossed),
        volume,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::splitter::split_and_sort;
    use crate::types::{Author, Order};

    fn orders(specs: &[(u64, i64)]) -> Vec<Order> {
        specs
            .iter()
            .enumerate()
            .map(|(i, &(amount, price))| {
                Order::new(
                    Author::new(format!("P{i}"), i.to_string()),
                    i.to_string(),
                    amount,
                    Decimal::from(price),
                )
            })
            .collect()
    }

    fn q(bids: &[(u64, i64)], asks: &[(u64, i64)]) -> ClearingQuantity {
        let bid_lots = split_and_sort(&orders(bids), 5);
        let ask_lots = split_and_sort(&orders(asks), 5);
        clearing_quantity(&bid_lots, &ask_lots, 5)
    }

    #[test]
    fn test_all_asks_cross() {
        let result = q(&[(100, 150)], &[(7, 50)]);
        assert_eq!(result.lots, Decimal::from(2));
        assert_eq!(result.volume, Decimal::new(14, 1));
    }

    #[test]
    fn test_no_cross() {
        let result = q(&[(5, 10)], &[(5, 20)]);
        assert!(result.is_empty());
        assert_eq!(result.volume, Decimal::ZERO);
    }

    #[test]
    fn test_empty_sides() {
        assert!(q(&[], &[(5, 20)]).is_empty());
        assert!(q(&[(5, 20)], &[]).is_empty());
        assert!(q(&[], &[]).is_empty());
    }

    #[test]
    fn test_limited_by_bid_count() {
        // 1 bid lot, 3 cheap ask lots
        let result = q(&[(5, 100)], &[(15, 10)]);
        assert_eq!(result.lots, Decimal::ONE);
    }

    #[test]
    fn test_equal_prices_cross() {
        let result = q(&[(5, 10), (5, 10)], &[(10, 10)]);
        assert_eq!(result.lots, Decimal::from(2));
    }

    #[test]
    fn test_partial_crossing() {
        // bids: 10, 20, 30 ; asks: 15, 25, 35
        // k = 2 pairs (15 vs 20, 25 vs 30); k = 3 would put 35 against 30
        let result = q(&[(5, 10), (5, 20), (5, 30)], &[(5, 15), (5, 25), (5, 35)]);
        assert_eq!(result.lots, Decimal::from(2));
    }

    #[test]
    fn test_cheap_bids_skipped() {
        // low bids at 1 never cross the ask at 50
        let result = q(&[(10, 1), (5, 60)], &[(5, 50)]);
        assert_eq!(result.lots, Decimal::ONE);
    }

    #[test]
    fn test_single_expensive_ask_caps_quantity() {
        // bids: 10, 100 ; asks: 5, 90
        // k = 2 pairs 5 vs 10 and 90 vs 100
        let result = q(&[(5, 10), (5, 100)], &[(5, 5), (5, 90)]);
        assert_eq!(result.lots, Decimal::from(2));

        // bids: 10, 100 ; asks: 50, 90 -> only 50 vs 100
        let result = q(&[(5, 10), (5, 100)], &[(5, 50), (5, 90)]);
        assert_eq!(result.lots, Decimal::ONE);
    }
}

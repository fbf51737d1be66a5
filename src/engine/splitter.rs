//! Lot splitting and price ordering.
//!
//! Every order is cut into lots of at most `lot_size`; only the last lot of
//! an order can be smaller. The lots of one side are then collected into a
//! new vector sorted ascending by price. The sort is stable, so lots of equal
//! price keep the order in which their orders were supplied.

use crate::types::{Lot, Order};

/// Cut one order into lots.
///
/// An order of amount `A` yields `ceil(A / lot_size)` lots whose amounts sum
/// to `A`. A zero amount (or a zero lot size) yields no lots.
pub fn split_order(order: &Order, lot_size: u64) -> Vec<Lot> {
    if lot_size == 0 {
        return Vec::new();
    }

    let mut lots = Vec::with_capacity(order.lot_count(lot_size) as usize);
    let mut remaining = order.amount;
    while remaining > 0 {
        let amount = remaining.min(lot_size);
        lots.push(Lot::from_order(order, amount));
        remaining -= amount;
    }
    lots
}

/// Split every order and sort the resulting lots by ascending price.
///
/// The input slice is left untouched.
pub fn split_and_sort(orders: &[Order], lot_size: u64) -> Vec<Lot> {
    let mut lots: Vec<Lot> = orders
        .iter()
        .flat_map(|order| split_order(order, lot_size))
        .collect();
    lots.sort_by_key(|lot| lot.price);
    lots
}

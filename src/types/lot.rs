//! Lot: a slice of an order no larger than the configured lot size.

use rust_decimal::Decimal;

use crate::types::quantity::lot_units;
use crate::types::{Author, Order};

/// One tradable slice of an order.
///
/// Lots are independent copies; they carry the author and the id of the
/// order they came from so matches can be traced back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lot {
    pub author: Author,
    pub source_order_id: String,
    pub amount: u64,
    pub price: Decimal,
}

impl Lot {
    /// Build a lot of `amount` from `order`.
    pub fn from_order(order: &Order, amount: u64) -> Self {
        Self {
            author: order.author.clone(),
            source_order_id: order.id.clone(),
            amount,
            price: order.price,
        }
    }

    /// Size of this lot in lot units (`amount / lot_size`).
    ///
    /// A full lot is `1`, a remainder lot is a fraction.
    pub fn units(&self, lot_size: u64) -> Decimal {
        lot_units(self.amount, lot_size)
    }
}

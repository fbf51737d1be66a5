//! Order types for the lot auction.
//!
//! An [`Order`] is one resting bid or ask as supplied by the caller. The
//! engine never mutates it; matching works on [`Lot`](crate::types::Lot)
//! copies derived from it.

use rust_decimal::Decimal;

use crate::error::{AuctionError, InvalidOrderReason, Result};

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy (bid) or Sell (ask)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy order (bid)
    #[default]
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Short label used in logs
    pub fn label(self) -> &'static str {
        match self {
            Side::Buy => "bid",
            Side::Sell => "ask",
        }
    }
}

// ============================================================================
// Author
// ============================================================================

/// Participant that placed an order.
///
/// `name` keys the execution books, so callers must keep names unique per
/// author within a round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Author {
    pub name: String,
    pub id: String,
}

impl Author {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A resting order.
///
/// ## Example
///
/// ```
/// use lot_auction::types::{Author, Order};
/// use rust_decimal::Decimal;
///
/// let alice = Author::new("Alice", "1");
/// let order = Order::new(alice, "b-1", 12, Decimal::from(150));
/// assert!(order.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Order {
    /// Who placed the order
    pub author: Author,

    /// Order identifier (not required to be unique across authors)
    pub id: String,

    /// Total amount, split into lots at match time
    pub amount: u64,

    /// Limit price
    pub price: Decimal,
}

impl Order {
    pub fn new(author: Author, id: impl Into<String>, amount: u64, price: Decimal) -> Self {
        Self {
            author,
            id: id.into(),
            amount,
            price,
        }
    }

    /// Reject orders the engine cannot hold.
    ///
    /// # Errors
    ///
    /// [`AuctionError::InvalidOrder`] for a zero amount or a negative price.
    pub fn validate(&self) -> Result<()> {
        if self.amount == 0 {
            return Err(AuctionError::invalid_order(
                self.id.clone(),
                InvalidOrderReason::ZeroAmount,
            ));
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(AuctionError::invalid_order(
                self.id.clone(),
                InvalidOrderReason::NegativePrice,
            ));
        }
        Ok(())
    }

    /// Number of lots this order decomposes into for a given lot size.
    pub fn lot_count(&self, lot_size: u64) -> u64 {
        if lot_size == 0 {
            return 0;
        }
        self.amount.div_ceil(lot_size)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Author {
        Author::new("Alice", "1")
    }

    #[test]
    fn test_side_label() {
        assert_eq!(Side::Buy.label(), "bid");
        assert_eq!(Side::Sell.label(), "ask");
    }

    #[test]
    fn test_order_new() {
        let order = Order::new(alice(), "1", 100, Decimal::from(150));

        assert_eq!(order.author.name, "Alice");
        assert_eq!(order.author.id, "1");
        assert_eq!(order.id, "1");
        assert_eq!(order.amount, 100);
        assert_eq!(order.price, Decimal::from(150));
    }

    #[test]
    fn test_validate_zero_amount() {
        let order = Order::new(alice(), "z", 0, Decimal::from(10));
        assert_eq!(
            order.validate(),
            Err(AuctionError::invalid_order("z", InvalidOrderReason::ZeroAmount))
        );
    }

    #[test]
    fn test_validate_negative_price() {
        let order = Order::new(alice(), "n", 5, Decimal::from(-1));
        assert_eq!(
            order.validate(),
            Err(AuctionError::invalid_order("n", InvalidOrderReason::NegativePrice))
        );
    }

    #[test]
    fn test_validate_zero_price_accepted() {
        let order = Order::new(alice(), "free", 5, Decimal::ZERO);
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_lot_count() {
        assert_eq!(Order::new(alice(), "a", 5, Decimal::ONE).lot_count(5), 1);
        assert_eq!(Order::new(alice(), "b", 7, Decimal::ONE).lot_count(5), 2);
        assert_eq!(Order::new(alice(), "c", 100, Decimal::ONE).lot_count(5), 20);
        assert_eq!(Order::new(alice(), "d", 1, Decimal::ONE).lot_count(5), 1);
        assert_eq!(Order::new(alice(), "e", 0, Decimal::ONE).lot_count(5), 0);
    }
}

//! Error types for the lot auction engine.
//!
//! Only insertion and construction can fail. Matching itself never returns an
//! error: empty sides produce empty books and out-of-range pairings are
//! skipped inside the builder.

use thiserror::Error;

/// Result type alias for auction operations.
pub type Result<T> = std::result::Result<T, AuctionError>;

/// Why an order was refused at insertion.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidOrderReason {
    /// Amount must be strictly positive
    #[error("amount must be positive")]
    ZeroAmount,
    /// Price must not be below zero
    #[error("price must not be negative")]
    NegativePrice,
}

/// Main error type for auction operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuctionError {
    /// Order rejected by `add_bid` / `add_ask`
    #[error("Invalid order {order_id}: {reason}")]
    InvalidOrder {
        order_id: String,
        reason: InvalidOrderReason,
    },

    /// Engine configuration rejected at construction
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl AuctionError {
    /// Create an `InvalidOrder` error for the given order id.
    pub fn invalid_order(order_id: impl Into<String>, reason: InvalidOrderReason) -> Self {
        AuctionError::InvalidOrder {
            order_id: order_id.into(),
            reason,
        }
    }
}

//! Core data types for the lot auction
//!
//! ## Types
//!
//! - [`Author`]: Participant placing orders
//! - [`Order`]: A resting bid or ask
//! - [`Side`]: Buy or Sell
//! - [`Lot`]: Fixed-maximum-size slice of an order
//! - [`MatchedAmount`], [`ExecutionBook`], [`ExecutionBooks`]: Match results
//! - [`MatchReceipt`]: SSZ summary of a clearing round
//!
//! Prices and lot quantities are `rust_decimal::Decimal`; see [`quantity`].

mod order;
mod lot;
mod execution;
mod receipt;
pub mod quantity;

pub use order::{Author, Order, Side};
pub use lot::Lot;
pub use execution::{ExecutionBook, ExecutionBooks, MatchedAmount};
pub use receipt::MatchReceipt;

//! Matching engine module for the lot auction.
//!
//! ## Pipeline
//!
//! - [`splitter`]: orders → lots, sorted ascending by price (stable)
//! - [`clearing`]: lots → clearing quantity `q`
//! - [`builder`]: lots + `q` → bid and ask execution books
//! - [`matcher`]: [`AuctionEngine`] tying the stages to an order store
//!
//! ## Matching Rules
//!
//! - The `q` cheapest ask lots meet the `q` dearest bid lots, index by index
//! - Every pairing satisfies `ask.price <= bid.price`
//! - Equal prices keep the order in which orders were added
//!
//! ## Example
//!
//! ```
//! use lot_auction::engine::AuctionEngine;
//! use lot_auction::types::{Author, Order};
//! use rust_decimal::Decimal;
//!
//! let mut engine = AuctionEngine::default();
//! engine.add_bid(Order::new(Author::new("B", "1"), "b", 5, Decimal::from(10))).unwrap();
//! engine.add_ask(Order::new(Author::new("S", "2"), "a", 5, Decimal::from(20))).unwrap();
//!
//! // bid below ask: nothing crosses
//! assert!(engine.match_orders().is_empty());
//! ```

pub mod splitter;
pub mod clearing;
pub mod builder;
pub mod matcher;

pub use clearing::{clearing_quantity, ClearingQuantity};
pub use builder::{build_execution_books, Pairing};
pub use matcher::{run_round, AuctionEngine, MatchResult};
pub use splitter::{split_and_sort, split_order};

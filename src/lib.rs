//! # Lot Auction
//!
//! Double-auction matcher that clears resting bids and asks in standardized
//! lots and reports, per participant, what each side had executed.
//!
//! ## Architecture
//!
//! - **Types**: Author, Order, Lot, execution books, match receipt
//! - **OrderBook**: order store with slab-based storage
//! - **Engine**: lot splitting, clearing quantity, execution book builder
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical snapshots produce identical books
//! 2. **No Floating Point**: Prices and lot quantities use `rust_decimal`
//! 3. **Caller-Owned State**: No global engine; every round reads a snapshot
//! 4. **Synchronous Execution**: No I/O, no async, one pass per round

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Engine configuration
pub mod config;

/// Core data types: Order, Lot, ExecutionBook, MatchReceipt
pub mod types;

/// Order store and snapshots
pub mod orderbook;

/// Matching engine: splitting, clearing, book building
pub mod engine;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::{EngineConfig, DEFAULT_LOT_SIZE};
pub use engine::{AuctionEngine, MatchResult};
pub use error::{AuctionError, InvalidOrderReason, Result};
pub use orderbook::{OrderKey, OrderStore, Snapshot};
pub use types::{Author, ExecutionBook, ExecutionBooks, Lot, MatchReceipt, MatchedAmount, Order, Side};

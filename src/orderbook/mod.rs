//! Order storage for the lot auction.
//!
//! ## Components
//!
//! - [`OrderStore`]: resting bids and asks in slab storage
//! - [`OrderKey`]: handle returned on insertion
//! - [`Snapshot`]: point-in-time copy of both sides
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Add order | O(1) |
//! | Get by key | O(1) |
//! | Snapshot | O(n) |

pub mod store;

pub use store::{OrderKey, OrderStore, Snapshot};

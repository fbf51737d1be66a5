//! Engine configuration.
//!
//! The only tunable is the lot size, fixed when the engine is built.

use crate::error::{AuctionError, Result};

/// Lot size used when none is given.
pub const DEFAULT_LOT_SIZE: u64 = 5;

/// Configuration for an [`AuctionEngine`](crate::engine::AuctionEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum amount carried by a single lot
    pub lot_size: u64,

    /// Whether rejected orders are reported through `log::warn!`
    pub log_rejections: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lot_size: DEFAULT_LOT_SIZE,
            log_rejections: true,
        }
    }
}

impl EngineConfig {
    /// Create a config with the given lot size.
    pub fn new(lot_size: u64) -> Self {
        Self {
            lot_size,
            ..Default::default()
        }
    }

    /// Set the lot size.
    pub fn with_lot_size(mut self, lot_size: u64) -> Self {
        self.lot_size = lot_size;
        self
    }

    /// Enable/disable warning logs for rejected orders.
    pub fn with_rejection_logging(mut self, enabled: bool) -> Self {
        self.log_rejections = enabled;
        self
    }

    /// Check the config is usable.
    pub fn validate(&self) -> Result<()> {
        if self.lot_size == 0 {
            return Err(AuctionError::InvalidConfig(
                "lot_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

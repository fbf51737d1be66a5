//! Decimal price and lot-quantity utilities.
//!
//! ## Overview
//!
//! Prices and clearing quantities are `rust_decimal::Decimal`. Lot counts
//! can be fractional (a remainder lot of 2 with a lot size of 5 is `0.4`
//! lots), so they are never carried in an integer type inside the engine.
//!
//! For fixed-size encodings (the SSZ receipt) non-negative decimals are
//! converted to `u64` scaled by 10^8.
//!
//! ## Examples
//!
//! ```
//! use lot_auction::types::quantity::{decimal_to_fixed, from_fixed, lot_units};
//! use rust_decimal::Decimal;
//!
//! let units = lot_units(7, 5);
//! assert_eq!(units, Decimal::new(14, 1));
//!
//! let raw = decimal_to_fixed(units).unwrap();
//! assert_eq!(raw, 140_000_000);
//! assert_eq!(from_fixed(raw), "1.40000000");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Scaling factor for fixed-point encoding: 10^8
pub const SCALE: u64 = 100_000_000;

// ============================================================================
// Lot Units
// ============================================================================

/// Express `amount` in lot units for the given lot size.
///
/// Returns zero for a zero lot size instead of dividing by zero.
///
/// ```
/// use lot_auction::types::quantity::lot_units;
/// use rust_decimal::Decimal;
///
/// assert_eq!(lot_units(5, 5), Decimal::ONE);
/// assert_eq!(lot_units(12, 5), Decimal::new(24, 1));
/// ```
pub fn lot_units(amount: u64, lot_size: u64) -> Decimal {
    Decimal::from(amount)
        .checked_div(Decimal::from(lot_size))
        .unwrap_or(Decimal::ZERO)
}

/// Convert a decimal to a slice index.
///
/// Only non-negative integral values convert; anything else is `None`.
pub fn to_index(d: Decimal) -> Option<usize> {
    if d.is_sign_negative() && !d.is_zero() {
        return None;
    }
    if !d.fract().is_zero() {
        return None;
    }
    d.to_usize()
}

// ============================================================================
// Fixed-Point Conversion
// ============================================================================

/// Convert a Decimal to fixed-point u64
///
/// # Returns
///
/// * `Some(u64)` - The fixed-point representation
/// * `None` - If value is negative or out of range
pub fn decimal_to_fixed(d: Decimal) -> Option<u64> {
    if d.is_sign_negative() && !d.is_zero() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    let rounded = scaled.round_dp(0);
    rounded.to_u64()
}

/// Convert fixed-point u64 to a Decimal
pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Convert fixed-point u64 to a string with 8 decimal places
pub fn from_fixed(value: u64) -> String {
    let decimal = fixed_to_decimal(value);
    format!("{:.8}", decimal)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lot_units() {
        assert_eq!(lot_units(5, 5), Decimal::ONE);
        assert_eq!(lot_units(2, 5), Decimal::new(4, 1));
        assert_eq!(lot_units(0, 5), Decimal::ZERO);
        assert_eq!(lot_units(3, 0), Decimal::ZERO);
    }

    #[test]
    fn test_to_index() {
        assert_eq!(to_index(Decimal::from(0)), Some(0));
        assert_eq!(to_index(Decimal::from(18)), Some(18));
        assert_eq!(to_index(Decimal::new(186, 1)), None); // 18.6
        assert_eq!(to_index(Decimal::from(-1)), None);
        assert_eq!(to_index(Decimal::new(-4, 1)), None);
    }

    #[test]
    fn test_decimal_to_fixed() {
        assert_eq!(decimal_to_fixed(Decimal::ONE), Some(100_000_000));
        assert_eq!(decimal_to_fixed(Decimal::new(4, 1)), Some(40_000_000));
        assert_eq!(decimal_to_fixed(Decimal::ZERO), Some(0));
        assert_eq!(decimal_to_fixed(Decimal::from(-1)), None);
    }

    #[test]
    fn test_from_fixed() {
        assert_eq!(from_fixed(100_000_000), "1.00000000");
        assert_eq!(from_fixed(140_000_000), "1.40000000");
        assert_eq!(from_fixed(0), "0.00000000");
    }

    #[test]
    fn test_fixed_roundtrip_precision() {
        let value = Decimal::from_str("123456789.12345678").unwrap();
        let fixed = decimal_to_fixed(value).unwrap();
        assert_eq!(from_fixed(fixed), "123456789.12345678");
    }
}

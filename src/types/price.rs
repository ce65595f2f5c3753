//! Fixed-point price utilities.
//!
//! ## Overview
//!
//! Limit prices, tick prices and policy thresholds are stored as `u64`
//! scaled by 10^8. Comparisons between a tick and a limit are plain integer
//! comparisons, so `105.0 >= 105.0` can never be lost to rounding.
//!
//! ## Examples
//!
//! ```
//! use limit_order_agent::types::price::{to_fixed, from_fixed_trimmed};
//!
//! let limit = to_fixed("105.25").unwrap();
//! assert_eq!(limit, 10_525_000_000);
//! assert_eq!(from_fixed_trimmed(limit), "105.25");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Scaling factor for fixed-point arithmetic: 10^8
pub const SCALE: u64 = 100_000_000;

/// Largest whole-unit price that fits in the fixed-point range
pub const MAX_UNITS: u64 = u64::MAX / SCALE;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a decimal string to fixed-point u64
///
/// Returns `None` if parsing fails, the value is negative, or it is out of
/// range. Digits beyond the 8th decimal place are rounded.
///
/// ```
/// use limit_order_agent::types::price::to_fixed;
///
/// assert_eq!(to_fixed("1.0"), Some(100_000_000));
/// assert_eq!(to_fixed("0.00000001"), Some(1));
/// assert_eq!(to_fixed("-3"), None);
/// ```
pub fn to_fixed(s: &str) -> Option<u64> {
    let decimal = Decimal::from_str(s.trim()).ok()?;
    decimal_to_fixed(decimal)
}

/// Convert a Decimal to fixed-point u64
pub fn decimal_to_fixed(d: Decimal) -> Option<u64> {
    if d.is_sign_negative() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    scaled.round_dp(0).to_u64()
}

/// Convert a whole number of price units to fixed-point
///
/// ```
/// use limit_order_agent::types::price::from_units;
///
/// assert_eq!(from_units(100), Some(10_000_000_000));
/// assert_eq!(from_units(u64::MAX), None);
/// ```
pub fn from_units(units: u64) -> Option<u64> {
    units.checked_mul(SCALE)
}

/// Convert fixed-point u64 to a Decimal
pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Convert fixed-point u64 to a string with 8 decimal places
pub fn from_fixed(value: u64) -> String {
    format!("{:.8}", fixed_to_decimal(value))
}

/// Convert fixed-point u64 to a human-readable string (trailing zeros trimmed)
///
/// ```
/// use limit_order_agent::types::price::from_fixed_trimmed;
///
/// assert_eq!(from_fixed_trimmed(10_500_000_000), "105");
/// assert_eq!(from_fixed_trimmed(150_000_000), "1.5");
/// ```
pub fn from_fixed_trimmed(value: u64) -> String {
    format!("{}", fixed_to_decimal(value).normalize())
}

/// Serde helper: read a decimal price string (or integer) into fixed-point
pub fn deserialize_fixed<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Units(u64),
    }

    let parsed = match RawPrice::deserialize(deserializer)? {
        RawPrice::Text(s) => to_fixed(&s),
        RawPrice::Units(units) => from_units(units),
    };
    parsed.ok_or_else(|| serde::de::Error::custom("price must be a non-negative decimal within range"))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_basic() {
        assert_eq!(to_fixed("1"), Some(100_000_000));
        assert_eq!(to_fixed("0.5"), Some(50_000_000));
        assert_eq!(to_fixed("105"), Some(10_500_000_000));
        assert_eq!(to_fixed(" 95.5 "), Some(9_550_000_000));
    }

    #[test]
    fn test_to_fixed_edge_cases() {
        assert_eq!(to_fixed("0"), Some(0));
        assert_eq!(to_fixed("-1.0"), None);
        assert_eq!(to_fixed("abc"), None);
        assert_eq!(to_fixed(""), None);
    }

    #[test]
    fn test_to_fixed_rounds_extra_precision() {
        assert_eq!(to_fixed("0.000000016"), Some(2));
        assert_eq!(to_fixed("0.000000014"), Some(1));
    }

    #[test]
    fn test_from_units() {
        assert_eq!(from_units(0), Some(0));
        assert_eq!(from_units(1), Some(SCALE));
        assert_eq!(from_units(MAX_UNITS), Some(MAX_UNITS * SCALE));
        assert_eq!(from_units(MAX_UNITS + 1), None);
    }

    #[test]
    fn test_from_fixed() {
        assert_eq!(from_fixed(100_000_000), "1.00000000");
        assert_eq!(from_fixed(1), "0.00000001");
        assert_eq!(from_fixed(0), "0.00000000");
    }

    #[test]
    fn test_precision() {
        let value = "123456789.12345678";
        let fixed = to_fixed(value).unwrap();
        assert_eq!(from_fixed(fixed), value);
    }
}

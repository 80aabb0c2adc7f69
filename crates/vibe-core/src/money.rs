//! # Money Module
//!
//! Provides the `Money` type for displaying monetary values.
//!
//! ## Where Floats Stop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog prices arrive as f64 and the module total is an f64.           │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  The total itself stays a float (callers rely on the exact bits).       │
//! │  Anything shown to a shopper goes through Money first:                  │
//! │                                                                         │
//! │    Money::from_amount(0.30000000000000004) → 30 cents → "$0.30"         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vibe_core::money::Money;
//!
//! let price = Money::from_cents(1099);
//! assert_eq!(price.to_string(), "$10.99");
//!
//! let total = Money::from_amount(8.0);
//! assert_eq!(total.cents(), 800);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative totals still display correctly
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use vibe_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a decimal amount, rounded to the nearest
    /// cent (half away from zero).
    ///
    /// NaN and infinities become zero.
    ///
    /// ## Example
    /// ```rust
    /// use vibe_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(10.99).cents(), 1099);
    /// assert_eq!(Money::from_amount(0.1 + 0.2).cents(), 30);
    /// assert_eq!(Money::from_amount(f64::NAN).cents(), 0);
    /// ```
    pub fn from_amount(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money::zero();
        }
        // `as` saturates at the i64 bounds
        Money((amount * 100.0).round() as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use vibe_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Formats with a custom currency symbol, e.g. `"Bs"` or `"€"`.
    ///
    /// ## Example
    /// ```rust
    /// use vibe_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-550).format_with("€"), "-€5.50");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$D.CC`, matching the storefront's two-decimal display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_amount_rounding() {
        assert_eq!(Money::from_amount(8.0).cents(), 800);
        assert_eq!(Money::from_amount(0.125).cents(), 13);
        assert_eq!(Money::from_amount(0.004).cents(), 0);
        assert_eq!(Money::from_amount(-5.5).cents(), -550);
    }

    #[test]
    fn test_from_amount_non_finite() {
        assert!(Money::from_amount(f64::NAN).is_zero());
        assert!(Money::from_amount(f64::INFINITY).is_zero());
        assert!(Money::from_amount(f64::NEG_INFINITY).is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-5)), "-$0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(123456).format_with("Bs "), "Bs 1234.56");
    }
}

//! # Total Calculator
//!
//! Sums `price × effective quantity` across paired price/quantity buffers.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute_total(prices, quantities, n)                                   │
//! │                                                                         │
//! │  prices     ──► [ 2.0 , 3.0 ]   (caller owned, read only)               │
//! │  quantities ──► [  1  ,  2  ]   (paired by index)                       │
//! │  n          ──►    2                                                    │
//! │                                                                         │
//! │  Guard:  prices absent │ quantities absent │ n <= 0  ──► 0.0            │
//! │                                                                         │
//! │  Loop:   total += prices[i] × max(quantities[i], 1)   (index order)     │
//! │                                                                         │
//! │  Result: 2.0×1 + 3.0×2 = 8.0                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Silent Default
//! Invalid input never produces an error from [`compute_total`]: it degrades
//! to `0.0`, the same value an empty cart produces. Callers that need to tell
//! the two apart use [`try_compute_total`].
//!
//! ## Floating Point
//! Contributions are added in index order with native `f64` addition. The
//! same buffers always produce the same bits; reordering them may not.

use crate::error::TotalError;

// =============================================================================
// Effective Quantity
// =============================================================================

/// Returns the quantity used in the total: `quantity` if positive, else `1`.
///
/// Zero and negative quantities count as a minimum purchase of one unit.
///
/// ## Example
/// ```rust
/// use vibe_core::total::effective_quantity;
///
/// assert_eq!(effective_quantity(3), 3);
/// assert_eq!(effective_quantity(0), 1);
/// assert_eq!(effective_quantity(-3), 1);
/// ```
#[inline]
pub const fn effective_quantity(quantity: i32) -> i32 {
    if quantity > 0 {
        quantity
    } else {
        1
    }
}

// =============================================================================
// Total Calculation
// =============================================================================

/// Computes `Σ prices[i] × effective_quantity(quantities[i])` for `i in 0..n`.
///
/// Returns `0.0` without touching either buffer when `prices` or
/// `quantities` is absent, when `n <= 0`, or when `n` is larger than either
/// buffer. When `n` is smaller than the buffers only the first `n` pairs
/// contribute.
///
/// Never allocates, never logs, never mutates its inputs.
///
/// ## Example
/// ```rust
/// use vibe_core::total::compute_total;
///
/// let total = compute_total(Some(&[2.0, 3.0]), Some(&[1, 2]), 2);
/// assert_eq!(total, 8.0);
///
/// // Missing buffer: silent default
/// assert_eq!(compute_total(None, Some(&[1]), 1), 0.0);
/// ```
pub fn compute_total(prices: Option<&[f64]>, quantities: Option<&[i32]>, n: i32) -> f64 {
    let (Some(prices), Some(quantities)) = (prices, quantities) else {
        return 0.0;
    };
    if n <= 0 {
        return 0.0;
    }

    let n = n as usize;
    if n > prices.len() || n > quantities.len() {
        return 0.0;
    }

    prices[..n]
        .iter()
        .zip(&quantities[..n])
        .fold(0.0, |total, (&price, &quantity)| {
            total + price * f64::from(effective_quantity(quantity))
        })
}

/// Strict variant of [`compute_total`] for callers that must distinguish
/// malformed input from an empty result.
///
/// ## Errors
/// - [`TotalError::LengthMismatch`] when the buffers differ in length
/// - [`TotalError::EmptyInput`] when both buffers are empty
/// - [`TotalError::CountOverflow`] when the length does not fit an `i32` count
///
/// On success the value is bit-identical to
/// `compute_total(Some(prices), Some(quantities), len)`.
///
/// ## Example
/// ```rust
/// use vibe_core::total::try_compute_total;
/// use vibe_core::TotalError;
///
/// assert_eq!(try_compute_total(&[5.0], &[0]).unwrap(), 5.0);
/// assert!(matches!(try_compute_total(&[], &[]), Err(TotalError::EmptyInput)));
/// ```
pub fn try_compute_total(prices: &[f64], quantities: &[i32]) -> Result<f64, TotalError> {
    if prices.len() != quantities.len() {
        return Err(TotalError::LengthMismatch {
            prices: prices.len(),
            quantities: quantities.len(),
        });
    }
    if prices.is_empty() {
        return Err(TotalError::EmptyInput);
    }

    let n = i32::try_from(prices.len())
        .map_err(|_| TotalError::CountOverflow { len: prices.len() })?;

    Ok(compute_total(Some(prices), Some(quantities), n))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_quantity() {
        assert_eq!(effective_quantity(1), 1);
        assert_eq!(effective_quantity(7), 7);
        assert_eq!(effective_quantity(i32::MAX), i32::MAX);
        assert_eq!(effective_quantity(0), 1);
        assert_eq!(effective_quantity(-3), 1);
        assert_eq!(effective_quantity(i32::MIN), 1);
    }

    #[test]
    fn test_paired_sum() {
        let total = compute_total(Some(&[2.0, 3.0]), Some(&[1, 2]), 2);
        assert_eq!(total, 8.0);
    }

    #[test]
    fn test_zero_quantity_counts_as_one() {
        assert_eq!(compute_total(Some(&[5.0]), Some(&[0]), 1), 5.0);
    }

    #[test]
    fn test_negative_quantity_counts_as_one() {
        assert_eq!(compute_total(Some(&[5.0]), Some(&[-3]), 1), 5.0);
    }

    #[test]
    fn test_empty_buffers() {
        assert_eq!(compute_total(Some(&[]), Some(&[]), 0), 0.0);
    }

    #[test]
    fn test_missing_prices_short_circuits() {
        assert_eq!(compute_total(None, Some(&[1]), 1), 0.0);
    }

    #[test]
    fn test_missing_quantities_short_circuits() {
        assert_eq!(compute_total(Some(&[4.5]), None, 1), 0.0);
        assert_eq!(compute_total(None, None, 3), 0.0);
    }

    #[test]
    fn test_non_positive_count() {
        let prices = [1.0, 2.0];
        let quantities = [1, 1];
        assert_eq!(compute_total(Some(&prices), Some(&quantities), 0), 0.0);
        assert_eq!(compute_total(Some(&prices), Some(&quantities), -1), 0.0);
        assert_eq!(compute_total(Some(&prices), Some(&quantities), i32::MIN), 0.0);
    }

    #[test]
    fn test_count_shorter_than_buffers() {
        let prices = [1.0, 2.0, 100.0];
        let quantities = [2, 3, 1];
        assert_eq!(compute_total(Some(&prices), Some(&quantities), 2), 8.0);
    }

    #[test]
    fn test_count_longer_than_buffer_is_invalid() {
        assert_eq!(compute_total(Some(&[1.0]), Some(&[1, 1]), 2), 0.0);
        assert_eq!(compute_total(Some(&[1.0, 1.0]), Some(&[1]), 2), 0.0);
    }

    #[test]
    fn test_idempotent() {
        let prices = [0.1, 0.2, 0.3, 19.99];
        let quantities = [3, 0, -1, 2];
        let first = compute_total(Some(&prices), Some(&quantities), 4);
        let second = compute_total(Some(&prices), Some(&quantities), 4);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    /// 1e16 + 1.0 rounds back to 1e16, so the sum depends on index order.
    #[test]
    fn test_sum_follows_index_order() {
        let ones = [1, 1, 1];
        assert_eq!(compute_total(Some(&[1e16, 1.0, -1e16]), Some(&ones), 3), 0.0);
        assert_eq!(compute_total(Some(&[1e16, -1e16, 1.0]), Some(&ones), 3), 1.0);
    }

    #[test]
    fn test_inputs_untouched() {
        let prices = vec![2.5, 4.0];
        let quantities = vec![-2, 3];
        let _ = compute_total(Some(&prices), Some(&quantities), 2);
        assert_eq!(prices, vec![2.5, 4.0]);
        assert_eq!(quantities, vec![-2, 3]);
    }

    #[test]
    fn test_strict_matches_silent_on_valid_input() {
        let prices = [2.0, 3.0, 0.25];
        let quantities = [1, 2, -8];
        let strict = try_compute_total(&prices, &quantities).unwrap();
        let silent = compute_total(Some(&prices), Some(&quantities), 3);
        assert_eq!(strict.to_bits(), silent.to_bits());
        assert_eq!(strict, 8.25);
    }

    #[test]
    fn test_strict_reports_malformed_input() {
        assert!(matches!(
            try_compute_total(&[], &[]),
            Err(TotalError::EmptyInput)
        ));
        assert!(matches!(
            try_compute_total(&[1.0, 2.0], &[1]),
            Err(TotalError::LengthMismatch {
                prices: 2,
                quantities: 1
            })
        ));
    }
}

//! # C ABI Exports
//!
//! The stable surface of the pricing module. These signatures must not
//! change without bumping [`ABI_VERSION`].
//!
//! ## Host Call Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Host (JS)                               Module (this file)             │
//! │                                                                         │
//! │  p = vibe_alloc(n * 8) ────────────────► memory.rs                      │
//! │  q = vibe_alloc(n * 4) ────────────────► memory.rs                      │
//! │  HEAPF64.set(prices, p >> 3)                                            │
//! │  HEAP32.set(quantities, q >> 2)                                         │
//! │  total = compute_total(p, q, n) ───────► vibe_core::compute_total       │
//! │  vibe_dealloc(p, n * 8); vibe_dealloc(q, n * 4)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this file allocates or logs.

use std::slice;

use vibe_core::total;

/// C ABI version.
pub const ABI_VERSION: u32 = 1;

/// Returns the ABI version so hosts can check compatibility at load time.
#[no_mangle]
pub extern "C" fn abi_version() -> u32 {
    ABI_VERSION
}

/// Sums `prices[i] × max(quantities[i], 1)` for `i in 0..n`.
///
/// Returns `0.0` without reading memory when either pointer is null or
/// `n <= 0`.
///
/// # Safety
/// When both pointers are non-null and `n > 0`:
/// - `prices` must point to `n` initialized, properly aligned `f64` values
/// - `quantities` must point to `n` initialized, properly aligned `i32` values
/// - neither buffer may be written to or freed until the call returns
#[no_mangle]
pub unsafe extern "C" fn compute_total(prices: *const f64, quantities: *const i32, n: i32) -> f64 {
    if prices.is_null() || quantities.is_null() || n <= 0 {
        return 0.0;
    }

    let len = n as usize;
    // SAFETY: non-null and sized by `n`, per the caller contract above.
    let (prices, quantities) = unsafe {
        (
            slice::from_raw_parts(prices, len),
            slice::from_raw_parts(quantities, len),
        )
    };

    total::compute_total(Some(prices), Some(quantities), n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_abi_version() {
        assert_eq!(abi_version(), 1);
    }

    #[test]
    fn test_compute_total_over_raw_buffers() {
        let prices = [2.0, 3.0];
        let quantities = [1, 2];
        let total = unsafe { compute_total(prices.as_ptr(), quantities.as_ptr(), 2) };
        assert_eq!(total, 8.0);
    }

    #[test]
    fn test_compute_total_clamps_quantities() {
        let prices = [5.0];
        assert_eq!(unsafe { compute_total(prices.as_ptr(), [0].as_ptr(), 1) }, 5.0);
        assert_eq!(unsafe { compute_total(prices.as_ptr(), [-3].as_ptr(), 1) }, 5.0);
    }

    #[test]
    fn test_compute_total_null_pointers() {
        let quantities = [1];
        let prices = [1.0];
        assert_eq!(unsafe { compute_total(ptr::null(), quantities.as_ptr(), 1) }, 0.0);
        assert_eq!(unsafe { compute_total(prices.as_ptr(), ptr::null(), 1) }, 0.0);
        assert_eq!(unsafe { compute_total(ptr::null(), ptr::null(), 0) }, 0.0);
    }

    #[test]
    fn test_compute_total_non_positive_count() {
        let prices = [1.0];
        let quantities = [1];
        assert_eq!(unsafe { compute_total(prices.as_ptr(), quantities.as_ptr(), 0) }, 0.0);
        assert_eq!(unsafe { compute_total(prices.as_ptr(), quantities.as_ptr(), -5) }, 0.0);
    }
}

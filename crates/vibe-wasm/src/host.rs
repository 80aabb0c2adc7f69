//! # Host Marshalling
//!
//! Turns host-side cart lines into the paired buffers the ABI expects.
//!
//! ## Normalization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  LineInput { price, quantity }          TotalRequest buffers            │
//! │                                                                         │
//! │  price    NaN         ──────────────►   0.0                             │
//! │  price    otherwise   ──────────────►   unchanged (±inf included)       │
//! │  quantity < 1         ──────────────►   1                               │
//! │  quantity > i32::MAX  ──────────────►   low 32 bits (Int32Array store)  │
//! │                                                                         │
//! │  more than max_lines  ──────────────►   BridgeError::TooManyLines       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A wrapped quantity can land below one; the module's own clamp then counts
//! that line as a single unit, same as a JavaScript host writing the value
//! into an `Int32Array`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vibe_core::validation::{normalize_price, normalize_quantity};
use vibe_core::{Cart, Money};

use crate::abi;
use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::memory::ModuleBuffer;

fn one() -> i64 {
    1
}

/// A cart line as the host sends it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineInput {
    pub price: f64,
    #[serde(default = "one")]
    pub quantity: i64,
}

/// Total returned to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalResponse {
    pub lines: usize,
    pub total: f64,
    /// Total rounded to cents with the configured currency symbol.
    pub display: String,
}

// =============================================================================
// Total Request
// =============================================================================

/// Normalized, paired buffers ready for [`abi::compute_total`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TotalRequest {
    prices: Vec<f64>,
    quantities: Vec<i32>,
}

impl TotalRequest {
    /// Normalizes host lines into buffers.
    ///
    /// ## Errors
    /// [`BridgeError::TooManyLines`] when `lines` exceeds `config.max_lines`.
    pub fn from_lines(lines: &[LineInput], config: &BridgeConfig) -> Result<Self, BridgeError> {
        check_line_count(lines.len(), config)?;

        let mut repaired_prices = 0usize;
        let mut prices = Vec::with_capacity(lines.len());
        let mut quantities = Vec::with_capacity(lines.len());

        for line in lines {
            let price = normalize_price(line.price);
            if line.price.is_nan() {
                repaired_prices += 1;
            }
            prices.push(price);
            quantities.push(normalize_quantity(line.quantity));
        }

        if repaired_prices > 0 {
            warn!(repaired_prices, "NaN prices replaced with 0.0");
        }
        debug!(lines = lines.len(), "Total request marshalled");

        Ok(TotalRequest { prices, quantities })
    }

    /// Takes the cart's buffers as they are.
    pub fn from_cart(cart: &Cart, config: &BridgeConfig) -> Result<Self, BridgeError> {
        check_line_count(cart.item_count(), config)?;

        Ok(TotalRequest {
            prices: cart.price_buffer(),
            quantities: cart.quantity_buffer(),
        })
    }

    /// Number of paired entries.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Checks if there is nothing to total.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn quantities(&self) -> &[i32] {
        &self.quantities
    }

    /// Element count for the ABI. Bounded by `check_line_count`.
    fn count(&self) -> i32 {
        i32::try_from(self.len()).unwrap_or(0)
    }

    /// Calls the exported total on the request's own buffers.
    pub fn compute(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        // SAFETY: both vectors hold `count()` elements and outlive the call.
        unsafe { abi::compute_total(self.prices.as_ptr(), self.quantities.as_ptr(), self.count()) }
    }

    /// Copies both buffers into module memory, calls the exported total on
    /// the copies and frees them, the way a JavaScript host does.
    ///
    /// ## Errors
    /// [`BridgeError::Allocation`] when module memory is exhausted.
    pub fn compute_in_module_memory(&self) -> Result<f64, BridgeError> {
        if self.is_empty() {
            return Ok(0.0);
        }

        let prices = ModuleBuffer::copy_from(&self.prices).ok_or(BridgeError::Allocation {
            bytes: std::mem::size_of_val(self.prices.as_slice()),
        })?;
        let quantities = ModuleBuffer::copy_from(&self.quantities).ok_or(BridgeError::Allocation {
            bytes: std::mem::size_of_val(self.quantities.as_slice()),
        })?;

        // SAFETY: both buffers hold `count()` copied elements and live until
        // the end of this function.
        let total = unsafe {
            abi::compute_total(prices.as_ptr::<f64>(), quantities.as_ptr::<i32>(), self.count())
        };

        debug!(
            price_bytes = prices.len_bytes(),
            quantity_bytes = quantities.len_bytes(),
            "Total computed in module memory"
        );

        Ok(total)
    }

    /// Computes and packages the total for the host.
    pub fn respond(&self, config: &BridgeConfig) -> TotalResponse {
        let total = self.compute();
        TotalResponse {
            lines: self.len(),
            total,
            display: display_total(total, &config.currency_symbol),
        }
    }
}

/// Formats a total for display. Non-finite totals are shown as-is instead of
/// being rounded to cents.
fn display_total(total: f64, symbol: &str) -> String {
    if total.is_finite() {
        return Money::from_amount(total).format_with(symbol);
    }
    if total.is_nan() {
        "NaN".to_string()
    } else if total > 0.0 {
        format!("{}Infinity", symbol)
    } else {
        format!("-{}Infinity", symbol)
    }
}

fn check_line_count(count: usize, config: &BridgeConfig) -> Result<(), BridgeError> {
    let max = config.max_lines.min(i32::MAX as usize);
    if count > max {
        return Err(BridgeError::TooManyLines { count, max });
    }
    Ok(())
}

/// Decodes a JSON array of [`LineInput`] and totals it.
///
/// ## Example
/// ```rust
/// use vibe_wasm::config::BridgeConfig;
/// use vibe_wasm::host::total_from_json;
///
/// let payload = r#"[{"price": 2.0, "quantity": 1}, {"price": 3.0, "quantity": 2}]"#;
/// let response = total_from_json(payload, &BridgeConfig::default()).unwrap();
/// assert_eq!(response.total, 8.0);
/// assert_eq!(response.display, "$8.00");
/// ```
pub fn total_from_json(payload: &str, config: &BridgeConfig) -> Result<TotalResponse, BridgeError> {
    let lines: Vec<LineInput> = serde_json::from_str(payload)?;
    let request = TotalRequest::from_lines(&lines, config)?;
    Ok(request.respond(config))
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Error Types
//!
//! Domain-specific error types for vibe-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vibe-core errors (this file)                                          │
//! │  ├── TotalError       - Strict total calculation (opt-in)              │
//! │  ├── CoreError        - Cart and catalog rule violations               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  vibe-wasm errors (separate crate)                                     │
//! │  ├── BridgeError      - Host marshalling failures                      │
//! │  └── ConfigError      - Environment configuration                      │
//! │                                                                         │
//! │  NOT here: compute_total has no error channel (returns 0.0)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Total Error
// =============================================================================

/// Malformed input reported by [`crate::total::try_compute_total`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TotalError {
    /// Both buffers are empty.
    #[error("No line items to total")]
    EmptyInput,

    /// Price and quantity buffers are not paired one to one.
    #[error("Price buffer has {prices} entries but quantity buffer has {quantities}")]
    LengthMismatch { prices: usize, quantities: usize },

    /// Buffer length does not fit the `i32` element count of the module ABI.
    #[error("{len} line items exceed the maximum element count")]
    CountOverflow { len: usize },
}

// =============================================================================
// Core Error
// =============================================================================

/// Cart and catalog errors.
///
/// These represent storefront rule violations. The frontend turns them into
/// an alert for the shopper.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product has no stock left.
    ///
    /// ## When This Occurs
    /// - Shopper clicks "add" on a product with `stock <= 0`
    #[error("Product {name} is out of stock")]
    OutOfStock { product_id: String, name: String },

    /// Cart already holds every available unit of the product.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (in cart: 3)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// StockLimitReached { name: "Mouse", available: 3 }
    ///      │
    ///      ▼
    /// UI shows: "No more units of Mouse in stock"
    /// ```
    #[error("No more units of {name} in stock (available {available})")]
    StockLimitReached {
        product_id: String,
        name: String,
        available: i64,
    },

    /// Product is not in the cart.
    #[error("Product {0} not in cart")]
    ItemNotInCart(String),

    /// Checkout attempted with nothing in the cart.
    #[error("The cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Checkout link could not be built.
    #[error("Invalid order link: {0}")]
    OrderLink(#[from] url::ParseError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation of admin-entered product data.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Field must contain digits only.
    #[error("{field} must contain only digits")]
    NotDigits { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Validation Module
//!
//! Input validation and normalization rules for catalog data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Admin form (frontend)                                        │
//! │  └── required fields, numeric inputs                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── validate_new_product  (reject)                                    │
//! │  └── clamp_stock / normalize_* (repair)                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: compute_total                                                │
//! │  └── never rejects: missing buffers → 0.0, quantity < 1 → 1            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::NewProduct;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product name.
pub const MAX_NAME_LEN: usize = 200;

/// Longest accepted product description.
pub const MAX_DESCRIPTION_LEN: usize = 2000;

// =============================================================================
// Product Validators
// =============================================================================

/// Validates an admin-entered product draft.
///
/// ## Rules
/// - `name` and `description` must not be blank
/// - `name` at most [`MAX_NAME_LEN`] characters, `description` at most
///   [`MAX_DESCRIPTION_LEN`]
/// - `price` must be finite and not negative (zero is a free item)
/// - `stock` must not be negative
///
/// ## Example
/// ```rust
/// use vibe_core::types::NewProduct;
/// use vibe_core::validation::validate_new_product;
///
/// let draft = NewProduct {
///     name: "Audífonos".to_string(),
///     description: "Bluetooth".to_string(),
///     price: 25.0,
///     stock: 10,
///     ..Default::default()
/// };
/// assert!(validate_new_product(&draft).is_ok());
/// ```
pub fn validate_new_product(draft: &NewProduct) -> ValidationResult<()> {
    validate_text("name", &draft.name, MAX_NAME_LEN)?;
    validate_text("description", &draft.description, MAX_DESCRIPTION_LEN)?;
    validate_price(draft.price)?;

    if draft.stock < 0 {
        return Err(ValidationError::Negative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }
    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }
    Ok(())
}

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Normalization
// =============================================================================

/// Clamps a stock level to zero (stock never goes negative after a sale).
///
/// ## Example
/// ```rust
/// use vibe_core::validation::clamp_stock;
///
/// assert_eq!(clamp_stock(4), 4);
/// assert_eq!(clamp_stock(-2), 0);
/// ```
#[inline]
pub const fn clamp_stock(stock: i64) -> i64 {
    if stock < 0 {
        0
    } else {
        stock
    }
}

/// Replaces a NaN price with `0.0` before it reaches a buffer.
///
/// Infinities pass through, so an infinite price yields an infinite total.
#[inline]
pub fn normalize_price(price: f64) -> f64 {
    if price.is_nan() {
        0.0
    } else {
        price
    }
}

/// Floors a host quantity at one and stores it as `i32`.
///
/// Out-of-range values keep their low 32 bits, the way a store into an
/// `Int32Array` does. A result below one is then counted as a single unit by
/// [`crate::total::effective_quantity`].
///
/// ## Example
/// ```rust
/// use vibe_core::validation::normalize_quantity;
///
/// assert_eq!(normalize_quantity(3), 3);
/// assert_eq!(normalize_quantity(0), 1);
/// assert_eq!(normalize_quantity(1 << 31), i32::MIN);
/// assert_eq!(normalize_quantity((1 << 32) + 3), 3);
/// ```
#[inline]
pub const fn normalize_quantity(quantity: i64) -> i32 {
    let floored = if quantity < 1 { 1 } else { quantity };
    floored as i32
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewProduct {
        NewProduct {
            name: "Monitor".to_string(),
            description: "27 pulgadas".to_string(),
            price: 199.99,
            stock: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_new_product() {
        assert!(validate_new_product(&draft()).is_ok());

        let free = NewProduct {
            price: 0.0,
            ..draft()
        };
        assert!(validate_new_product(&free).is_ok());
    }

    #[test]
    fn test_validate_new_product_required_fields() {
        let blank_name = NewProduct {
            name: "   ".to_string(),
            ..draft()
        };
        assert!(matches!(
            validate_new_product(&blank_name),
            Err(ValidationError::Required { field }) if field == "name"
        ));

        let blank_description = NewProduct {
            description: String::new(),
            ..draft()
        };
        assert!(validate_new_product(&blank_description).is_err());

        let long_name = NewProduct {
            name: "A".repeat(MAX_NAME_LEN + 1),
            ..draft()
        };
        assert!(matches!(
            validate_new_product(&long_name),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_new_product_numbers() {
        let negative_price = NewProduct {
            price: -1.0,
            ..draft()
        };
        assert!(matches!(
            validate_new_product(&negative_price),
            Err(ValidationError::Negative { .. })
        ));

        let nan_price = NewProduct {
            price: f64::NAN,
            ..draft()
        };
        assert!(matches!(
            validate_new_product(&nan_price),
            Err(ValidationError::NotFinite { .. })
        ));

        let negative_stock = NewProduct {
            stock: -1,
            ..draft()
        };
        assert!(validate_new_product(&negative_stock).is_err());
    }

    #[test]
    fn test_normalize_price() {
        assert_eq!(normalize_price(12.5), 12.5);
        assert_eq!(normalize_price(-3.0), -3.0);
        assert_eq!(normalize_price(f64::NAN), 0.0);
        assert_eq!(normalize_price(f64::INFINITY), f64::INFINITY);
        assert_eq!(normalize_price(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_normalize_quantity() {
        assert_eq!(normalize_quantity(1), 1);
        assert_eq!(normalize_quantity(-9), 1);
        assert_eq!(normalize_quantity(i64::from(i32::MAX)), i32::MAX);
        // Wraps like an Int32Array store
        assert_eq!(normalize_quantity(i64::from(i32::MAX) + 1), i32::MIN);
        assert_eq!(normalize_quantity(i64::MAX), -1);
    }

    #[test]
    fn test_clamp_stock() {
        assert_eq!(clamp_stock(0), 0);
        assert_eq!(clamp_stock(i64::MIN), 0);
        assert_eq!(clamp_stock(12), 12);
    }
}

//! # Host Error Types
//!
//! Errors raised while marshalling host data into the module, and the
//! serializable shape handed back to a JavaScript host.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Host payload ──► TotalRequest::from_lines ──► BridgeError ──┐          │
//! │                                                              │          │
//! │  Cart action  ──► vibe_core::Cart ───────────► CoreError ────┴─► HostError
//! │                                                          { code, message }
//! │  compute_total ─► never fails, returns 0.0 on bad input                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;
use vibe_core::CoreError;

/// Errors from host-side marshalling.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// More lines than the configured limit.
    #[error("{count} cart lines exceed the limit of {max}")]
    TooManyLines { count: usize, max: usize },

    /// Host payload is not a valid line array.
    #[error("Invalid payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Module memory could not be allocated.
    #[error("Could not allocate {bytes} bytes of module memory")]
    Allocation { bytes: usize },
}

/// Error as returned to the host.
///
/// ```json
/// { "code": "TOO_MANY_LINES", "message": "1200 cart lines exceed the limit of 1000" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for host responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Payload could not be decoded
    InvalidPayload,

    /// Request exceeds configured limits
    TooManyLines,

    /// Cart operation failed
    CartError,

    /// Product has no stock (left)
    OutOfStock,

    /// Module-side failure
    Internal,
}

impl HostError {
    /// Creates a new host error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        HostError {
            code,
            message: message.into(),
        }
    }
}

impl From<BridgeError> for HostError {
    fn from(err: BridgeError) -> Self {
        match err {
            BridgeError::TooManyLines { .. } => HostError::new(ErrorCode::TooManyLines, err.to_string()),
            BridgeError::Payload(_) => HostError::new(ErrorCode::InvalidPayload, err.to_string()),
            BridgeError::Allocation { bytes } => {
                tracing::error!(bytes, "Module allocation failed");
                HostError::new(ErrorCode::Internal, "Module memory exhausted")
            }
        }
    }
}

impl From<CoreError> for HostError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::OutOfStock { .. } | CoreError::StockLimitReached { .. } => ErrorCode::OutOfStock,
            CoreError::ItemNotInCart(_) | CoreError::EmptyCart => ErrorCode::CartError,
            CoreError::Validation(_) => ErrorCode::ValidationError,
            CoreError::OrderLink(_) => ErrorCode::Internal,
        };
        HostError::new(code, err.to_string())
    }
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for HostError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_error_to_host_error() {
        let host: HostError = BridgeError::TooManyLines { count: 5, max: 2 }.into();
        assert_eq!(host.code, ErrorCode::TooManyLines);
        assert_eq!(host.message, "5 cart lines exceed the limit of 2");

        let host: HostError = BridgeError::Allocation { bytes: 64 }.into();
        assert_eq!(host.code, ErrorCode::Internal);
    }

    #[test]
    fn test_core_error_to_host_error() {
        let host: HostError = CoreError::EmptyCart.into();
        assert_eq!(host.code, ErrorCode::CartError);

        let host: HostError = CoreError::OutOfStock {
            product_id: "p1".to_string(),
            name: "Mouse".to_string(),
        }
        .into();
        assert_eq!(host.code, ErrorCode::OutOfStock);
        assert_eq!(host.to_string(), "[OutOfStock] Product Mouse is out of stock");
    }

    #[test]
    fn test_host_error_serialization() {
        let host = HostError::new(ErrorCode::InvalidPayload, "bad");
        let json = serde_json::to_string(&host).unwrap();
        assert_eq!(json, r#"{"code":"INVALID_PAYLOAD","message":"bad"}"#);
    }
}

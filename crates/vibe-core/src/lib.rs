//! # vibe-core: Pure Pricing Logic for VibeMarket
//!
//! This crate holds the storefront's business logic as pure functions with
//! zero I/O dependencies. Its centerpiece is [`total::compute_total`], the
//! routine the WebAssembly module exports to the browser.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       VibeMarket Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront (browser)                         │   │
//! │  │    Catalog ──► Cart ──► Footer total ──► Order message          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Float64Array / Int32Array              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 vibe-wasm (portable module)                     │   │
//! │  │    compute_total(ptr, ptr, n) • alloc • dealloc                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vibe-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   total   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │ compute_  │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │  total    │  │  display  │  │ CartItem  │  │  clamps   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ALLOCATION IN THE TOTAL • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`total`] - The total calculator (silent and strict variants)
//! - [`money`] - Integer-cents display money
//! - [`types`] - Catalog types (Product, NewProduct, CategoryFilter)
//! - [`catalog`] - Category listing and filtering
//! - [`cart`] - Cart, checkout summary, stock write-back
//! - [`validation`] - Product validation and buffer normalization
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use vibe_core::compute_total;
//!
//! // Zero and negative quantities count as one unit
//! let total = compute_total(Some(&[2.0, 3.0, 5.0]), Some(&[1, 2, 0]), 3);
//! assert_eq!(total, 13.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod total;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals, OrderSummary, StockUpdate, WHATSAPP_SEND_URL};
pub use error::{CoreError, CoreResult, TotalError, ValidationError};
pub use money::Money;
pub use total::{compute_total, effective_quantity, try_compute_total};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Image shown for products saved without one.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200?text=Sin+Imagen";

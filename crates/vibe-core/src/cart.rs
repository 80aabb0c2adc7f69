//! # Cart
//!
//! The shopper's cart and the buffers it hands to the pricing module.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Cart Method             Cart Change           │
//! │  ───────────────          ───────────             ───────────           │
//! │                                                                         │
//! │  Click "Add" ────────────► add_product() ───────► push or qty + 1       │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ───────► items.retain(..)      │
//! │                                                                         │
//! │  Click Empty ────────────► clear() ─────────────► items.clear()         │
//! │                                                                         │
//! │  Footer ─────────────────► total() ─────────────► compute_total(..)     │
//! │                                                                         │
//! │  Checkout ───────────────► order_summary()      (read only)             │
//! │                            stock_updates()                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `product_id` (adding the same product bumps quantity)
//! - A line never holds more units than the product's stock when added

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use url::Url;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::total::compute_total;
use crate::types::Product;
use crate::validation::clamp_stock;

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
///
/// Name, price and stock are frozen when the product is first added, so the
/// cart keeps showing the same price if the catalog changes underneath it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    /// Unit price at time of adding (frozen).
    pub unit_price: f64,
    pub quantity: i32,
    /// Stock at time of adding; used to compute the post-checkout stock.
    pub stock: i64,
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a one-unit line from a product.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
            stock: product.stock,
            added_at: Utc::now(),
        }
    }

    /// Unit price rounded to cents for display.
    pub fn unit_price_money(&self) -> Money {
        Money::from_amount(self.unit_price)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    pub items: Vec<CartItem>,

    /// When the cart was created/last cleared
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of `product`.
    ///
    /// ## Errors
    /// - [`CoreError::OutOfStock`] when the product has no stock
    /// - [`CoreError::StockLimitReached`] when the cart already holds every
    ///   available unit
    pub fn add_product(&mut self, product: &Product) -> CoreResult<()> {
        if !product.is_available() {
            return Err(CoreError::OutOfStock {
                product_id: product.id.clone(),
                name: product.name.clone(),
            });
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            if i64::from(item.quantity) >= product.stock || item.quantity == i32::MAX {
                return Err(CoreError::StockLimitReached {
                    product_id: product.id.clone(),
                    name: product.name.clone(),
                    available: product.stock,
                });
            }
            item.quantity += 1;
            return Ok(());
        }

        self.items.push(CartItem::from_product(product));
        Ok(())
    }

    /// Removes a line by product ID.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CoreError::ItemNotInCart(product_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total number of units across all lines.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|i| i64::from(i.quantity)).sum()
    }

    /// Unit prices in line order, paired with [`Cart::quantity_buffer`].
    pub fn price_buffer(&self) -> Vec<f64> {
        self.items.iter().map(|i| i.unit_price).collect()
    }

    /// Quantities in line order, paired with [`Cart::price_buffer`].
    pub fn quantity_buffer(&self) -> Vec<i32> {
        self.items.iter().map(|i| i.quantity).collect()
    }

    /// Cart total, computed by the same routine the module exports.
    ///
    /// A cart with more lines than `i32::MAX` cannot be passed to the module
    /// and totals `0.0`, like any other invalid count.
    pub fn total(&self) -> f64 {
        total_lines(&self.price_buffer(), &self.quantity_buffer(), self.items.len())
    }

    /// Cart total rounded to cents.
    pub fn total_money(&self) -> Money {
        Money::from_amount(self.total())
    }

    /// Stock levels to write back after checkout, never below zero.
    pub fn stock_updates(&self) -> Vec<StockUpdate> {
        self.items
            .iter()
            .map(|i| StockUpdate {
                product_id: i.product_id.clone(),
                stock: clamp_stock(i.stock - i64::from(i.quantity)),
            })
            .collect()
    }

    /// Builds the order message sent to the store at checkout.
    ///
    /// ## Errors
    /// [`CoreError::EmptyCart`] when there is nothing to order.
    pub fn order_summary(&self) -> CoreResult<OrderSummary> {
        if self.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let lines = self
            .items
            .iter()
            .map(|i| format!("- {}x {} ({} c/u)", i.quantity, i.name, i.unit_price_money()))
            .collect();

        Ok(OrderSummary {
            lines,
            total_items: self.total_items(),
            total: self.total_money(),
        })
    }
}

/// Totals `lines` paired entries; `0.0` when the count does not fit the
/// module's `i32` element count.
fn total_lines(prices: &[f64], quantities: &[i32], lines: usize) -> f64 {
    match i32::try_from(lines) {
        Ok(n) => compute_total(Some(prices), Some(quantities), n),
        Err(_) => 0.0,
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Checkout Types
// =============================================================================

/// New stock level for one product after checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StockUpdate {
    pub product_id: String,
    pub stock: i64,
}

/// Cart totals summary for the footer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_items: i64,
    pub total: f64,
    pub total_display: String,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_items: cart.total_items(),
            total: cart.total(),
            total_display: cart.total_money().to_string(),
        }
    }
}

/// Endpoint that opens a chat with the store, prefilled with the order.
pub const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

/// The order as sent to the store.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderSummary {
    /// One `- {qty}x {name} ({price} c/u)` line per cart item.
    pub lines: Vec<String>,
    pub total_items: i64,
    pub total: Money,
}

impl OrderSummary {
    /// Renders the full message text.
    pub fn message(&self) -> String {
        format!(
            "¡Hola! Quisiera realizar este pedido:\n\n{}\n\n*Total a pagar: {}*",
            self.lines.join("\n"),
            self.total
        )
    }

    /// Builds the checkout link: [`WHATSAPP_SEND_URL`] with the store's
    /// `phone` and the encoded [`OrderSummary::message`] as `text`.
    ///
    /// ## Errors
    /// [`ValidationError::Required`] for a blank phone and
    /// [`ValidationError::NotDigits`] when it holds anything but digits.
    pub fn send_url(&self, phone: &str) -> CoreResult<Url> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(ValidationError::Required {
                field: "phone".to_string(),
            }
            .into());
        }
        if !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NotDigits {
                field: "phone".to_string(),
            }
            .into());
        }

        let message = self.message();
        let url = Url::parse_with_params(WHATSAPP_SEND_URL, &[("phone", phone), ("text", &message)])?;
        Ok(url)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

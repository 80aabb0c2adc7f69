//! # Domain Types
//!
//! Catalog types shared by the storefront and the pricing module.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   NewProduct    │   │    Product      │   │ CategoryFilter  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  admin draft    │──►│  id (store key) │   │  All            │       │
//! │  │  (validated)    │   │  price (f64)    │   │  Named(String)  │       │
//! │  │                 │   │  stock (i64)    │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::PLACEHOLDER_IMAGE_URL;

fn default_image() -> String {
    PLACEHOLDER_IMAGE_URL.to_string()
}

// =============================================================================
// Product
// =============================================================================

/// A product listed in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Store identifier. Accepts the document store's `_id` key on input.
    #[serde(alias = "_id")]
    #[ts(rename = "id")]
    pub id: String,

    /// Display name.
    pub name: String,

    /// Short description shown on the product card.
    pub description: String,

    /// Unit price in major currency units.
    pub price: f64,

    /// Units available.
    #[serde(default)]
    pub stock: i64,

    /// Optional category used by the catalog filter.
    #[serde(default)]
    pub category: Option<String>,

    /// Image URL; falls back to the placeholder when missing.
    #[serde(default = "default_image")]
    pub image: String,
}

impl Product {
    /// Checks if at least one unit can be sold.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Returns the unit price rounded to cents for display.
    #[inline]
    pub fn price_money(&self) -> Money {
        Money::from_amount(self.price)
    }
}

// =============================================================================
// New Product
// =============================================================================

/// A product as entered in the admin panel, before the store assigns an id.
///
/// Validate with [`crate::validation::validate_new_product`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewProduct {
    /// Turns the draft into a product with the given store id.
    ///
    /// Empty image URLs and empty categories are treated as absent.
    pub fn into_product(self, id: impl Into<String>) -> Product {
        Product {
            id: id.into(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price,
            stock: self.stock,
            category: self
                .category
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            image: self
                .image
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(default_image),
        }
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// Which products the catalog shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", tag = "kind", content = "name")]
#[ts(export)]
pub enum CategoryFilter {
    /// Every product.
    #[default]
    All,
    /// Products whose category equals the name exactly.
    Named(String),
}

impl CategoryFilter {
    /// Checks if a product passes the filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => product.category.as_deref() == Some(name.as_str()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_defaults_from_json() {
        let json = r#"{
            "_id": "65a1f0c2",
            "name": "Teclado",
            "description": "Mecánico",
            "price": 49.9
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, "65a1f0c2");
        assert_eq!(product.stock, 0);
        assert_eq!(product.category, None);
        assert_eq!(
            product.image,
            "https://via.placeholder.com/300x200?text=Sin+Imagen"
        );
        assert!(!product.is_available());
        assert_eq!(product.price_money().cents(), 4990);
    }

    #[test]
    fn test_product_id_field_name() {
        let product = NewProduct {
            name: "Cable".to_string(),
            description: "USB-C".to_string(),
            price: 3.5,
            ..Default::default()
        }
        .into_product("p9");

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], "p9");
        assert!(json.get("_id").is_none());

        assert!(Product::decl().contains("id: string"));
    }

    #[test]
    fn test_new_product_into_product() {
        let draft = NewProduct {
            name: "  Mouse ".to_string(),
            description: "Inalámbrico".to_string(),
            price: 15.0,
            stock: 4,
            category: Some(" ".to_string()),
            image: Some(String::new()),
        };
        let product = draft.into_product("p1");

        assert_eq!(product.name, "Mouse");
        assert_eq!(product.category, None);
        assert_eq!(product.image, PLACEHOLDER_IMAGE_URL);
        assert!(product.is_available());
    }

    #[test]
    fn test_category_filter_matches() {
        let mut product = NewProduct {
            name: "Cable".to_string(),
            description: "USB-C".to_string(),
            price: 3.5,
            ..Default::default()
        }
        .into_product("p2");

        assert!(CategoryFilter::All.matches(&product));
        assert!(!CategoryFilter::Named("Audio".to_string()).matches(&product));

        product.category = Some("Audio".to_string());
        assert!(CategoryFilter::Named("Audio".to_string()).matches(&product));
    }
}

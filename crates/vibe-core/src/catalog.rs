//! # Catalog
//!
//! Category listing and filtering for the product grid.

use crate::types::{CategoryFilter, Product};

/// Returns the products that pass `filter`, in catalog order.
pub fn filter_by_category<'a>(products: &'a [Product], filter: &CategoryFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

/// Returns the filter buttons: [`CategoryFilter::All`] first, then each
/// non-empty category once, in the order it first appears.
///
/// ## Example
/// ```rust
/// use vibe_core::catalog::categories;
/// use vibe_core::types::CategoryFilter;
///
/// assert_eq!(categories(&[]), vec![CategoryFilter::All]);
/// ```
pub fn categories(products: &[Product]) -> Vec<CategoryFilter> {
    let mut filters = vec![CategoryFilter::All];

    for name in products.iter().filter_map(|p| p.category.as_deref()) {
        if name.is_empty() {
            continue;
        }
        let filter = CategoryFilter::Named(name.to_string());
        if !filters.contains(&filter) {
            filters.push(filter);
        }
    }

    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PLACEHOLDER_IMAGE_URL;

    fn product(id: &str, category: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: "test".to_string(),
            price: 1.0,
            stock: 1,
            category: category.map(str::to_string),
            image: PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }

    #[test]
    fn test_categories_unique_in_first_seen_order() {
        let products = vec![
            product("1", Some("Audio")),
            product("2", None),
            product("3", Some("Video")),
            product("4", Some("Audio")),
            product("5", Some("")),
        ];

        assert_eq!(
            categories(&products),
            vec![
                CategoryFilter::All,
                CategoryFilter::Named("Audio".to_string()),
                CategoryFilter::Named("Video".to_string()),
            ]
        );
    }

    #[test]
    fn test_filter_by_category() {
        let products = vec![
            product("1", Some("Audio")),
            product("2", None),
            product("3", Some("Audio")),
        ];

        let all = filter_by_category(&products, &CategoryFilter::All);
        assert_eq!(all.len(), 3);

        let audio = filter_by_category(&products, &CategoryFilter::Named("Audio".to_string()));
        let ids: Vec<&str> = audio.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        let none = filter_by_category(&products, &CategoryFilter::Named("Gaming".to_string()));
        assert!(none.is_empty());
    }
}

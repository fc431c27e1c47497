//! Pure derivation of the displayed product list from catalog and query.
//!
//! The pipeline is search filter, then category filter, then sort. It never
//! mutates the input collection, and identical inputs always yield identical
//! output, including tie order: the sort is stable, so products comparing
//! equal keep their relative catalog order.

use rust_decimal::Decimal;

use crate::types::Product;

/// Sort keys for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Price, increasing.
    PriceAscending,
    /// Price, decreasing.
    PriceDescending,
    /// Rating, decreasing. Absent ratings compare as 0.
    RatingDescending,
}

impl SortKey {
    /// Parse a sort query value. Unknown values mean "no sort".
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "price_asc" => Some(Self::PriceAscending),
            "price_desc" => Some(Self::PriceDescending),
            "rating_desc" => Some(Self::RatingDescending),
            _ => None,
        }
    }

    /// The query value for this sort key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAscending => "price_asc",
            Self::PriceDescending => "price_desc",
            Self::RatingDescending => "rating_desc",
        }
    }
}

/// The (search, category, sort) tuple driving the derived list.
///
/// Stateless: recomputed from current state on every render, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    /// Case-insensitive substring matched against title and description.
    /// Empty means no search filter.
    pub search: String,
    /// Exact, case-sensitive category label. Empty means all categories.
    pub category: String,
    /// `None` preserves the catalog's original order.
    pub sort: Option<SortKey>,
}

impl ViewQuery {
    /// Derive the display list from the full product collection.
    ///
    /// An empty result is a valid output; callers distinguish "no matches"
    /// from "catalog not yet loaded" via the catalog's loading flag, not via
    /// this function.
    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut list: Vec<Product> = products.to_vec();

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            list.retain(|product| {
                product.title.to_lowercase().contains(&needle)
                    || product
                        .description
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&needle)
            });
        }

        if !self.category.is_empty() {
            list.retain(|product| product.category == self.category);
        }

        match self.sort {
            Some(SortKey::PriceAscending) => list.sort_by(|a, b| a.price.cmp(&b.price)),
            Some(SortKey::PriceDescending) => list.sort_by(|a, b| b.price.cmp(&a.price)),
            Some(SortKey::RatingDescending) => list.sort_by(|a, b| {
                b.rating
                    .unwrap_or(Decimal::ZERO)
                    .cmp(&a.rating.unwrap_or(Decimal::ZERO))
            }),
            None => {}
        }

        list
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    fn product(id: i64, title: &str, price: i64, category: &str, rating: Option<i64>) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            description: None,
            price: Decimal::from(price),
            category: category.to_string(),
            rating: rating.map(Decimal::from),
            image: None,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Red Shirt", 20, "apparel", Some(4)),
            product(2, "Blue Mug", 10, "home", Some(5)),
        ]
    }

    fn ids(list: &[Product]) -> Vec<i64> {
        list.iter().map(|p| p.id.as_i64()).collect()
    }

    #[test]
    fn test_no_query_preserves_catalog_order() {
        let query = ViewQuery::default();
        assert_eq!(ids(&query.apply(&catalog())), vec![1, 2]);
    }

    #[test]
    fn test_price_ascending() {
        let query = ViewQuery {
            sort: Some(SortKey::PriceAscending),
            ..ViewQuery::default()
        };
        assert_eq!(ids(&query.apply(&catalog())), vec![2, 1]);
    }

    #[test]
    fn test_price_descending() {
        let query = ViewQuery {
            sort: Some(SortKey::PriceDescending),
            ..ViewQuery::default()
        };
        assert_eq!(ids(&query.apply(&catalog())), vec![1, 2]);
    }

    #[test]
    fn test_rating_descending_missing_rating_sorts_last() {
        let products = vec![
            product(1, "Unrated", 5, "home", None),
            product(2, "Top", 5, "home", Some(5)),
            product(3, "Mid", 5, "home", Some(3)),
        ];
        let query = ViewQuery {
            sort: Some(SortKey::RatingDescending),
            ..ViewQuery::default()
        };
        assert_eq!(ids(&query.apply(&products)), vec![2, 3, 1]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let query = ViewQuery {
            search: "SHIRT".to_string(),
            ..ViewQuery::default()
        };
        assert_eq!(ids(&query.apply(&catalog())), vec![1]);
    }

    #[test]
    fn test_search_matches_description() {
        let mut products = catalog();
        products[1].description = Some("A mug with a shirt print".to_string());
        let query = ViewQuery {
            search: "shirt".to_string(),
            ..ViewQuery::default()
        };
        assert_eq!(ids(&query.apply(&products)), vec![1, 2]);
    }

    #[test]
    fn test_search_missing_description_matches_title_only() {
        let query = ViewQuery {
            search: "mug".to_string(),
            ..ViewQuery::default()
        };
        assert_eq!(ids(&query.apply(&catalog())), vec![2]);
    }

    #[test]
    fn test_search_is_idempotent() {
        let query = ViewQuery {
            search: "shirt".to_string(),
            ..ViewQuery::default()
        };
        let once = query.apply(&catalog());
        let twice = query.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_category_filter_exact_match() {
        let query = ViewQuery {
            category: "home".to_string(),
            ..ViewQuery::default()
        };
        assert_eq!(ids(&query.apply(&catalog())), vec![2]);

        // Case-sensitive: "Home" matches nothing.
        let query = ViewQuery {
            category: "Home".to_string(),
            ..ViewQuery::default()
        };
        assert!(query.apply(&catalog()).is_empty());
    }

    #[test]
    fn test_removing_category_filter_restores_original_order() {
        let filtered = ViewQuery {
            category: "home".to_string(),
            ..ViewQuery::default()
        };
        let unfiltered = ViewQuery::default();

        assert_eq!(ids(&filtered.apply(&catalog())), vec![2]);
        assert_eq!(ids(&unfiltered.apply(&catalog())), vec![1, 2]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_prices() {
        let products = vec![
            product(1, "A", 10, "home", None),
            product(2, "B", 10, "home", None),
            product(3, "C", 5, "home", None),
            product(4, "D", 10, "home", None),
        ];
        let query = ViewQuery {
            sort: Some(SortKey::PriceAscending),
            ..ViewQuery::default()
        };
        // Equal-price products keep their relative input order.
        assert_eq!(ids(&query.apply(&products)), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_input_collection_not_mutated() {
        let products = catalog();
        let query = ViewQuery {
            search: "shirt".to_string(),
            sort: Some(SortKey::PriceDescending),
            ..ViewQuery::default()
        };
        let _ = query.apply(&products);
        assert_eq!(ids(&products), vec![1, 2]);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let query = ViewQuery {
            search: "no such product".to_string(),
            ..ViewQuery::default()
        };
        assert!(query.apply(&catalog()).is_empty());
        assert!(query.apply(&[]).is_empty());
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("price_asc"), Some(SortKey::PriceAscending));
        assert_eq!(SortKey::parse("price_desc"), Some(SortKey::PriceDescending));
        assert_eq!(SortKey::parse("rating_desc"), Some(SortKey::RatingDescending));
        assert_eq!(SortKey::parse(""), None);
        assert_eq!(SortKey::parse("newest"), None);
    }

    #[test]
    fn test_sort_key_roundtrip() {
        for key in [
            SortKey::PriceAscending,
            SortKey::PriceDescending,
            SortKey::RatingDescending,
        ] {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
    }
}

//! Home page route handler: the product grid.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use shubh_core::{Product, SortKey, ViewQuery};

use crate::catalog::Catalog;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub rating: String,
    pub image: Option<String>,
}

/// Format a decimal amount as a price string.
fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: format_price(product.price),
            category: product.category.clone(),
            // Display default for unrated products; the rating sort treats
            // absent ratings as 0, not 4.5.
            rating: product
                .rating
                .map_or_else(|| "4.5".to_string(), |rating| rating.to_string()),
            image: product.image.clone(),
        }
    }
}

/// Grid query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct GridQuery {
    /// Search term.
    pub q: Option<String>,
    /// Category filter; empty or absent means all.
    pub category: Option<String>,
    /// Sort key: `price_asc`, `price_desc`, or `rating_desc`.
    pub sort: Option<String>,
}

impl GridQuery {
    /// Convert the raw query params into the derivation tuple.
    /// Unknown sort values degrade to "no sort" rather than erroring.
    fn view_query(&self) -> ViewQuery {
        ViewQuery {
            search: self.q.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            sort: self.sort.as_deref().and_then(SortKey::parse),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// The derived, ordered product list.
    pub products: Vec<ProductView>,
    /// All category labels for the filter pills.
    pub categories: Vec<String>,
    /// Current search term, echoed into the search box.
    pub search: String,
    /// Currently active category filter ("" = all).
    pub category: String,
    /// Currently active sort value ("" = none).
    pub sort: String,
    /// True while the products fetch is still in flight. Distinct from an
    /// empty result: the template shows a skeleton, not "No products found."
    pub loading: bool,
    /// Total cart quantity for the badge.
    pub cart_count: u32,
}

/// Build the grid template from a catalog snapshot and raw query params.
fn render_grid(catalog: Catalog, query: &GridQuery, cart_count: u32) -> HomeTemplate {
    let view_query = query.view_query();

    let products: Vec<ProductView> = view_query
        .apply(&catalog.products)
        .iter()
        .map(ProductView::from)
        .collect();

    HomeTemplate {
        products,
        categories: catalog.categories,
        search: view_query.search,
        category: view_query.category,
        sort: view_query
            .sort
            .map_or_else(String::new, |key| key.as_str().to_string()),
        loading: catalog.loading,
        cart_count,
    }
}

/// Display the product grid.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>, Query(query): Query<GridQuery>) -> impl IntoResponse {
    let catalog = state.catalog().snapshot();
    let cart_count = state.cart().total_quantity();

    render_grid(catalog, &query, cart_count)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shubh_core::ProductId;

    use super::*;

    #[test]
    fn test_grid_query_maps_to_view_query() {
        let query = GridQuery {
            q: Some("shirt".to_string()),
            category: Some("apparel".to_string()),
            sort: Some("price_asc".to_string()),
        };
        let view = query.view_query();

        assert_eq!(view.search, "shirt");
        assert_eq!(view.category, "apparel");
        assert_eq!(view.sort, Some(SortKey::PriceAscending));
    }

    #[test]
    fn test_grid_query_defaults_are_neutral() {
        let view = GridQuery::default().view_query();

        assert_eq!(view, ViewQuery::default());
    }

    #[test]
    fn test_unknown_sort_degrades_to_none() {
        let query = GridQuery {
            sort: Some("newest".to_string()),
            ..GridQuery::default()
        };
        assert_eq!(query.view_query().sort, None);
    }

    #[test]
    fn test_product_view_formatting() {
        let product = Product {
            id: ProductId::new(1),
            title: "Red Shirt".to_string(),
            description: None,
            price: Decimal::new(1950, 2),
            category: "apparel".to_string(),
            rating: None,
            image: None,
        };
        let view = ProductView::from(&product);

        assert_eq!(view.price, "$19.50");
        assert_eq!(view.rating, "4.5");
        assert_eq!(view.description, "");
    }

    #[test]
    fn test_render_grid_distinguishes_loading_from_no_matches() {
        let product = Product {
            id: ProductId::new(1),
            title: "Red Shirt".to_string(),
            description: None,
            price: Decimal::from(20),
            category: "apparel".to_string(),
            rating: None,
            image: None,
        };

        // Pre-load snapshot: empty collections, loading set.
        let loading_catalog = Catalog {
            products: Vec::new(),
            categories: Vec::new(),
            loading: true,
        };
        let template = render_grid(loading_catalog, &GridQuery::default(), 0);
        assert!(template.loading);
        assert!(template.products.is_empty());

        // Loaded catalog with a query matching nothing: zero results, but
        // not loading.
        let loaded_catalog = Catalog {
            products: vec![product],
            categories: vec!["apparel".to_string()],
            loading: false,
        };
        let query = GridQuery {
            q: Some("no such product".to_string()),
            ..GridQuery::default()
        };
        let template = render_grid(loaded_catalog, &query, 2);
        assert!(!template.loading);
        assert!(template.products.is_empty());
        assert_eq!(template.categories, vec!["apparel"]);
        assert_eq!(template.cart_count, 2);
    }

    #[test]
    fn test_render_grid_applies_query() {
        let catalog = Catalog {
            products: vec![
                Product {
                    id: ProductId::new(1),
                    title: "Red Shirt".to_string(),
                    description: None,
                    price: Decimal::from(20),
                    category: "apparel".to_string(),
                    rating: None,
                    image: None,
                },
                Product {
                    id: ProductId::new(2),
                    title: "Blue Mug".to_string(),
                    description: None,
                    price: Decimal::from(10),
                    category: "home".to_string(),
                    rating: None,
                    image: None,
                },
            ],
            categories: vec!["apparel".to_string(), "home".to_string()],
            loading: false,
        };
        let query = GridQuery {
            sort: Some("price_asc".to_string()),
            ..GridQuery::default()
        };

        let template = render_grid(catalog, &query, 0);
        let titles: Vec<_> = template.products.iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles, vec!["Blue Mug", "Red Shirt"]);
        assert_eq!(template.sort, "price_asc");
    }

    #[test]
    fn test_product_view_keeps_explicit_rating() {
        let product = Product {
            id: ProductId::new(2),
            title: "Blue Mug".to_string(),
            description: Some("A mug".to_string()),
            price: Decimal::from(10),
            category: "home".to_string(),
            rating: Some(Decimal::from(5)),
            image: Some("https://cdn.example/mug.png".to_string()),
        };
        let view = ProductView::from(&product);

        assert_eq!(view.rating, "5");
        assert_eq!(view.price, "$10.00");
    }
}

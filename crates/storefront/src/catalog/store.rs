//! In-memory catalog snapshot, populated by a background load.
//!
//! The app starts immediately with an empty catalog marked `loading`. A
//! background task fetches products and categories and swaps the results in;
//! readers always see either the initial empty snapshot or fully-replaced
//! collections, never a half-written one.

use std::sync::{Arc, RwLock};

use tracing::instrument;

use shubh_core::{Category, Product};

use super::CatalogClient;

/// A catalog snapshot: the product and category collections for one session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All products, in backend order.
    pub products: Vec<Product>,
    /// All category labels, in backend order.
    pub categories: Vec<Category>,
    /// True until the products fetch has resolved, success or failure.
    /// The categories fetch does not gate this flag.
    pub loading: bool,
}

impl Catalog {
    /// The pre-load snapshot: empty collections, loading set.
    fn initial() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            loading: true,
        }
    }
}

/// Holder for the current catalog snapshot.
///
/// `load` replaces each collection wholesale. A retrieval failure empties the
/// affected half rather than leaving it stale or partially filled; no error
/// propagates past this type.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<Catalog>>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// Create a store holding the initial loading snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Catalog::initial())),
        }
    }

    /// Get a clone of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Catalog {
        self.inner
            .read()
            .map(|catalog| catalog.clone())
            .unwrap_or_default()
    }

    /// Fetch both collections and swap the results in.
    ///
    /// The two fetches are issued concurrently and resolved independently:
    /// each failure is caught here and converted to an empty collection for
    /// that half, and the products half clears the loading flag the moment it
    /// resolves without waiting for categories. There are no retries; the
    /// owner may call `load` again for a fresh session.
    #[instrument(skip(self, client))]
    pub async fn load(&self, client: &CatalogClient) {
        if let Ok(mut catalog) = self.inner.write() {
            catalog.loading = true;
        }

        let products_half = async {
            let products = client.fetch_products().await.unwrap_or_else(|e| {
                tracing::warn!("Failed to fetch products: {e}");
                Vec::new()
            });
            let count = products.len();
            if let Ok(mut catalog) = self.inner.write() {
                catalog.products = products;
                catalog.loading = false;
            }
            tracing::info!(products = count, "Product catalog loaded");
        };

        let categories_half = async {
            let categories = client.fetch_categories().await.unwrap_or_else(|e| {
                tracing::warn!("Failed to fetch categories: {e}");
                Vec::new()
            });
            if let Ok(mut catalog) = self.inner.write() {
                catalog.categories = categories;
            }
        };

        tokio::join!(products_half, categories_half);
    }
}

//! Application state shared across handlers.

use std::sync::{Arc, RwLock};

use shubh_core::{Cart, Product};

use crate::catalog::{CatalogClient, CatalogStore};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It is the single owner of
/// catalog and cart state; route handlers read snapshots and dispatch
/// actions, they never hold mutable state of their own.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    client: CatalogClient,
    catalog: CatalogStore,
    // Session cart: lives for the process lifetime, no persistence.
    cart: RwLock<Cart>,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let client = CatalogClient::new(config.backend_url.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                client,
                catalog: CatalogStore::new(),
                cart: RwLock::new(Cart::new()),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Start loading the catalog in the background.
    ///
    /// The server begins serving immediately; the home page renders its
    /// loading state until the products fetch resolves.
    pub fn start_catalog_load(&self) {
        let catalog = self.inner.catalog.clone();
        let client = self.inner.client.clone();
        tokio::spawn(async move {
            catalog.load(&client).await;
        });
    }

    /// Get a clone of the current cart.
    #[must_use]
    pub fn cart(&self) -> Cart {
        self.inner
            .cart
            .read()
            .map(|cart| cart.clone())
            .unwrap_or_default()
    }

    /// Add one unit of `product` to the cart and return the new total count.
    ///
    /// The stored cart is replaced with the aggregator's new value; the count
    /// is the recomputed sum of line quantities.
    pub fn add_to_cart(&self, product: &Product) -> u32 {
        self.inner.cart.write().map_or(0, |mut cart| {
            let next = cart.with_added(product);
            let count = next.total_quantity();
            *cart = next;
            count
        })
    }
}

//! HTTP client for the backend catalog API.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use shubh_core::{Category, Product};

use super::CatalogError;

/// Client for the backend catalog API.
///
/// The contract is plain JSON over HTTP with no pagination or streaming: each
/// endpoint returns its entire collection in one round trip.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a new catalog client for the given backend base URL.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url,
            }),
        }
    }

    /// Execute a GET against `path` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = self.inner.base_url.join(path)?;
        let response = self.inner.client.get(url).send().await?;

        let status = response.status();

        // Read the body as text first for better error diagnostics.
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Backend returned non-success status"
            );
            return Err(CatalogError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse backend response"
            );
            CatalogError::Parse(e)
        })
    }

    /// Fetch the full product collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend returns a
    /// non-success status, or the body is not a JSON list of products.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_json("/api/products").await
    }

    /// Fetch the category labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend returns a
    /// non-success status, or the body is not a JSON list of strings.
    #[instrument(skip(self))]
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.get_json("/api/categories").await
    }
}

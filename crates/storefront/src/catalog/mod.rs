//! Catalog retrieval and the in-memory catalog store.
//!
//! # Architecture
//!
//! - The backend is the source of truth; the store holds one wholesale
//!   snapshot per load, never a partial update
//! - Products and categories come from two independent fetches; a failure in
//!   one must not block or corrupt the other
//! - A failed fetch yields an empty collection for that half, silently: the
//!   page shows its empty state rather than an error dialog
//!
//! # Example
//!
//! ```rust,ignore
//! use shubh_storefront::catalog::{CatalogClient, CatalogStore};
//!
//! let client = CatalogClient::new(config.backend_url.clone());
//! let store = CatalogStore::new();
//!
//! // Serve immediately; the snapshot flips out of `loading` when the
//! // products fetch resolves.
//! store.load(&client).await;
//! let catalog = store.snapshot();
//! ```

mod client;
mod store;

pub use client::CatalogClient;
pub use store::{Catalog, CatalogStore};

use thiserror::Error;

/// Errors that can occur when fetching from the backend catalog API.
///
/// All variants are handled identically by the store: the affected half of
/// the catalog becomes empty for the session.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status.
    #[error("Backend returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Endpoint path could not be joined onto the base URL.
    #[error("Invalid backend URL: {0}")]
    Url(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Backend returned 500 Internal Server Error: boom"
        );
    }
}

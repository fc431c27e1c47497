//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /            - Product grid (search / category / sort via query params)
//! GET  /health      - Health check
//!
//! # Cart (HTMX fragments)
//! POST /cart/add    - Add a product (returns count badge, triggers cart-updated)
//! GET  /cart/count  - Cart count badge (fragment)
//! ```

pub mod cart;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page (the product grid)
        .route("/", get(home::home))
        // Cart routes
        .nest("/cart", cart_routes())
}

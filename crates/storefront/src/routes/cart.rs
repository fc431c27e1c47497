//! Cart route handlers.
//!
//! Cart updates use HTMX fragments for dynamic updates without full page
//! reloads. The cart lives in application state for the lifetime of the
//! process; there is no persistence across restarts.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use shubh_core::ProductId;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Add one unit of a product to the cart (HTMX).
///
/// The product is looked up in the current catalog snapshot, so the cart
/// line freezes the fields as they are right now. Returns the cart count
/// badge with an HTMX trigger to update other elements.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let id = form
        .product_id
        .parse::<i64>()
        .map(ProductId::new)
        .map_err(|_| AppError::BadRequest(format!("invalid product id: {}", form.product_id)))?;

    let catalog = state.catalog().snapshot();
    let product = catalog
        .products
        .iter()
        .find(|product| product.id == id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let count = state.add_to_cart(product);

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate { count },
    )
        .into_response())
}

/// Get the cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.cart().total_quantity(),
    }
}

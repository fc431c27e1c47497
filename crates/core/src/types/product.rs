//! Product and category records as served by the backend catalog API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A category label.
///
/// Categories are a flat set of strings with no hierarchy; the backend serves
/// them as a plain list.
pub type Category = String;

/// A single product record from the backend catalog.
///
/// Records are immutable once fetched: the catalog replaces the whole
/// collection on a fresh fetch rather than patching individual records, so a
/// `Product` held anywhere (e.g. frozen into a cart line) never changes
/// underneath its holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Longer description; absent records are treated as empty text when
    /// searching.
    #[serde(default)]
    pub description: Option<String>,
    /// Non-negative price in the shop currency.
    pub price: Decimal,
    /// Category label, matched exactly (case-sensitive) when filtering.
    pub category: String,
    /// Customer rating. Absent ratings sort as 0; the UI shows 4.5 instead,
    /// but that is a display default only.
    #[serde(default)]
    pub rating: Option<Decimal>,
    /// Image URL, if the backend has one.
    #[serde(default)]
    pub image: Option<String>,
}

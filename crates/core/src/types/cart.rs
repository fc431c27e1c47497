//! The in-memory session cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::Product;

/// A cart line: a frozen product snapshot plus a quantity.
///
/// At most one line exists per product id; repeated adds merge by
/// incrementing the quantity. The snapshot is taken at insert time, so a
/// later price or title change on the catalog side is not reflected in the
/// line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product as it was when first added.
    pub product: Product,
    /// Number of units, always at least 1.
    pub quantity: u32,
}

/// An in-memory cart for one session.
///
/// Carts are value types: every mutation returns a new `Cart` and leaves the
/// receiver untouched, so state holders that detect change by comparing
/// collections always see a distinct value after an add.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Return a new cart with one more unit of `product`.
    ///
    /// If a line for the product id already exists its quantity is
    /// incremented and its snapshot left untouched; otherwise a new line with
    /// quantity 1 is appended. Relative order of existing lines is preserved.
    #[must_use]
    pub fn with_added(&self, product: &Product) -> Self {
        let mut lines = self.lines.clone();
        if let Some(line) = lines.iter_mut().find(|line| line.product.id == product.id) {
            line.quantity += 1;
        } else {
            lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
        Self { lines }
    }

    /// Total item count: the sum of all line quantities.
    ///
    /// Recomputed on every call rather than tracked as separate state, so it
    /// cannot drift from the lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of snapshot price times quantity over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.product.price * Decimal::from(line.quantity))
            .sum()
    }
}

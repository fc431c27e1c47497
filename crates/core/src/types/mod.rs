//! Core types for the shubh storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod product;

pub use cart::{Cart, CartLine};
pub use id::*;
pub use product::{Category, Product};

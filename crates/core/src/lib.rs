//! Shubh Core - Shared types and pure storefront logic.
//!
//! This crate provides the domain model and the two pure engines used by the
//! storefront binary:
//!
//! - [`types`] - Newtype IDs, products, categories, and the session cart
//! - [`view`] - Derivation of the displayed product list from catalog + query
//!
//! # Architecture
//!
//! The core crate contains no I/O: no HTTP clients, no async, no rendering.
//! Everything here is a total function over in-memory collections, which is
//! what makes the filter/sort pipeline and the cart merge rule testable
//! without the web stack.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod view;

pub use types::*;
pub use view::{SortKey, ViewQuery};

//! Shared domain types for the eco storefront: the product catalog record,
//! the cart line item, and the filter criteria narrowing the catalog view.
//!
//! Everything here is plain serde data, shared between the storefront core
//! and any embedding UI.

pub mod cart_item;
pub mod filter;
pub mod product;

pub use cart_item::{CartLineItem, MAX_QUANTITY, MIN_QUANTITY};
pub use filter::{FilterCriteria, SortMode, DEFAULT_MAX_PRICE};
pub use product::{EcoScore, Product};

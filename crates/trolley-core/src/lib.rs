//! Cart domain types for trolley.
//!
//! This crate provides the data model shared by the synchronizer and
//! any embedding application:
//!
//! - **IDs**: newtype identifiers for products, users, and orders
//! - **Price**: cents-based amounts with two-decimal rendering
//! - **Cart**: items and the per-user cart document with its pure
//!   list mutations
//!
//! # Example
//!
//! ```
//! use trolley_core::prelude::*;
//!
//! let mut doc = CartDocument::new();
//! doc.add(CartItem::new("prod-1", "Rust Book", Price::from_decimal(49.99)));
//! doc.add(CartItem::new("prod-1", "Rust Book", Price::from_decimal(49.99)));
//!
//! assert_eq!(doc.item_count(), 2);
//! assert_eq!(doc.subtotal().display(), "99.98");
//! ```

pub mod cart;
pub mod ids;
pub mod price;

pub use cart::{subtotal, CartDocument, CartItem};
pub use ids::{OrderId, ProductId, UserId};
pub use price::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{subtotal, CartDocument, CartItem};
    pub use crate::ids::{OrderId, ProductId, UserId};
    pub use crate::price::Price;
}

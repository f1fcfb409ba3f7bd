//! Document store seam for trolley.
//!
//! The remote store is an external collaborator: an opaque keeper of
//! JSON documents addressed by collection and key. This crate defines
//! the [`DocumentStore`] trait the embedding application implements,
//! a typed [`Collection`] wrapper that handles serialization, and an
//! in-process [`MemoryStore`] backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use trolley_store::{Collection, MemoryStore};
//!
//! let store = Arc::new(MemoryStore::new());
//! let carts = Collection::new(store, "cart");
//!
//! carts.set("user@example.com", &cart).await?;
//! let cart: Option<CartDocument> = carts.get("user@example.com").await?;
//! ```

mod error;
mod memory;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{Collection, DocumentStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Collection, DocumentStore, MemoryStore, StoreError};
}

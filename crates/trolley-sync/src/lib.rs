//! Cart state synchronization for trolley.
//!
//! The [`CartSynchronizer`] is a state container mediating between
//! in-memory UI state and a remote per-user cart document: each
//! operation reads the document for the current identity, mutates the
//! item list, writes the document back whole, updates
//! [`CartState`], and notifies the UI of the outcome.
//!
//! Collaborators are trait seams implemented by the embedding
//! application: [`DocumentStore`](trolley_store::DocumentStore) for
//! persistence, [`IdentityProvider`] for the logged-in user,
//! [`OrderGateway`] for order placement, and [`Notifier`] for
//! user-facing messages.
//!
//! # Example
//!
//! ```rust,ignore
//! use trolley_sync::prelude::*;
//!
//! let mut sync = CartSynchronizer::new(store, identity, orders, notifier);
//!
//! sync.load_initial_cart().await?;
//! sync.add_item(CartItem::new("prod-1", "Rust Book", Price::from_decimal(49.99))).await?;
//! assert_eq!(sync.total_price(), "49.99");
//!
//! let receipt = sync.complete_purchase().await?;
//! assert!(sync.cart().is_empty());
//! ```

pub mod error;
pub mod identity;
pub mod notify;
pub mod order;
pub mod state;
pub mod synchronizer;

pub use error::CartError;
pub use identity::{FixedIdentity, IdentityProvider, User};
pub use notify::{Notifier, Severity, SilentNotifier};
pub use order::{OrderDeclined, OrderGateway, OrderReceipt, OrderRequest};
pub use state::CartState;
pub use synchronizer::{CartSynchronizer, SyncConfig};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::identity::{FixedIdentity, IdentityProvider, User};
    pub use crate::notify::{Notifier, Severity, SilentNotifier};
    pub use crate::order::{OrderDeclined, OrderGateway, OrderReceipt, OrderRequest};
    pub use crate::state::CartState;
    pub use crate::synchronizer::{CartSynchronizer, SyncConfig};
    pub use trolley_core::prelude::*;
    pub use trolley_store::prelude::*;
}

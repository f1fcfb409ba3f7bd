//! The cart synchronizer.
//!
//! Every operation follows the same path: check identity, read the
//! per-user document, apply the mutation to the list, write the
//! document back whole, then move the in-memory state through its
//! pending/fulfilled/rejected phases and emit the matching UI
//! notification. There is no retry and no conflict detection; a
//! failed remote call surfaces immediately as a rejection.

use std::sync::Arc;

use trolley_core::{subtotal, CartDocument, CartItem, ProductId};
use trolley_store::{Collection, DocumentStore};

use crate::error::CartError;
use crate::identity::IdentityProvider;
use crate::notify::{Notifier, Severity};
use crate::order::{OrderGateway, OrderReceipt, OrderRequest};
use crate::state::CartState;

/// Synchronizer configuration.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Name of the store collection holding cart documents.
    pub collection: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            collection: "cart".to_string(),
        }
    }
}

/// State container mediating between in-memory cart state and the
/// remote per-user cart document.
///
/// Operations take `&mut self` and suspend only at the store and
/// gateway boundaries, so no two operations on one synchronizer ever
/// overlap. Separate synchronizers racing on the same document
/// resolve last-write-wins with no detection.
pub struct CartSynchronizer {
    carts: Collection,
    identity: Arc<dyn IdentityProvider>,
    orders: Arc<dyn OrderGateway>,
    notifier: Arc<dyn Notifier>,
    state: CartState,
}

impl CartSynchronizer {
    /// Create a synchronizer with the default configuration.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
        orders: Arc<dyn OrderGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::with_config(store, identity, orders, notifier, SyncConfig::default())
    }

    /// Create a synchronizer with an explicit configuration.
    pub fn with_config(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
        orders: Arc<dyn OrderGateway>,
        notifier: Arc<dyn Notifier>,
        config: SyncConfig,
    ) -> Self {
        Self {
            carts: Collection::new(store, config.collection),
            identity,
            orders,
            notifier,
            state: CartState::empty(),
        }
    }

    /// Current in-memory state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Items currently in the cart.
    pub fn cart(&self) -> &[CartItem] {
        &self.state.cart
    }

    /// Derived total with two decimal places.
    pub fn total_price(&self) -> &str {
        &self.state.total_price
    }

    /// True while an operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// Message of the most recent rejection, if any.
    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// Fetch the cart for the current identity.
    ///
    /// An absent document is an empty cart, not an error. This is the
    /// one operation whose rejection stays silent: the error is
    /// recorded on the state without a notification.
    pub async fn load_initial_cart(&mut self) -> Result<Vec<CartItem>, CartError> {
        self.state.begin();

        match self.try_load().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "initial cart loaded");
                self.state.fulfill(items.clone());
                Ok(items)
            }
            Err(err) => {
                tracing::warn!(error = %err, "initial cart load failed");
                self.state.reject(err.to_string());
                Err(err)
            }
        }
    }

    /// Add a product to the cart.
    ///
    /// A same-id item already in the remote list gets its quantity
    /// incremented by one; otherwise the item is appended with
    /// quantity 1. Returns the freshly persisted list.
    pub async fn add_item(&mut self, item: CartItem) -> Result<Vec<CartItem>, CartError> {
        self.state.begin();
        self.notifier.notify(Severity::Warning, "Adding to cart...");

        match self.try_add(item).await {
            Ok(items) => self.fulfilled(items, Severity::Success, "Item added to cart."),
            Err(err) => self.rejected(err, "Failed to add to cart!"),
        }
    }

    /// Remove a product from the cart.
    ///
    /// Fails with [`CartError::ItemNotFound`] if no item matched, in
    /// which case the remote document is not rewritten.
    pub async fn remove_item(&mut self, id: &ProductId) -> Result<Vec<CartItem>, CartError> {
        self.state.begin();
        self.notifier.notify(Severity::Warning, "Removing from cart...");

        match self.try_remove(id).await {
            // Removal is destructive, so the UI shows it as danger.
            Ok(items) => self.fulfilled(items, Severity::Danger, "Item removed from the cart!"),
            Err(err) => self.rejected(err, "Failed to remove from cart!"),
        }
    }

    /// Increase the matching item's quantity by one.
    ///
    /// A non-matching id is a no-op that still rewrites the unchanged
    /// list.
    pub async fn increase_quantity(&mut self, id: &ProductId) -> Result<Vec<CartItem>, CartError> {
        self.state.begin();
        self.notifier
            .notify(Severity::Warning, "Increasing the quantity...");

        match self.try_adjust(id, 1).await {
            Ok(items) => self.fulfilled(items, Severity::Success, "Quantity increased."),
            Err(err) => self.rejected(err, "Failed to increase the quantity!"),
        }
    }

    /// Decrease the matching item's quantity by one.
    ///
    /// An item that reaches quantity zero is removed from the list. A
    /// non-matching id is a no-op that still rewrites the unchanged
    /// list.
    pub async fn decrease_quantity(&mut self, id: &ProductId) -> Result<Vec<CartItem>, CartError> {
        self.state.begin();
        self.notifier
            .notify(Severity::Warning, "Decreasing the quantity...");

        match self.try_adjust(id, -1).await {
            Ok(items) => self.fulfilled(items, Severity::Success, "Quantity decreased."),
            Err(err) => self.rejected(err, "Failed to decrease the quantity!"),
        }
    }

    /// Hand the current cart to the order collaborator and, only on
    /// its confirmation, clear the remote document and the in-memory
    /// state. A declined order leaves the cart untouched everywhere.
    pub async fn complete_purchase(&mut self) -> Result<OrderReceipt, CartError> {
        self.state.begin();
        self.notifier.notify(Severity::Warning, "Placing the order...");

        match self.try_purchase().await {
            Ok(receipt) => {
                tracing::debug!(order = %receipt.order_number, "order confirmed, cart cleared");
                self.state.fulfill(Vec::new());
                self.notifier.notify(Severity::Success, "Order confirmed!");
                Ok(receipt)
            }
            Err(err) => self.rejected(err, "Failed to place order!"),
        }
    }

    fn fulfilled(
        &mut self,
        items: Vec<CartItem>,
        severity: Severity,
        message: &str,
    ) -> Result<Vec<CartItem>, CartError> {
        tracing::debug!(count = items.len(), total = %subtotal(&items), "cart updated");
        self.state.fulfill(items.clone());
        self.notifier.notify(severity, message);
        Ok(items)
    }

    fn rejected<T>(&mut self, err: CartError, message: &str) -> Result<T, CartError> {
        tracing::warn!(error = %err, "cart operation failed");
        self.state.reject(err.to_string());
        self.notifier.notify(Severity::Danger, message);
        Err(err)
    }

    /// Resolve the cart document key for the current identity.
    fn require_email(&self) -> Result<String, CartError> {
        let user = self.identity.current_user();
        match user.email() {
            Some(email) => Ok(email.to_string()),
            None => Err(CartError::Unauthenticated),
        }
    }

    /// Fetch the current document, treating an absent one as empty.
    async fn fetch_document(&self, key: &str) -> Result<CartDocument, CartError> {
        let doc: Option<CartDocument> = self.carts.get(key).await?;
        Ok(doc.unwrap_or_default())
    }

    async fn try_load(&self) -> Result<Vec<CartItem>, CartError> {
        let key = self.require_email()?;
        Ok(self.fetch_document(&key).await?.into_items())
    }

    async fn try_add(&self, item: CartItem) -> Result<Vec<CartItem>, CartError> {
        let key = self.require_email()?;
        let mut doc = self.fetch_document(&key).await?;
        doc.add(item);
        self.carts.set(&key, &doc).await?;
        Ok(doc.into_items())
    }

    async fn try_remove(&self, id: &ProductId) -> Result<Vec<CartItem>, CartError> {
        let key = self.require_email()?;
        let mut doc = self.fetch_document(&key).await?;
        if !doc.remove(id) {
            return Err(CartError::ItemNotFound(id.clone()));
        }
        self.carts.set(&key, &doc).await?;
        Ok(doc.into_items())
    }

    async fn try_adjust(&self, id: &ProductId, delta: i64) -> Result<Vec<CartItem>, CartError> {
        let key = self.require_email()?;
        let mut doc = self.fetch_document(&key).await?;
        doc.adjust_quantity(id, delta);
        self.carts.set(&key, &doc).await?;
        Ok(doc.into_items())
    }

    async fn try_purchase(&self) -> Result<OrderReceipt, CartError> {
        let key = self.require_email()?;
        let request = OrderRequest::new(
            key.clone(),
            self.state.cart.clone(),
            subtotal(&self.state.cart),
        );
        let receipt = self.orders.place_order(request).await?;

        // Only a confirmed order clears the remote cart.
        self.carts.set(&key, &CartDocument::new()).await?;
        Ok(receipt)
    }
}

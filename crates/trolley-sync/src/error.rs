//! Cart operation errors.

use thiserror::Error;
use trolley_core::ProductId;
use trolley_store::StoreError;

use crate::order::OrderDeclined;

/// Errors surfaced at the cart operation boundary.
///
/// Every rejection carries a human-readable message; the synchronizer
/// records it on the state and none are re-thrown past the operation.
#[derive(Error, Debug)]
pub enum CartError {
    /// No logged-in identity, or the identity has no email.
    #[error("Please log in!")]
    Unauthenticated,

    /// The item to remove is not in the cart.
    #[error("Item not found: {0}")]
    ItemNotFound(ProductId),

    /// The document store failed; the reason passes through verbatim.
    #[error("{0}")]
    Remote(#[from] StoreError),

    /// The order collaborator declined the purchase.
    #[error("Order declined: {0}")]
    OrderDeclined(String),
}

impl CartError {
    /// Check if this is an authentication failure.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, CartError::Unauthenticated)
    }

    /// Check if this came from the remote store.
    pub fn is_remote(&self) -> bool {
        matches!(self, CartError::Remote(_))
    }
}

impl From<OrderDeclined> for CartError {
    fn from(e: OrderDeclined) -> Self {
        CartError::OrderDeclined(e.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CartError::Unauthenticated.to_string(), "Please log in!");
        assert_eq!(
            CartError::ItemNotFound(ProductId::new("prod-1")).to_string(),
            "Item not found: prod-1"
        );
    }

    #[test]
    fn test_remote_reason_passes_through() {
        let err = CartError::from(StoreError::Backend("connection reset".to_string()));
        assert!(err.is_remote());
        assert_eq!(err.to_string(), "connection reset");
    }

    #[test]
    fn test_order_declined_conversion() {
        let err = CartError::from(OrderDeclined("card expired".to_string()));
        assert_eq!(err.to_string(), "Order declined: card expired");
    }
}

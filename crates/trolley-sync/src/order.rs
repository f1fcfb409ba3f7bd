//! Order placement seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use trolley_core::{CartItem, OrderId, Price};

/// A finalized order handed to the order collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    /// The purchasing user, by cart document key (email).
    pub user_id: String,
    /// Items being purchased.
    pub items: Vec<CartItem>,
    /// Total charged: sum of price times quantity.
    pub total: Price,
    /// Unix timestamp when the order was placed.
    pub placed_at: i64,
}

impl OrderRequest {
    /// Build a request stamped with the current time.
    pub fn new(user_id: impl Into<String>, items: Vec<CartItem>, total: Price) -> Self {
        Self {
            user_id: user_id.into(),
            items,
            total,
            placed_at: current_timestamp(),
        }
    }
}

/// Confirmation returned by the order collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderReceipt {
    /// Unique order identifier.
    pub order_id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
}

impl OrderReceipt {
    /// Receipt with a generated id and order number.
    pub fn generate() -> Self {
        Self {
            order_id: OrderId::generate(),
            order_number: generate_order_number(),
        }
    }
}

/// The order collaborator refused the purchase.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct OrderDeclined(pub String);

/// Places finalized orders.
///
/// On decline the caller leaves the cart untouched, remotely and in
/// memory.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit an order, returning a receipt on confirmation.
    async fn place_order(&self, request: OrderRequest) -> Result<OrderReceipt, OrderDeclined>;
}

/// Generate a human-readable order number.
pub fn generate_order_number() -> String {
    format!("ORD-{}", current_timestamp())
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

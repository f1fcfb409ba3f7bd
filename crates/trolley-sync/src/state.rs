//! In-memory cart state.

use serde::{Deserialize, Serialize};
use trolley_core::{subtotal, CartItem, Price};

/// In-memory cart state as seen by the UI.
///
/// `total_price` is derived: recomputed from the item list after every
/// fulfilled mutation and rendered with two decimal places. The remote
/// document is the sole durable store; this state is rebuilt from it
/// on the initial load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    /// Items currently in the cart.
    pub cart: Vec<CartItem>,
    /// Derived total, e.g. `"20.00"`.
    pub total_price: String,
    /// True while an operation is in flight.
    pub loading: bool,
    /// Message of the most recent rejection, if any.
    pub error: Option<String>,
}

impl CartState {
    /// Empty state, as at application start.
    pub fn empty() -> Self {
        Self {
            cart: Vec::new(),
            total_price: Price::zero().display(),
            loading: false,
            error: None,
        }
    }

    /// Enter the pending phase of an operation.
    pub(crate) fn begin(&mut self) {
        self.loading = true;
    }

    /// Apply a fulfilled mutation: adopt the list, recompute the total.
    pub(crate) fn fulfill(&mut self, cart: Vec<CartItem>) {
        self.loading = false;
        self.cart = cart;
        self.total_price = subtotal(&self.cart).display();
    }

    /// Apply a rejection: record the message.
    ///
    /// The error is set-only; later successes do not clear it.
    pub(crate) fn reject(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state() {
        let state = CartState::empty();
        assert!(state.cart.is_empty());
        assert_eq!(state.total_price, "0.00");
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_fulfill_recomputes_total() {
        let mut state = CartState::empty();
        state.begin();
        assert!(state.loading);

        let items = vec![
            CartItem::new("a", "A", Price::from_cents(1000)).with_quantity(2),
            CartItem::new("b", "B", Price::from_cents(550)),
        ];
        state.fulfill(items);

        assert!(!state.loading);
        assert_eq!(state.total_price, "25.50");
    }

    #[test]
    fn test_reject_records_message() {
        let mut state = CartState::empty();
        state.begin();
        state.reject("store down");

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("store down"));
    }

    #[test]
    fn test_error_survives_later_success() {
        let mut state = CartState::empty();
        state.reject("first failure");
        state.fulfill(Vec::new());

        assert_eq!(state.error.as_deref(), Some("first failure"));
    }
}

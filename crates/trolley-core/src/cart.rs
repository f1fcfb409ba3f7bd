//! Cart item and cart document types.
//!
//! The cart document is the remote record: one per user, the item list
//! stored whole and overwritten whole on every mutation. The mutation
//! helpers here are pure list operations; persistence lives elsewhere.

use crate::ids::ProductId;
use crate::price::Price;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single product line in a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product identifier, unique within a cart.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Quantity. Never persisted at zero or below.
    pub quantity: i64,
    /// Arbitrary product fields, carried through unchanged.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl CartItem {
    /// Create a new item with quantity 1.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity: 1,
            metadata: Map::new(),
        }
    }

    /// Set the quantity.
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Attach an extra product field.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Price times quantity for this line.
    pub fn line_total(&self) -> Price {
        self.price.multiply(self.quantity)
    }
}

/// Remote cart record for a single user.
///
/// Keyed by the user's email in the cart collection; created
/// implicitly on the first write.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartDocument {
    /// Items in the cart, in insertion order.
    pub cart_items: Vec<CartItem>,
}

impl CartDocument {
    /// Create an empty cart document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from an existing item list.
    pub fn from_items(cart_items: Vec<CartItem>) -> Self {
        Self { cart_items }
    }

    /// Add a product to the cart.
    ///
    /// If an item with the same id exists, its quantity is incremented
    /// by one; otherwise the item is appended with quantity 1,
    /// whatever quantity it arrived with.
    pub fn add(&mut self, item: CartItem) {
        if let Some(existing) = self.cart_items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }
        self.cart_items.push(CartItem { quantity: 1, ..item });
    }

    /// Remove an item by id. Returns true if an item was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.cart_items.len();
        self.cart_items.retain(|i| &i.id != id);
        self.cart_items.len() != len_before
    }

    /// Adjust the matching item's quantity by `delta`.
    ///
    /// Items that end at quantity zero or below are removed. A
    /// non-matching id leaves the list unchanged.
    pub fn adjust_quantity(&mut self, id: &ProductId, delta: i64) {
        for item in &mut self.cart_items {
            if &item.id == id {
                item.quantity = item.quantity.saturating_add(delta);
            }
        }
        self.cart_items.retain(|i| i.quantity > 0);
    }

    /// Check if an item with the given id is present.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.cart_items.iter().any(|i| &i.id == id)
    }

    /// Get an item by id.
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.cart_items.iter().find(|i| &i.id == id)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.cart_items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart_items.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.cart_items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of price times quantity over all items.
    pub fn subtotal(&self) -> Price {
        subtotal(&self.cart_items)
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.cart_items.clear();
    }

    /// Consume the document and return its items.
    pub fn into_items(self) -> Vec<CartItem> {
        self.cart_items
    }
}

/// Sum of price times quantity over a slice of items.
pub fn subtotal(items: &[CartItem]) -> Price {
    items
        .iter()
        .fold(Price::zero(), |acc, item| acc + item.line_total())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, cents: i64) -> CartItem {
        CartItem::new(id, format!("Product {}", id), Price::from_cents(cents))
    }

    #[test]
    fn test_add_distinct_items() {
        let mut doc = CartDocument::new();
        doc.add(item("a", 1000));
        doc.add(item("b", 2000));
        doc.add(item("c", 500));

        assert_eq!(doc.len(), 3);
        assert!(doc.cart_items.iter().all(|i| i.quantity == 1));
    }

    #[test]
    fn test_add_same_item_increments_quantity() {
        let mut doc = CartDocument::new();
        doc.add(item("a", 1000));
        doc.add(item("a", 1000));

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get(&"a".into()).unwrap().quantity, 2);
    }

    #[test]
    fn test_add_ignores_incoming_quantity() {
        let mut doc = CartDocument::new();
        doc.add(item("a", 1000).with_quantity(7));

        assert_eq!(doc.get(&"a".into()).unwrap().quantity, 1);
    }

    #[test]
    fn test_remove_reports_whether_matched() {
        let mut doc = CartDocument::from_items(vec![item("a", 1000)]);

        assert!(!doc.remove(&"missing".into()));
        assert_eq!(doc.len(), 1);

        assert!(doc.remove(&"a".into()));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_adjust_quantity_up_and_down() {
        let mut doc = CartDocument::from_items(vec![item("a", 1000).with_quantity(2)]);

        doc.adjust_quantity(&"a".into(), 1);
        assert_eq!(doc.get(&"a".into()).unwrap().quantity, 3);

        doc.adjust_quantity(&"a".into(), -1);
        assert_eq!(doc.get(&"a".into()).unwrap().quantity, 2);
    }

    #[test]
    fn test_adjust_quantity_removes_at_zero() {
        let mut doc = CartDocument::from_items(vec![item("a", 1000)]);

        doc.adjust_quantity(&"a".into(), -1);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_adjust_quantity_unknown_id_is_noop() {
        let mut doc = CartDocument::from_items(vec![item("a", 1000)]);
        let before = doc.clone();

        doc.adjust_quantity(&"missing".into(), 1);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_item_count_and_subtotal() {
        let mut doc = CartDocument::new();
        doc.add(item("a", 1000));
        doc.add(item("a", 1000));
        doc.add(item("b", 2500));

        assert_eq!(doc.item_count(), 3);
        assert_eq!(doc.subtotal().cents, 4500);
        assert_eq!(doc.subtotal().display(), "45.00");
    }

    #[test]
    fn test_document_wire_shape() {
        let doc = CartDocument::from_items(vec![item("a", 1000)]);
        let json = serde_json::to_value(&doc).unwrap();

        // Field is camelCase on the wire
        assert!(json.get("cartItems").is_some());
        assert_eq!(json["cartItems"][0]["price"], 1000);
    }

    #[test]
    fn test_item_metadata_flattens() {
        let it = item("a", 1000).with_field("color", Value::from("red"));
        let json = serde_json::to_value(&it).unwrap();

        // Extra product fields sit beside the known ones
        assert_eq!(json["color"], "red");

        let back: CartItem = serde_json::from_value(json).unwrap();
        assert_eq!(back.metadata.get("color"), Some(&Value::from("red")));
    }

    #[test]
    fn test_document_roundtrip() {
        let mut doc = CartDocument::new();
        doc.add(item("a", 1999).with_field("size", Value::from("XL")));
        doc.add(item("b", 500));

        let json = serde_json::to_string(&doc).unwrap();
        let back: CartDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}

//! Document store seam and typed collection access.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::error::StoreError;

/// Remote document store, keyed by collection and document key.
///
/// Documents are handled whole: `set` overwrites the entire value and
/// `get` returns the entire value. There are no version stamps and no
/// transactions; concurrent writers resolve last-write-wins.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document. Returns `None` if the key has never been
    /// written.
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>, StoreError>;

    /// Overwrite a document, creating it if absent.
    async fn set(&self, collection: &str, key: &str, value: Value) -> Result<(), StoreError>;
}

/// Typed view of one collection in a document store.
///
/// Provides automatic JSON serialization for any document type that
/// implements `Serialize` and `DeserializeOwned`.
///
/// # Example
///
/// ```rust,ignore
/// let carts = Collection::new(store, "cart");
///
/// carts.set("user@example.com", &cart).await?;
/// let cart: Option<CartDocument> = carts.get("user@example.com").await?;
/// ```
#[derive(Clone)]
pub struct Collection {
    store: Arc<dyn DocumentStore>,
    name: String,
}

impl Collection {
    /// Create a view of the named collection.
    pub fn new(store: Arc<dyn DocumentStore>, name: impl Into<String>) -> Self {
        Self {
            store,
            name: name.into(),
        }
    }

    /// The collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fetch and deserialize a document.
    ///
    /// Returns `None` if the key has never been written.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(&self.name, key).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Serialize and overwrite a document.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(value)?;
        self.store.set(&self.name, key, value).await
    }
}

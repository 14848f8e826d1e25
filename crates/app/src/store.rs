//! In-memory storage

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::products::models::Product;

/// Process-wide product collection.
///
/// Every access goes through a single reader/writer guard, so concurrent
/// requests never observe a half-applied mutation.
#[derive(Debug, Clone, Default)]
pub struct Store {
    products: Arc<RwLock<Vec<Product>>>,
}

impl Store {
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Acquire shared read access to the collection.
    pub async fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().await
    }

    /// Acquire exclusive write access to the collection.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.products.write().await
    }
}

//! Products service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::products::{
        errors::ProductsServiceError,
        models::{NewProduct, Product, ProductId},
        repository::InMemoryProductsRepository,
    },
    store::Store,
};

#[derive(Debug, Clone)]
pub struct InMemoryProductsService {
    store: Store,
    repository: InMemoryProductsRepository,
}

impl InMemoryProductsService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            repository: InMemoryProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for InMemoryProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let products = self.store.read().await;

        Ok(self.repository.list_products(&products))
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ProductsServiceError> {
        let products = self.store.read().await;

        let (product, _position) = self.repository.find_product(&products, id)?;

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let mut products = self.store.write().await;

        let created = self
            .repository
            .create_product(&mut products, product, Timestamp::now());

        debug!(product_id = %created.id, "stored new product");

        Ok(created)
    }

    async fn update_product(
        &self,
        id: ProductId,
        update: NewProduct,
    ) -> Result<Product, ProductsServiceError> {
        let mut products = self.store.write().await;

        let updated = self
            .repository
            .update_product(&mut products, id, update, Timestamp::now())?;

        debug!(product_id = %updated.id, "replaced product");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in insertion order.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, id: ProductId) -> Result<Product, ProductsServiceError>;

    /// Stores a new product under the next free identifier.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Replaces the product with the given identifier.
    async fn update_product(
        &self,
        id: ProductId,
        update: NewProduct,
    ) -> Result<Product, ProductsServiceError>;
}

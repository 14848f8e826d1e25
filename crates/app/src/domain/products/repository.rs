//! Products Repository

use jiff::Timestamp;

use crate::domain::products::{
    errors::ProductsServiceError,
    models::{NewProduct, Product, ProductId},
};

/// Operations over a guarded product collection.
///
/// The repository never locks anything itself; the service acquires the
/// store guard and hands the collection in.
#[derive(Debug, Clone, Default)]
pub(crate) struct InMemoryProductsRepository;

#[expect(clippy::unused_self, reason = "the repository is stateless")]
impl InMemoryProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn list_products(&self, products: &[Product]) -> Vec<Product> {
        products.to_vec()
    }

    pub(crate) fn find_product(
        &self,
        products: &[Product],
        id: ProductId,
    ) -> Result<(Product, usize), ProductsServiceError> {
        products
            .iter()
            .position(|product| product.id == id)
            .and_then(|position| {
                products
                    .get(position)
                    .map(|product| (product.clone(), position))
            })
            .ok_or(ProductsServiceError::NotFound(id))
    }

    pub(crate) fn create_product(
        &self,
        products: &mut Vec<Product>,
        product: NewProduct,
        now: Timestamp,
    ) -> Product {
        let created = Product {
            id: next_id(products),
            name: product.name,
            description: product.description,
            price: product.price,
            sku: product.sku,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        products.push(created.clone());

        created
    }

    pub(crate) fn update_product(
        &self,
        products: &mut [Product],
        id: ProductId,
        update: NewProduct,
        now: Timestamp,
    ) -> Result<Product, ProductsServiceError> {
        let (existing, position) = self.find_product(products, id)?;

        let updated = Product {
            id,
            name: update.name,
            description: update.description,
            price: update.price,
            sku: update.sku,
            created_at: existing.created_at,
            updated_at: now,
            deleted_at: existing.deleted_at,
        };

        let slot = products
            .get_mut(position)
            .ok_or(ProductsServiceError::NotFound(id))?;

        *slot = updated.clone();

        Ok(updated)
    }
}

/// One past the largest identifier in the collection.
fn next_id(products: &[Product]) -> ProductId {
    products
        .iter()
        .map(|product| product.id)
        .max()
        .unwrap_or_default()
        .next()
}

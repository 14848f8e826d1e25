//! Sample products loaded at startup.

use jiff::Timestamp;

use crate::domain::products::models::{Product, ProductId};

/// The two products every fresh store starts with.
#[must_use]
pub fn sample_products(now: Timestamp) -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Latte".to_string(),
            description: "Frothy milky coffee".to_string(),
            price: 2.45,
            sku: "coffee-milk-latte".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        },
        Product {
            id: ProductId::new(2),
            name: "Espresso".to_string(),
            description: "Short and strong coffee without milk".to_string(),
            price: 1.99,
            sku: "coffee-short-espresso".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::products::{models::NewProduct, validation::validate};

    use super::*;

    #[test]
    fn test_sample_products_satisfy_validation() -> TestResult {
        for product in sample_products(Timestamp::UNIX_EPOCH) {
            validate(&NewProduct {
                name: product.name,
                description: product.description,
                price: product.price,
                sku: product.sku,
            })?;
        }

        Ok(())
    }
}

//! Test context for service-level tests.

use jiff::Timestamp;

use crate::{
    domain::products::{InMemoryProductsService, seed::sample_products},
    store::Store,
};

pub(crate) struct TestContext {
    pub products: InMemoryProductsService,
}

impl TestContext {
    pub(crate) fn empty() -> Self {
        Self::with_store(Store::default())
    }

    pub(crate) fn seeded() -> Self {
        Self::with_store(Store::new(sample_products(Timestamp::UNIX_EPOCH)))
    }

    fn with_store(store: Store) -> Self {
        Self {
            products: InMemoryProductsService::new(store),
        }
    }
}

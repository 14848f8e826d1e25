//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use jiff::Timestamp;

use crate::{
    domain::products::{InMemoryProductsService, ProductsService, seed::sample_products},
    store::Store,
};

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self { products }
    }

    /// Build application context over an in-memory store holding the sample
    /// products.
    #[must_use]
    pub fn seeded() -> Self {
        let store = Store::new(sample_products(Timestamp::now()));

        Self::new(Arc::new(InMemoryProductsService::new(store)))
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

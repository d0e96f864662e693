use std::sync::{Arc, PoisonError, RwLock};

use super::FlawCatalog;

/// Holder for the live catalog that supports hot replacement.
///
/// Readers take an `Arc` snapshot and drop the lock immediately, so an
/// in-flight analysis keeps using the catalog it started with while a reload
/// swaps the pointer underneath.
#[derive(Debug)]
pub struct CatalogStore {
    current: RwLock<Arc<FlawCatalog>>,
}

impl CatalogStore {
    pub fn new(catalog: FlawCatalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    pub fn snapshot(&self) -> Arc<FlawCatalog> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Install `catalog`, returning the one it replaced.
    pub fn replace(&self, catalog: FlawCatalog) -> Arc<FlawCatalog> {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(catalog))
    }
}

use super::storage::CatalogStore;
use crate::{aggregation::summarize_stock, catalog::Product, errors::CatalogError};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An in-process `CatalogStore`.
///
/// Clones share the same product list. Used for previews that should show the
/// computed totals without a database, and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    fn name(&self) -> &str {
        "Memory"
    }

    async fn replace_all(&self, products: &[Product]) -> Result<usize, CatalogError> {
        let mut stored = self.products.write().await;
        stored.clear();
        stored.extend(products.iter().cloned().map(|mut product| {
            product.id = Some(ObjectId::new());
            product
        }));
        Ok(stored.len())
    }

    async fn merge_stock_totals(&self) -> Result<(), CatalogError> {
        let mut stored = self.products.write().await;
        for product in stored.iter_mut() {
            if let Some(totals) = summarize_stock(&product.items) {
                product.total_stock_sum = Some(totals);
            }
        }
        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.read().await.clone())
    }
}

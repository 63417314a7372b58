use crate::{catalog::Product, errors::CatalogError};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for the document store holding the product catalog.
///
/// The operations mirror what a load needs: an unconditional replacement of
/// the whole collection, followed by the stock rollup over what was written.
/// Neither is atomic with respect to the other.
#[async_trait]
pub trait CatalogStore: Send + Sync + DynClone + Debug {
    /// Returns the name of the store (e.g., "MongoDB", "Memory").
    fn name(&self) -> &str;

    /// Deletes every product, then inserts `products`. Returns the number inserted.
    async fn replace_all(&self, products: &[Product]) -> Result<usize, CatalogError>;

    /// Recomputes `total_stock_sum` for every product from its items.
    async fn merge_stock_totals(&self) -> Result<(), CatalogError>;

    /// Returns every product currently stored.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;
}

dyn_clone::clone_trait_object!(CatalogStore);

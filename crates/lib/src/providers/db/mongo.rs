//! # MongoDB Catalog Store
//!
//! Writes the catalog into a MongoDB collection and runs the stock rollup as a
//! server-side aggregation with a `$merge` write-back.

use super::storage::CatalogStore;
use crate::{aggregation::total_stock_pipeline, catalog::Product, errors::CatalogError};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Client, Collection,
};
use tracing::{debug, info};

/// A `CatalogStore` backed by one MongoDB collection.
///
/// Cloning is cheap; clones share the driver's connection pool.
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    collection: Collection<Product>,
}

impl MongoStore {
    /// Connects with a connection string and binds to `database.collection`.
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
    ) -> Result<Self, CatalogError> {
        let client = Client::with_uri_str(uri).await?;
        let collection = client.database(database).collection::<Product>(collection);
        info!(database, collection = collection.name(), "Connected to MongoDB.");
        Ok(Self { client, collection })
    }

    /// Closes the driver's connections. Pending operations are not waited for.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

#[async_trait]
impl CatalogStore for MongoStore {
    fn name(&self) -> &str {
        "MongoDB"
    }

    async fn replace_all(&self, products: &[Product]) -> Result<usize, CatalogError> {
        let deleted = self.collection.delete_many(doc! {}).await?;
        info!(
            collection = self.collection.name(),
            deleted = deleted.deleted_count,
            "Cleared catalog collection."
        );

        if products.is_empty() {
            return Ok(0);
        }
        let inserted = self.collection.insert_many(products).await?;
        info!(inserted = inserted.inserted_ids.len(), "Inserted products.");
        Ok(inserted.inserted_ids.len())
    }

    async fn merge_stock_totals(&self) -> Result<(), CatalogError> {
        let pipeline = total_stock_pipeline(self.collection.name());
        debug!(?pipeline, "Running stock aggregation.");
        // A `$merge` pipeline yields no documents; draining the cursor makes
        // sure the server has finished the write before returning.
        let cursor = self.collection.aggregate(pipeline).await?;
        let _: Vec<Document> = cursor.try_collect().await?;
        info!(collection = self.collection.name(), "Merged total_stock_sum.");
        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }
}

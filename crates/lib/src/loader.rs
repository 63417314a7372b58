//! # Catalog Loader
//!
//! Runs the catalog migration end to end: fetch the sheet, reshape its rows
//! into product documents, replace the collection, and recompute the stock
//! totals.
//!
//! There is no checkpointing. A failure after the collection has been cleared
//! but before the insert completes leaves it empty until the next run.

use crate::{
    catalog::{build_products, parse_rows, DroppedRows, GroupingProfile, Product},
    errors::CatalogError,
    providers::db::CatalogStore,
    source::CsvSource,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

/// A summary of one completed load.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub source: String,
    pub store: String,
    pub rows_read: usize,
    pub dropped: DroppedRows,
    pub products: usize,
    pub items: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Ties a CSV source to a catalog store.
pub struct CatalogLoader<'a> {
    source: &'a dyn CsvSource,
    store: &'a dyn CatalogStore,
    profile: GroupingProfile,
}

/// Reshaped products along with the row accounting behind them.
struct Reshaped {
    rows_read: usize,
    dropped: DroppedRows,
    products: Vec<Product>,
}

impl<'a> CatalogLoader<'a> {
    pub fn new(
        source: &'a dyn CsvSource,
        store: &'a dyn CatalogStore,
        profile: GroupingProfile,
    ) -> Self {
        Self {
            source,
            store,
            profile,
        }
    }

    async fn fetch_and_reshape(&self) -> Result<Reshaped, CatalogError> {
        info!(source = %self.source.describe(), "Fetching catalog CSV.");
        let csv_data = self.source.fetch_csv().await?;

        let parsed = parse_rows(&csv_data)?;
        let products = build_products(&parsed.rows, self.profile);
        info!(
            rows = parsed.rows.len(),
            products = products.len(),
            profile = %self.profile,
            "Reshaped catalog rows."
        );
        if products.is_empty() {
            return Err(CatalogError::NoData);
        }

        Ok(Reshaped {
            rows_read: parsed.read(),
            dropped: parsed.dropped,
            products,
        })
    }

    /// Fetches and reshapes the sheet without touching the store.
    pub async fn preview(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.fetch_and_reshape().await?.products)
    }

    /// Recomputes `total_stock_sum` over whatever the store currently holds.
    pub async fn aggregate(&self) -> Result<(), CatalogError> {
        info!(store = self.store.name(), "Recomputing stock totals.");
        self.store.merge_stock_totals().await
    }

    /// Replaces the stored catalog with the current sheet contents and
    /// recomputes the stock totals.
    ///
    /// Fetch and parse failures abort before the store is modified.
    pub async fn load(&self) -> Result<LoadReport, CatalogError> {
        let started_at = Utc::now();
        let reshaped = self.fetch_and_reshape().await?;

        let inserted = self.store.replace_all(&reshaped.products).await?;
        self.aggregate().await?;

        let report = LoadReport {
            source: self.source.describe(),
            store: self.store.name().to_string(),
            rows_read: reshaped.rows_read,
            dropped: reshaped.dropped,
            products: inserted,
            items: reshaped.products.iter().map(|p| p.items.len()).sum(),
            started_at,
            finished_at: Utc::now(),
        };
        info!(
            products = report.products,
            items = report.items,
            dropped = report.dropped.total(),
            "Catalog load complete."
        );
        Ok(report)
    }
}

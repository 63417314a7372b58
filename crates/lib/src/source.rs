//! # Catalog Sources
//!
//! Where catalog CSV comes from. Plugin crates (such as `stockyard-sheets`)
//! implement `CsvSource` so the loader can stay free of any network code.

use crate::errors::CatalogError;
use async_trait::async_trait;

/// A producer of catalog CSV text.
#[async_trait]
pub trait CsvSource: Send + Sync {
    /// A human-readable identifier for logs and reports (e.g., the export URL).
    fn describe(&self) -> String;

    /// Fetches the full CSV document. Called once per run and never retried.
    async fn fetch_csv(&self) -> Result<String, CatalogError>;
}

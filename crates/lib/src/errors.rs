use thiserror::Error;

/// Errors raised while loading the product catalog.
///
/// None of these are retried: every variant aborts the run it occurs in.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to fetch catalog CSV: {0}")]
    Fetch(String),
    #[error("Failed to parse catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Catalog sheet is missing required column '{0}'")]
    MissingColumn(String),
    #[error("The catalog sheet has no complete rows to load.")]
    NoData,
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

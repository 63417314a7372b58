//! # stockyard
//!
//! Loads a product catalog from a spreadsheet export into a document store.
//!
//! Each sheet row describes one variant of a product. Rows are grouped into
//! product documents with nested `items`, every item is given a factory and a
//! warehouse stock entry, and after the collection has been replaced the stock
//! of all items is rolled up per location into the product's `total_stock_sum`.

pub mod aggregation;
pub mod catalog;
pub mod constants;
pub mod errors;
pub mod loader;
pub mod providers;
pub mod source;

pub use errors::CatalogError;
pub use loader::{CatalogLoader, LoadReport};
pub use source::CsvSource;

//! # Product Catalog
//!
//! Sheet rows in, product documents out. Nothing in this module touches the
//! network or the database.

pub mod reshape;
pub mod row;
pub mod types;

pub use reshape::{build_products, GroupingProfile};
pub use row::{parse_rows, CatalogRow, DroppedRows, ParsedRows};
pub use types::{DeliveryTime, Item, Location, LocationKind, Product, StockEntry};

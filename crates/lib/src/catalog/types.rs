//! # Catalog Document Types
//!
//! The nested shape stored per product: a product groups its sheet rows into
//! `items`, every item carries a two-location `stock` breakdown, and the
//! product-level `total_stock_sum` rolls those entries up per location.

use crate::constants::{
    DELIVERY_TIME_AMOUNT, DELIVERY_TIME_UNIT, FACTORY_LOCATION_ID, WAREHOUSE_MULTIPLIER,
};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// The kind of place stock is held at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Factory,
    Warehouse,
}

/// A stock location. Factories carry an id, the warehouse does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "type")]
    pub kind: LocationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
}

impl Location {
    pub fn factory() -> Self {
        Self {
            kind: LocationKind::Factory,
            id: Some(FACTORY_LOCATION_ID),
        }
    }

    pub fn warehouse() -> Self {
        Self {
            kind: LocationKind::Warehouse,
            id: None,
        }
    }

    pub fn is_warehouse(&self) -> bool {
        self.kind == LocationKind::Warehouse
    }
}

/// One stock entry, used both per item and in the per-product rollup.
///
/// Warehouse entries never carry `threshold`, `target` or `ordered`; the
/// keys are left out of the document rather than stored as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub location: Location,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered: Option<i64>,
}

impl StockEntry {
    /// Factory stock for a sheet quantity: the threshold is half the quantity,
    /// truncated toward zero.
    pub fn factory(quantity: i64) -> Self {
        Self {
            location: Location::factory(),
            amount: quantity,
            threshold: Some(quantity / 2),
            target: Some(quantity),
            ordered: Some(0),
        }
    }

    pub fn warehouse(quantity: i64) -> Self {
        Self {
            location: Location::warehouse(),
            amount: quantity.saturating_mul(WAREHOUSE_MULTIPLIER),
            threshold: None,
            target: None,
            ordered: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryTime {
    pub amount: i64,
    pub unit: String,
}

impl Default for DeliveryTime {
    fn default() -> Self {
        Self {
            amount: DELIVERY_TIME_AMOUNT,
            unit: DELIVERY_TIME_UNIT.to_string(),
        }
    }
}

/// A sellable variant of a product, built from one sheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub sku: String,
    /// The row's `variant` column.
    pub name: String,
    pub delivery_time: DeliveryTime,
    pub stock: Vec<StockEntry>,
}

/// A product document as stored in the catalog collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub code: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub autoreplenishment: bool,
    pub items: Vec<Item>,
    /// Null until the stock aggregation has run over the collection.
    #[serde(default)]
    pub total_stock_sum: Option<Vec<StockEntry>>,
}

//! # Row Reshaping
//!
//! Turns flat catalog rows into product documents. Rows sharing a grouping key
//! become the `items` of one product, in the order they appeared in the sheet.

use super::{
    row::CatalogRow,
    types::{DeliveryTime, Item, Product, StockEntry},
};
use crate::constants::DESCRIPTION_PREFIX;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Which descriptive fields identify a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingProfile {
    /// name, category, code, description, unit, autoreplenishment.
    #[default]
    Full,
    /// name, code, description, autoreplenishment. Category and unit are not
    /// part of the product document.
    Compact,
}

impl fmt::Display for GroupingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupingProfile::Full => write!(f, "full"),
            GroupingProfile::Compact => write!(f, "compact"),
        }
    }
}

impl FromStr for GroupingProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(GroupingProfile::Full),
            "compact" => Ok(GroupingProfile::Compact),
            other => Err(format!(
                "unknown grouping profile '{other}' (expected 'full' or 'compact')"
            )),
        }
    }
}

/// The tuple products are grouped and ordered by. Field order matters: it
/// defines the ordering of the emitted documents.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct GroupKey {
    name: String,
    category: Option<String>,
    code: String,
    description: String,
    unit: Option<String>,
    autoreplenishment: bool,
}

impl GroupKey {
    fn for_row(row: &CatalogRow, profile: GroupingProfile) -> Self {
        let keep = |value: &str| match profile {
            GroupingProfile::Full => Some(value.to_string()),
            GroupingProfile::Compact => None,
        };
        Self {
            name: row.name.clone(),
            category: keep(&row.category),
            code: row.code.clone(),
            description: format!("{DESCRIPTION_PREFIX}{}", row.name),
            unit: keep(&row.unit),
            autoreplenishment: false,
        }
    }

    fn into_product(self, items: Vec<Item>) -> Product {
        Product {
            id: None,
            name: self.name,
            category: self.category,
            code: self.code,
            description: self.description,
            unit: self.unit,
            autoreplenishment: self.autoreplenishment,
            items,
            total_stock_sum: None,
        }
    }
}

impl From<&CatalogRow> for Item {
    fn from(row: &CatalogRow) -> Self {
        Item {
            sku: row.sku.clone(),
            name: row.variant.clone(),
            delivery_time: DeliveryTime::default(),
            stock: vec![
                StockEntry::factory(row.quantity),
                StockEntry::warehouse(row.quantity),
            ],
        }
    }
}

/// Groups rows into products, ordered by grouping key.
pub fn build_products(rows: &[CatalogRow], profile: GroupingProfile) -> Vec<Product> {
    let mut groups: BTreeMap<GroupKey, Vec<Item>> = BTreeMap::new();
    for row in rows {
        groups
            .entry(GroupKey::for_row(row, profile))
            .or_default()
            .push(Item::from(row));
    }

    groups
        .into_iter()
        .map(|(key, items)| key.into_product(items))
        .collect()
}

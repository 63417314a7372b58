//! # Stock Aggregation
//!
//! Computes `total_stock_sum` for every product: stock entries of all items
//! are summed per location and written back onto the product.
//!
//! The rollup exists in two forms that must agree. `total_stock_pipeline`
//! is the MongoDB pipeline run by the database itself, and `summarize_stock`
//! is the same computation over in-memory documents.

use crate::catalog::{Item, Location, StockEntry};
use mongodb::bson::{doc, Document};

/// Builds the aggregation that rolls item stock up per product and merges the
/// result into `collection` under `total_stock_sum`, keyed by `_id`.
pub fn total_stock_pipeline(collection: &str) -> Vec<Document> {
    let unless_warehouse = |field: &str| {
        doc! {
            "$cond": {
                "if": { "$eq": ["$location.type", "warehouse"] },
                "then": "$$REMOVE",
                "else": format!("${field}"),
            }
        }
    };

    vec![
        doc! { "$unwind": { "path": "$items" } },
        doc! { "$unwind": { "path": "$items.stock" } },
        doc! {
            "$group": {
                "_id": {
                    "product_id": "$_id",
                    "location": "$items.stock.location",
                },
                "location": { "$first": "$items.stock.location" },
                "amount": { "$sum": "$items.stock.amount" },
                "threshold": { "$sum": "$items.stock.threshold" },
                "target": { "$sum": "$items.stock.target" },
                "ordered": { "$sum": "$items.stock.ordered" },
            }
        },
        doc! {
            "$addFields": {
                "stock": {
                    "location": "$location",
                    "amount": "$amount",
                    "threshold": unless_warehouse("threshold"),
                    "target": unless_warehouse("target"),
                    "ordered": unless_warehouse("ordered"),
                }
            }
        },
        doc! { "$project": { "stock": 1 } },
        doc! {
            "$group": {
                "_id": "$_id.product_id",
                "total_stock_sum": { "$addToSet": "$stock" },
            }
        },
        doc! { "$merge": { "into": collection, "on": "_id" } },
    ]
}

#[derive(Default)]
struct Totals {
    amount: i64,
    threshold: i64,
    target: i64,
    ordered: i64,
}

/// Sums the stock of `items` per distinct location, in order of first
/// appearance. Missing fields count as zero, and warehouse summaries drop
/// `threshold`, `target` and `ordered`.
///
/// Returns `None` when the items hold no stock entries at all; such products
/// are skipped by the pipeline's `$unwind` and keep a null total.
pub fn summarize_stock(items: &[Item]) -> Option<Vec<StockEntry>> {
    let mut totals: Vec<(Location, Totals)> = Vec::new();

    for entry in items.iter().flat_map(|item| &item.stock) {
        let position = match totals.iter().position(|(loc, _)| *loc == entry.location) {
            Some(position) => position,
            None => {
                totals.push((entry.location.clone(), Totals::default()));
                totals.len() - 1
            }
        };
        let sum = &mut totals[position].1;
        sum.amount = sum.amount.saturating_add(entry.amount);
        sum.threshold = sum.threshold.saturating_add(entry.threshold.unwrap_or(0));
        sum.target = sum.target.saturating_add(entry.target.unwrap_or(0));
        sum.ordered = sum.ordered.saturating_add(entry.ordered.unwrap_or(0));
    }

    if totals.is_empty() {
        return None;
    }

    let summaries = totals
        .into_iter()
        .map(|(location, sum)| {
            let keep = |value: i64| (!location.is_warehouse()).then_some(value);
            StockEntry {
                threshold: keep(sum.threshold),
                target: keep(sum.target),
                ordered: keep(sum.ordered),
                amount: sum.amount,
                location,
            }
        })
        .collect();
    Some(summaries)
}

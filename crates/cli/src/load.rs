use crate::args::{DbArgs, SheetArgs};
use anyhow::Result;
use clap::Args;
use stockyard::{providers::db::CatalogStore, CatalogLoader, LoadReport};
use tracing::info;

#[derive(Args, Debug)]
pub struct LoadArgs {
    #[command(flatten)]
    sheet: SheetArgs,
    #[command(flatten)]
    db: DbArgs,
    /// Print the load report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub struct AggregateArgs {
    #[command(flatten)]
    db: DbArgs,
}

pub async fn handle_load(args: &LoadArgs) -> Result<()> {
    let source = args.sheet.source()?;
    let store = args.db.connect().await?;

    let result = CatalogLoader::new(&source, &store, args.sheet.grouping)
        .load()
        .await;
    store.shutdown().await;
    let report = result?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, &args.db);
    }
    Ok(())
}

fn print_report(report: &LoadReport, db: &DbArgs) {
    println!(
        "✅ Loaded {} products ({} items) into '{}.{}'.",
        report.products, report.items, db.database, db.collection
    );
    println!(
        "   {} rows read, {} dropped ({} incomplete, {} malformed, {} invalid quantity).",
        report.rows_read,
        report.dropped.total(),
        report.dropped.incomplete,
        report.dropped.malformed,
        report.dropped.invalid_quantity
    );
    let elapsed = report.finished_at - report.started_at;
    println!("   Finished in {} ms.", elapsed.num_milliseconds());
}

pub async fn handle_aggregate(args: &AggregateArgs) -> Result<()> {
    let store = args.db.connect().await?;
    info!(store = store.name(), "Recomputing stock totals.");
    let result = store.merge_stock_totals().await;
    store.shutdown().await;
    result?;

    println!(
        "✅ Recomputed total_stock_sum in '{}.{}'.",
        args.db.database, args.db.collection
    );
    Ok(())
}

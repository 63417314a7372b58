use crate::args::SheetArgs;
use anyhow::Result;
use clap::Args;
use stockyard::{
    providers::db::{CatalogStore, MemoryStore},
    CatalogLoader,
};

#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    sheet: SheetArgs,
    /// Also compute total_stock_sum, as a load would
    #[arg(long)]
    with_totals: bool,
}

/// Prints the product documents as a JSON array on stdout.
pub async fn handle_preview(args: &PreviewArgs) -> Result<()> {
    let source = args.sheet.source()?;
    let store = MemoryStore::new();
    let loader = CatalogLoader::new(&source, &store, args.sheet.grouping);

    let products = if args.with_totals {
        loader.load().await?;
        store.list_products().await?
    } else {
        loader.preview().await?
    };

    println!("{}", serde_json::to_string_pretty(&products)?);
    Ok(())
}

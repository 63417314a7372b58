//! # stockyard: Catalog Loader CLI
//!
//! Loads the product catalog from its Google Sheet into MongoDB. Credentials
//! (`MONGODB_URI`, `SHEET_ID`) are read from the environment or a `.env` file.

mod args;
mod load;
mod preview;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replace the catalog collection with the sheet contents and recompute stock totals
    Load(load::LoadArgs),
    /// Print the product documents the sheet would produce, without writing anything
    Preview(preview::PreviewArgs),
    /// Recompute total_stock_sum over the products already stored
    Aggregate(load::AggregateArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Load(_) => "load",
            Commands::Preview(_) => "preview",
            Commands::Aggregate(_) => "aggregate",
        }
    }
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout is reserved for command output.
    let subscriber = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Load(args) => load::handle_load(args).await,
        Commands::Preview(args) => preview::handle_preview(args).await,
        Commands::Aggregate(args) => load::handle_aggregate(args).await,
    };

    if let Err(e) = result {
        eprintln!("{} failed: {e:#}", cli.command.name());
        std::process::exit(1);
    }
    Ok(())
}

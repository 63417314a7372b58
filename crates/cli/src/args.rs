use clap::Args;
use stockyard::{
    catalog::GroupingProfile,
    constants::{DEFAULT_COLLECTION, DEFAULT_DATABASE},
    providers::db::MongoStore,
};
use stockyard_sheets::{SheetSource, DEFAULT_GID};

/// Where the catalog sheet lives and how its rows are grouped.
#[derive(Args, Debug)]
pub struct SheetArgs {
    /// The Google Sheet id, or a full sheet URL
    #[arg(long, env = "SHEET_ID", hide_env_values = true)]
    pub sheet: String,
    /// The tab (gid) holding the catalog rows
    #[arg(long, env = "SHEET_GID", default_value = DEFAULT_GID)]
    pub gid: String,
    /// Which fields identify a product: "full" or "compact"
    #[arg(long, default_value_t = GroupingProfile::Full)]
    pub grouping: GroupingProfile,
}

impl SheetArgs {
    pub fn source(&self) -> anyhow::Result<SheetSource> {
        Ok(SheetSource::new(&self.sheet, Some(self.gid.as_str()))?)
    }
}

/// The MongoDB collection the catalog is stored in.
#[derive(Args, Debug)]
pub struct DbArgs {
    /// The MongoDB connection string
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub mongodb_uri: String,
    #[arg(long, env = "MONGODB_DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: String,
    #[arg(long, env = "MONGODB_COLLECTION", default_value = DEFAULT_COLLECTION)]
    pub collection: String,
}

impl DbArgs {
    pub async fn connect(&self) -> anyhow::Result<MongoStore> {
        Ok(MongoStore::connect(&self.mongodb_uri, &self.database, &self.collection).await?)
    }
}

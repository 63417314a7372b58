//! # `stockyard-sheets`: Google Sheets Catalog Source
//!
//! Fetches the catalog as a CSV export of a Google Sheet. Implements the
//! `CsvSource` trait from the core `stockyard` library.

use async_trait::async_trait;
use regex::Regex;
use stockyard::{CatalogError, CsvSource};
use thiserror::Error;
use tracing::info;

/// The tab of the catalog spreadsheet holding the product rows.
pub const DEFAULT_GID: &str = "2118402060";

// --- Error Definitions ---

#[derive(Error, Debug, Clone)]
pub enum SheetError {
    #[error("Invalid Google Sheet URL: {0}")]
    InvalidUrl(String),
    #[error("Failed to fetch sheet: {0}")]
    Fetch(String),
}

impl From<reqwest::Error> for SheetError {
    fn from(err: reqwest::Error) -> Self {
        SheetError::Fetch(err.to_string())
    }
}

/// Every sheet failure aborts the load as a fetch error.
impl From<SheetError> for CatalogError {
    fn from(err: SheetError) -> Self {
        CatalogError::Fetch(err.to_string())
    }
}

// --- Public Helper Functions ---

/// Builds the CSV export URL for a sheet.
///
/// `sheet` is either a bare sheet id or a full Google Sheets URL. URLs on
/// `localhost` or `127.0.0.1` keep their scheme and authority so tests can
/// point at a local server.
pub fn construct_export_url(sheet: &str, gid: Option<&str>) -> Result<String, SheetError> {
    let sheet = sheet.trim();
    if sheet.is_empty() {
        return Err(SheetError::InvalidUrl("Sheet id is empty.".to_string()));
    }

    let (base_url, spreadsheets_id) = if sheet.contains("://") {
        let parsed_url =
            reqwest::Url::parse(sheet).map_err(|e| SheetError::InvalidUrl(format!("{e}")))?;

        let re = Regex::new(r"/spreadsheets/d/([a-zA-Z0-9-_]+)")
            .map_err(|e| SheetError::InvalidUrl(format!("Regex compilation failed: {e}")))?;
        let caps = re.captures(parsed_url.path()).ok_or_else(|| {
            SheetError::InvalidUrl("Could not find sheet ID in URL path.".to_string())
        })?;
        let spreadsheets_id = caps
            .get(1)
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| {
                SheetError::InvalidUrl("Sheet ID capture group is missing.".to_string())
            })?;

        let base_url = match parsed_url.host_str() {
            Some("127.0.0.1") | Some("localhost") => {
                format!("{}://{}", parsed_url.scheme(), parsed_url.authority())
            }
            _ => "https://docs.google.com".to_string(),
        };
        (base_url, spreadsheets_id)
    } else {
        let valid = sheet
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(SheetError::InvalidUrl(format!(
                "'{sheet}' is neither a sheet id nor a URL."
            )));
        }
        ("https://docs.google.com".to_string(), sheet.to_string())
    };

    let mut export_url = format!("{base_url}/spreadsheets/d/{spreadsheets_id}/export?format=csv");
    if let Some(gid_val) = gid {
        if !gid_val.is_empty() {
            export_url.push_str(&format!("&gid={gid_val}"));
        }
    }

    Ok(export_url)
}

/// Downloads the content of a Google Sheet as a CSV string.
pub async fn download_csv(client: &reqwest::Client, export_url: &str) -> Result<String, SheetError> {
    info!("Fetching Google Sheet CSV from: {export_url}");
    let response = client.get(export_url).send().await?;
    if !response.status().is_success() {
        return Err(SheetError::Fetch(format!(
            "Request failed with status: {}",
            response.status()
        )));
    }
    response.text().await.map_err(SheetError::from)
}

// --- CsvSource Implementation ---

/// A catalog source reading one tab of a Google Sheet.
#[derive(Debug, Clone)]
pub struct SheetSource {
    export_url: String,
    client: reqwest::Client,
}

impl SheetSource {
    /// Creates a source for `sheet` (id or URL) and tab `gid`.
    pub fn new(sheet: &str, gid: Option<&str>) -> Result<Self, SheetError> {
        Ok(Self {
            export_url: construct_export_url(sheet, gid)?,
            client: reqwest::Client::new(),
        })
    }

    pub fn export_url(&self) -> &str {
        &self.export_url
    }
}

#[async_trait]
impl CsvSource for SheetSource {
    fn describe(&self) -> String {
        self.export_url.clone()
    }

    async fn fetch_csv(&self) -> Result<String, CatalogError> {
        Ok(download_csv(&self.client, &self.export_url).await?)
    }
}

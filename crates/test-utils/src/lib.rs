//! # Shared Test Fixtures
//!
//! Catalog CSV fixtures and a mock spreadsheet server for the integration
//! tests of the `stockyard` crates.

use httpmock::{Method, Mock, MockServer};
use std::sync::Once;

/// The sheet id the mock server answers for.
pub const MOCK_SHEET_ID: &str = "mock_catalog_sheet";

/// The tab id used by the fixtures.
pub const MOCK_GID: &str = "2118402060";

/// A catalog with two complete products and one incomplete row (`Washer` has
/// no category).
pub const CATALOG_CSV: &str = "\
name,category,code,unit,sku,variant,quantity
Bolt,Hardware,B-1,pcs,1001,M6,10
Bolt,Hardware,B-1,pcs,1002,M8,5
Nut,Hardware,N-1,pcs,2001,M6,4
Washer,,W-1,pcs,3001,M6,8
";

static INIT: Once = Once::new();

/// Initializes the tracing subscriber once per test binary.
pub fn setup_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();
    });
}

/// The edit URL of the mock sheet, as a user would paste it.
pub fn mock_sheet_url(server: &MockServer) -> String {
    format!("{}/spreadsheets/d/{MOCK_SHEET_ID}/edit", server.base_url())
}

/// Serves `csv` as the CSV export of the mock sheet's `MOCK_GID` tab.
pub fn mock_catalog_export<'a>(server: &'a MockServer, csv: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(Method::GET)
            .path(format!("/spreadsheets/d/{MOCK_SHEET_ID}/export"))
            .query_param("format", "csv")
            .query_param("gid", MOCK_GID);
        then.status(200)
            .header("Content-Type", "text/csv")
            .body(csv);
    })
}

/// Makes the mock sheet's export fail with `status`.
pub fn mock_failing_export(server: &MockServer, status: u16) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(Method::GET)
            .path(format!("/spreadsheets/d/{MOCK_SHEET_ID}/export"));
        then.status(status).body("unavailable");
    })
}

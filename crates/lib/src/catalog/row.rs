//! # Catalog Rows
//!
//! Parses the raw CSV export into complete `CatalogRow`s. A row is kept only
//! when every cell in it is filled in; anything else is counted and dropped,
//! never partially loaded.

use crate::{
    constants::{REQUIRED_COLUMNS, WAREHOUSE_MULTIPLIER},
    errors::CatalogError,
};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::{debug, warn};

/// One complete line of the catalog sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub name: String,
    pub category: String,
    pub code: String,
    pub unit: String,
    pub sku: String,
    pub variant: String,
    pub quantity: i64,
}

/// Counts of rows left out of a load, by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DroppedRows {
    /// A cell was empty.
    pub incomplete: usize,
    /// The line had a different number of fields than the header.
    pub malformed: usize,
    /// `quantity` was not a whole number, or too large to stock.
    pub invalid_quantity: usize,
}

impl DroppedRows {
    pub fn total(&self) -> usize {
        self.incomplete + self.malformed + self.invalid_quantity
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParsedRows {
    pub rows: Vec<CatalogRow>,
    pub dropped: DroppedRows,
}

impl ParsedRows {
    /// Number of data lines seen, kept or not.
    pub fn read(&self) -> usize {
        self.rows.len() + self.dropped.total()
    }
}

/// The required fields, in `REQUIRED_COLUMNS` order.
#[derive(Debug, Clone, Copy)]
enum Column {
    Name,
    Category,
    Code,
    Unit,
    Sku,
    Variant,
    Quantity,
}

impl Column {
    const ALL: [Column; REQUIRED_COLUMNS.len()] = [
        Column::Name,
        Column::Category,
        Column::Code,
        Column::Unit,
        Column::Sku,
        Column::Variant,
        Column::Quantity,
    ];

    fn header(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Category => "category",
            Column::Code => "code",
            Column::Unit => "unit",
            Column::Sku => "sku",
            Column::Variant => "variant",
            Column::Quantity => "quantity",
        }
    }
}

/// Column positions of the required fields within the header.
struct ColumnIndex([usize; REQUIRED_COLUMNS.len()]);

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, CatalogError> {
        let mut positions = [0; REQUIRED_COLUMNS.len()];
        for (slot, column) in positions.iter_mut().zip(Column::ALL) {
            let header = column.header();
            *slot = headers
                .iter()
                .position(|h| h == header)
                .ok_or_else(|| CatalogError::MissingColumn(header.to_string()))?;
        }
        Ok(Self(positions))
    }

    fn field<'r>(&self, record: &'r StringRecord, column: Column) -> &'r str {
        record.get(self.0[column as usize]).unwrap_or_default()
    }
}

/// Parses a sheet quantity. Whole-number decimals such as `10.0` are accepted,
/// since spreadsheet exports often render integer columns that way.
///
/// Quantities whose warehouse stock would not fit in an `i64` are rejected.
fn parse_quantity(raw: &str) -> Option<i64> {
    let quantity = match raw.parse::<i64>() {
        Ok(quantity) => quantity,
        Err(_) => {
            let value = raw.parse::<f64>().ok()?;
            if !value.is_finite() || value.fract() != 0.0 {
                return None;
            }
            if value < i64::MIN as f64 || value >= i64::MAX as f64 {
                return None;
            }
            value as i64
        }
    };
    quantity.checked_mul(WAREHOUSE_MULTIPLIER)?;
    Some(quantity)
}

/// Parses the catalog CSV export.
pub fn parse_rows(csv_data: &str) -> Result<ParsedRows, CatalogError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(csv_data.as_bytes());

    let headers = reader.headers()?.clone();
    let index = ColumnIndex::from_headers(&headers)?;
    let mut parsed = ParsedRows::default();

    for (line, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != headers.len() {
            warn!(
                line = line + 2,
                fields = record.len(),
                expected = headers.len(),
                "Skipping malformed catalog line."
            );
            parsed.dropped.malformed += 1;
            continue;
        }
        if record.iter().any(str::is_empty) {
            debug!(line = line + 2, "Dropping incomplete catalog row.");
            parsed.dropped.incomplete += 1;
            continue;
        }

        let raw_quantity = index.field(&record, Column::Quantity);
        let Some(quantity) = parse_quantity(raw_quantity) else {
            warn!(line = line + 2, quantity = raw_quantity, "Dropping row with invalid quantity.");
            parsed.dropped.invalid_quantity += 1;
            continue;
        };

        parsed.rows.push(CatalogRow {
            name: index.field(&record, Column::Name).to_string(),
            category: index.field(&record, Column::Category).to_string(),
            code: index.field(&record, Column::Code).to_string(),
            unit: index.field(&record, Column::Unit).to_string(),
            sku: index.field(&record, Column::Sku).to_string(),
            variant: index.field(&record, Column::Variant).to_string(),
            quantity,
        });
    }

    if parsed.dropped.total() > 0 {
        warn!(
            kept = parsed.rows.len(),
            dropped = parsed.dropped.total(),
            "Some catalog rows were left out."
        );
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "name,category,code,unit,sku,variant,quantity";

    #[test]
    fn test_parse_complete_rows() {
        let csv = format!("{HEADER}\nBolt,Hardware,B-1,pcs,1001,M6,10\nNut,Hardware,N-1,pcs,2001,M6,4\n");
        let parsed = parse_rows(&csv).unwrap();
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.read(), 2);
        assert_eq!(
            parsed.rows[0],
            CatalogRow {
                name: "Bolt".into(),
                category: "Hardware".into(),
                code: "B-1".into(),
                unit: "pcs".into(),
                sku: "1001".into(),
                variant: "M6".into(),
                quantity: 10,
            }
        );
    }

    #[test]
    fn test_rows_with_missing_values_are_dropped() {
        let csv = format!(
            "{HEADER},notes\nBolt,Hardware,B-1,pcs,1001,M6,10,ok\nNut,,N-1,pcs,2001,M6,4,ok\nWasher,Hardware,W-1,pcs,3001,M6,2,\n"
        );
        let parsed = parse_rows(&csv).unwrap();
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.dropped.incomplete, 2);
        assert!(parsed.rows.len() < parsed.read());
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let csv = format!("{HEADER}\nBolt,Hardware,B-1,pcs,1001,M6,10,extra\nNut,Hardware,N-1\n");
        let parsed = parse_rows(&csv).unwrap();
        assert!(parsed.rows.is_empty());
        assert_eq!(parsed.dropped.malformed, 2);
    }

    #[test]
    fn test_quantity_parsing() {
        assert_eq!(parse_quantity("12"), Some(12));
        assert_eq!(parse_quantity("12.0"), Some(12));
        assert_eq!(parse_quantity("12.5"), None);
        assert_eq!(parse_quantity("many"), None);
        assert_eq!(parse_quantity("1e30"), None);
        assert_eq!(parse_quantity(&(i64::MAX / 10 + 1).to_string()), None);
        assert_eq!(parse_quantity(&(i64::MAX / 10).to_string()), Some(i64::MAX / 10));
    }

    #[test]
    fn test_quantities_too_large_to_stock_are_dropped() {
        let csv = format!(
            "{HEADER}\nBolt,Hardware,B-1,pcs,1001,M6,1000000000000000000\nNut,Hardware,N-1,pcs,2001,M6,4\n"
        );
        let parsed = parse_rows(&csv).unwrap();
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].name, "Nut");
        assert_eq!(parsed.dropped.invalid_quantity, 1);
    }

    #[test]
    fn test_column_headers_match_required_columns() {
        let headers: Vec<_> = Column::ALL.iter().map(|c| c.header()).collect();
        assert_eq!(headers, REQUIRED_COLUMNS);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "name,category,code,unit,sku,quantity\nBolt,Hardware,B-1,pcs,1001,10\n";
        let err = parse_rows(csv).unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn(ref c) if c == "variant"));
    }

    #[test]
    fn test_columns_may_appear_in_any_order() {
        let csv = "quantity,variant,sku,unit,code,category,name\n6,M8,1002,pcs,B-1,Hardware,Bolt\n";
        let parsed = parse_rows(csv).unwrap();
        assert_eq!(parsed.rows[0].name, "Bolt");
        assert_eq!(parsed.rows[0].quantity, 6);
    }
}

//! CSV loader for sales transaction files

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{Dataset, Transaction};

pub const COL_ORDER_DATE: &str = "OrderDate";
pub const COL_REGION: &str = "Region";
pub const COL_PRODUCT: &str = "Product";
pub const COL_UNITS_SOLD: &str = "UnitsSold";
pub const COL_SALE_PRICE: &str = "SalePrice";

/// Columns every sales file must carry
pub const REQUIRED_COLUMNS: [&str; 5] = [
    COL_ORDER_DATE,
    COL_REGION,
    COL_PRODUCT,
    COL_UNITS_SOLD,
    COL_SALE_PRICE,
];

/// Positions of the required columns within a header row
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    order_date: usize,
    region: usize,
    product: usize,
    units_sold: usize,
    sale_price: usize,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| {
                    Error::DataFormat(format!(
                        "Missing required column: {} (expected {})",
                        name,
                        REQUIRED_COLUMNS.join(",")
                    ))
                })
        };

        Ok(Self {
            order_date: find(COL_ORDER_DATE)?,
            region: find(COL_REGION)?,
            product: find(COL_PRODUCT)?,
            units_sold: find(COL_UNITS_SOLD)?,
            sale_price: find(COL_SALE_PRICE)?,
        })
    }
}

/// Load a sales CSV file from disk
pub fn load_file(path: &Path) -> Result<Dataset> {
    let file = File::open(path)?;
    let dataset = parse_csv(file, path)?;
    info!(
        "Loaded {} sales transactions from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse sales CSV data into a dataset
///
/// Required columns are located by header name, so column order does not
/// matter and extra columns are ignored. Revenue and month are derived here.
pub fn parse_csv<R: Read>(reader: R, source: impl AsRef<Path>) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers)?;
    let mut transactions = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        let row = index + 1;

        let order_date = parse_date(field(&record, columns.order_date, COL_ORDER_DATE, row)?)
            .map_err(|e| row_error(row, COL_ORDER_DATE, e))?;
        let region = field(&record, columns.region, COL_REGION, row)?.trim();
        let product = field(&record, columns.product, COL_PRODUCT, row)?.trim();
        let units_sold = parse_units(field(&record, columns.units_sold, COL_UNITS_SOLD, row)?)
            .map_err(|e| row_error(row, COL_UNITS_SOLD, e))?;
        let sale_price = parse_price(field(&record, columns.sale_price, COL_SALE_PRICE, row)?)
            .map_err(|e| row_error(row, COL_SALE_PRICE, e))?;

        transactions.push(Transaction::new(order_date, region, product, units_sold, sale_price));
    }

    debug!("Parsed {} sales transactions", transactions.len());
    Ok(Dataset::new(source.as_ref(), transactions))
}

fn field<'r>(record: &'r StringRecord, idx: usize, name: &str, row: usize) -> Result<&'r str> {
    record
        .get(idx)
        .ok_or_else(|| Error::DataFormat(format!("Row {}: missing value for {}", row, name)))
}

fn row_error(row: usize, column: &str, err: Error) -> Error {
    match err {
        Error::DataFormat(msg) => Error::DataFormat(format!("Row {}, {}: {}", row, column, msg)),
        other => other,
    }
}

/// Parse a date string in the formats sales exports commonly use
fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d", // 2024-01-15
        "%m/%d/%Y", // 01/15/2024
        "%m/%d/%y", // 01/15/24
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    // Timestamps exported with a time component
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }

    Err(Error::DataFormat(format!("Unable to parse date: {:?}", s)))
}

/// Largest accepted unit count (a signed 64-bit column)
const MAX_UNITS: u64 = i64::MAX as u64;

/// Parse a non-negative integer unit count
fn parse_units(s: &str) -> Result<u64> {
    let cleaned = s.trim().replace(',', "");
    let units = cleaned
        .parse::<u64>()
        .map_err(|_| Error::DataFormat(format!("Unable to parse unit count: {:?}", s)))?;

    if units > MAX_UNITS {
        return Err(Error::DataFormat(format!("Unit count out of range: {:?}", s)));
    }

    Ok(units)
}

/// Parse a non-negative price, tolerating a currency symbol and thousands separators
fn parse_price(s: &str) -> Result<f64> {
    let cleaned: String = s.trim().replace(['$', ',', ' '], "");

    let price = cleaned
        .parse::<f64>()
        .map_err(|_| Error::DataFormat(format!("Unable to parse price: {:?}", s)))?;

    if !price.is_finite() || price < 0.0 {
        return Err(Error::DataFormat(format!(
            "Price must be a non-negative number: {:?}",
            s
        )));
    }

    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::YearMonth;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(
            parse_date("01/15/2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(
            parse_date("2024-01-15 13:45:00").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_date("not a date").is_err());
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units("42").unwrap(), 42);
        assert_eq!(parse_units(" 1,200 ").unwrap(), 1200);
        assert!(parse_units("-3").is_err());
        assert!(parse_units("2.5").is_err());
        assert!(parse_units("ten").is_err());
    }

    #[test]
    fn test_parse_units_range() {
        assert_eq!(parse_units("9223372036854775807").unwrap(), i64::MAX as u64);
        assert!(matches!(
            parse_units("9223372036854775808"),
            Err(Error::DataFormat(_))
        ));
        assert!(parse_units("18446744073709551615").is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("19.99").unwrap(), 19.99);
        assert_eq!(parse_price("$1,234.50").unwrap(), 1234.5);
        assert!(parse_price("-1.00").is_err());
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("abc").is_err());
    }

    #[test]
    fn test_parse_csv_derives_columns() {
        let csv = "OrderDate,Region,Product,UnitsSold,SalePrice
2024-01-05,East,Widget,10,5.00
2024-02-11,West,Gadget,3,12.50";

        let dataset = parse_csv(csv.as_bytes(), "sales.csv").unwrap();
        assert_eq!(dataset.len(), 2);

        let first = &dataset.transactions()[0];
        assert_eq!(first.region, "East");
        assert_eq!(first.product, "Widget");
        assert_eq!(first.units_sold, 10);
        assert_eq!(first.revenue, 50.0);
        assert_eq!(first.month, YearMonth::new(2024, 1).unwrap());

        let second = &dataset.transactions()[1];
        assert_eq!(second.revenue, 37.5);
        assert_eq!(second.month.to_string(), "2024-02");
    }

    #[test]
    fn test_parse_csv_columns_in_any_order() {
        let csv = "Notes,SalePrice,UnitsSold,Product,Region,OrderDate
promo,2.00,4,Widget,North,2024-03-01";

        let dataset = parse_csv(csv.as_bytes(), "reordered.csv").unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.transactions()[0].region, "North");
        assert_eq!(dataset.transactions()[0].revenue, 8.0);
    }

    #[test]
    fn test_parse_csv_missing_column() {
        let csv = "OrderDate,Region,Product,UnitsSold
2024-01-05,East,Widget,10";

        let err = parse_csv(csv.as_bytes(), "bad.csv").unwrap_err();
        match err {
            Error::DataFormat(msg) => assert!(msg.contains("SalePrice")),
            other => panic!("expected DataFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_csv_non_numeric_units() {
        let csv = "OrderDate,Region,Product,UnitsSold,SalePrice
2024-01-05,East,Widget,10,5.00
2024-01-06,East,Widget,many,5.00";

        let err = parse_csv(csv.as_bytes(), "bad.csv").unwrap_err();
        match err {
            Error::DataFormat(msg) => {
                assert!(msg.contains("Row 2"));
                assert!(msg.contains("UnitsSold"));
            }
            other => panic!("expected DataFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_csv_bad_date() {
        let csv = "OrderDate,Region,Product,UnitsSold,SalePrice
someday,East,Widget,10,5.00";

        assert!(matches!(
            parse_csv(csv.as_bytes(), "bad.csv"),
            Err(Error::DataFormat(_))
        ));
    }

    #[test]
    fn test_parse_csv_short_row() {
        let csv = "OrderDate,Region,Product,UnitsSold,SalePrice
2024-01-05,East,Widget";

        assert!(matches!(
            parse_csv(csv.as_bytes(), "short.csv"),
            Err(Error::DataFormat(_))
        ));
    }

    #[test]
    fn test_parse_csv_header_only() {
        let csv = "OrderDate,Region,Product,UnitsSold,SalePrice\n";
        let dataset = parse_csv(csv.as_bytes(), "empty.csv").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_load_file_missing() {
        let err = load_file(Path::new("/nonexistent/sales_data.csv")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

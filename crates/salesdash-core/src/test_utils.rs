//! Test utilities for salesdash-core
//!
//! Sample sales files shared by unit tests, the integration tests and the CLI
//! tests (through the `test-utils` feature).

use crate::import::parse_csv;
use crate::models::Dataset;

/// Six months of sales across four regions and three products, spanning a
/// year boundary. Region totals: East 1220, West 830, North 360, South 210;
/// total revenue 2620, total units 203, mean sale price 15.00.
pub const SAMPLE_SALES_CSV: &str = "OrderDate,Region,Product,UnitsSold,SalePrice
2023-10-03,East,Widget,20,10.00
2023-10-17,West,Gadget,5,25.00
2023-11-02,East,Gizmo,8,15.00
2023-11-20,North,Widget,12,10.00
2023-12-05,West,Widget,30,10.00
2023-12-18,East,Gadget,10,25.00
2024-01-09,South,Gizmo,6,15.00
2024-01-22,East,Widget,25,10.00
2024-02-14,West,Gadget,12,25.00
2024-02-27,North,Gizmo,16,15.00
2024-03-08,East,Widget,40,10.00
2024-03-29,South,Widget,12,10.00
2024-03-30,West,Gizmo,7,15.00
";

/// Revenue rising by exactly 50 each month: 50, 100, 150
pub const LINEAR_SALES_CSV: &str = "OrderDate,Region,Product,UnitsSold,SalePrice
2024-01-15,East,Widget,10,5.0
2024-02-15,East,Widget,20,5.0
2024-03-15,East,Widget,30,5.0
";

/// A single month of history, too little to fit a trend
pub const SINGLE_MONTH_SALES_CSV: &str = "OrderDate,Region,Product,UnitsSold,SalePrice
2024-06-01,East,Widget,10,5.0
2024-06-12,West,Gadget,4,20.0
2024-06-28,East,Gadget,2,20.0
";

pub fn sample_dataset() -> Dataset {
    dataset_from(SAMPLE_SALES_CSV, "sample_sales.csv")
}

pub fn linear_dataset() -> Dataset {
    dataset_from(LINEAR_SALES_CSV, "linear_sales.csv")
}

pub fn single_month_dataset() -> Dataset {
    dataset_from(SINGLE_MONTH_SALES_CSV, "single_month_sales.csv")
}

fn dataset_from(csv: &str, name: &str) -> Dataset {
    parse_csv(csv.as_bytes(), name).expect("fixture CSV must parse")
}

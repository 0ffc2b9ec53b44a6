//! Domain models for SalesDash

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A calendar month bucket, ordered chronologically
///
/// Displays and serializes as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidData(format!(
                "Month out of range: {}-{:02}",
                year, month
            )));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Advance by `months` calendar months, rolling over year boundaries
    pub fn plus_months(&self, months: u32) -> Self {
        let zero_based = self.year as i64 * 12 + (self.month as i64 - 1) + months as i64;
        Self {
            year: zero_based.div_euclid(12) as i32,
            month: zero_based.rem_euclid(12) as u32 + 1,
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid month (use YYYY-MM): {}", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid year in month: {}", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month number in month: {}", s))?;
        YearMonth::new(year, month).map_err(|e| e.to_string())
    }
}

impl TryFrom<String> for YearMonth {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

/// A single sales transaction with its derived columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub order_date: NaiveDate,
    pub region: String,
    pub product: String,
    pub units_sold: u64,
    pub sale_price: f64,
    /// `units_sold * sale_price`, derived at load time
    pub revenue: f64,
    /// Month bucket of `order_date`, derived at load time
    pub month: YearMonth,
}

impl Transaction {
    /// Build a transaction, deriving revenue and month
    pub fn new(
        order_date: NaiveDate,
        region: impl Into<String>,
        product: impl Into<String>,
        units_sold: u64,
        sale_price: f64,
    ) -> Self {
        Self {
            order_date,
            region: region.into(),
            product: product.into(),
            units_sold,
            sale_price,
            revenue: units_sold as f64 * sale_price,
            month: YearMonth::from_date(order_date),
        }
    }
}

/// The full set of loaded transactions, read-only after load
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    source: PathBuf,
    transactions: Vec<Transaction>,
}

impl Dataset {
    pub fn new(source: impl Into<PathBuf>, transactions: Vec<Transaction>) -> Self {
        Self {
            source: source.into(),
            transactions,
        }
    }

    /// Where this dataset was loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Distinct regions in order of first appearance
    pub fn regions(&self) -> Vec<String> {
        distinct_in_order(self.transactions.iter().map(|t| t.region.as_str()))
    }

    /// Distinct products in order of first appearance
    pub fn products(&self) -> Vec<String> {
        distinct_in_order(self.transactions.iter().map(|t| t.product.as_str()))
    }

    /// The values offered by the region/product multi-selects
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            regions: self.regions(),
            products: self.products(),
        }
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(|v| v.to_string())
        .collect()
}

/// Options available for filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub products: Vec<String>,
}

/// Headline numbers for the filtered subset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    /// Sum of revenue, truncated to whole currency units
    pub total_revenue: i64,
    pub total_units: u64,
    /// Unweighted mean of per-transaction sale prices, rounded to 2 decimals
    pub average_sale_price: f64,
    pub transaction_count: usize,
}

/// Revenue summed over one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: YearMonth,
    pub revenue: f64,
}

/// Revenue summed over one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRevenue {
    pub region: String,
    pub revenue: f64,
}

/// Units sold for one product and its share of all units in the subset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductShare {
    pub product: String,
    pub units: u64,
    /// Percentage of total units, 0-100
    pub share_pct: f64,
}

/// A projected month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub month: YearMonth,
    pub predicted_revenue: f64,
}

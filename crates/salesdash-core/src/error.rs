//! Error types for SalesDash

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Data format error: {0}")]
    DataFormat(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The filtered subset is empty. Recovered by the dashboard, never fatal.
    #[error("No data available for the selected filters")]
    EmptySelection,

    /// A trend line needs at least two distinct months.
    #[error("Insufficient history for forecasting: {months} month(s), at least 2 required")]
    InsufficientHistory { months: usize },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;

//! SalesDash Core Library
//!
//! The forecasting and aggregation pipeline behind the sales dashboard:
//! - CSV loader with type coercion and derived revenue/month columns
//! - Process-scoped dataset cache (load once, share read-only)
//! - Filter engine over region and product inclusion sets
//! - Aggregations: monthly revenue, revenue by region, units by product, KPIs
//! - Linear trend forecast of monthly revenue
//! - Top-region insight extraction
//! - Dashboard orchestration with per-section failure isolation

pub mod aggregate;
pub mod cache;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod forecast;
pub mod format;
pub mod import;
pub mod insights;
pub mod models;

/// Test utilities including sample sales CSV fixtures
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use cache::DatasetCache;
pub use dashboard::{Dashboard, DashboardState, DashboardView, ForecastSection, NO_DATA_MESSAGE};
pub use error::{Error, Result};
pub use filter::FilterSelection;
pub use forecast::{Forecast, LinearTrend, FORECAST_HORIZON, HISTORY_WINDOW};
pub use insights::Insight;
pub use models::{
    Dataset, FilterOptions, ForecastPoint, Kpis, MonthlyRevenue, ProductShare, RegionRevenue,
    Transaction, YearMonth,
};

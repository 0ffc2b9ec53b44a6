//! Dashboard render pass
//!
//! One call to [`Dashboard::render`] is one user interaction: filter, then
//! aggregate, forecast and extract the insight, synchronously and in full.
//! Failures are contained to the section they belong to. An empty selection
//! stops the pass with a "no data" state; a forecast that cannot be fitted
//! only blanks the forecast section.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::aggregate;
use crate::error::{Error, Result};
use crate::filter::{self, FilterSelection};
use crate::forecast::{forecast_revenue, Forecast};
use crate::insights::{top_region_insight, Insight};
use crate::models::{Dataset, FilterOptions, Kpis, MonthlyRevenue, ProductShare, RegionRevenue};

/// Message shown when a selection matches no transactions
pub const NO_DATA_MESSAGE: &str =
    "No data available for the selected filters. Please adjust your selection.";

/// Everything the presentation layer needs for one render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub kpis: Kpis,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub revenue_by_region: Vec<RegionRevenue>,
    pub units_by_product: Vec<ProductShare>,
    pub forecast: ForecastSection,
    pub insight: Insight,
}

/// Result of a render pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardState {
    /// The selection matched nothing; no section was computed
    NoData { message: String },
    Ready(Box<DashboardView>),
}

impl DashboardState {
    pub fn view(&self) -> Option<&DashboardView> {
        match self {
            DashboardState::Ready(view) => Some(&**view),
            DashboardState::NoData { .. } => None,
        }
    }
}

/// The forecast section, which may fail without affecting the rest
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ForecastSection {
    Ready(Forecast),
    Unavailable { message: String },
}

impl ForecastSection {
    pub fn forecast(&self) -> Option<&Forecast> {
        match self {
            ForecastSection::Ready(forecast) => Some(forecast),
            ForecastSection::Unavailable { .. } => None,
        }
    }
}

/// Render entry point over a loaded dataset
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Selection with every region and product chosen
    pub fn default_selection(&self) -> FilterSelection {
        FilterSelection::all(&self.dataset)
    }

    pub fn filter_options(&self) -> FilterOptions {
        self.dataset.filter_options()
    }

    /// Forecast over the full dataset, ignoring any filter
    pub fn forecast(&self) -> Result<Forecast> {
        let rows: Vec<_> = self.dataset.transactions().iter().collect();
        forecast_revenue(&aggregate::monthly_revenue(&rows))
    }

    /// Forecast as a dashboard section, with failures turned into a message
    pub fn forecast_section(&self) -> ForecastSection {
        match self.forecast() {
            Ok(forecast) => ForecastSection::Ready(forecast),
            Err(e) => ForecastSection::Unavailable {
                message: e.to_string(),
            },
        }
    }

    /// Run one full render pass for `selection`
    pub fn render(&self, selection: &FilterSelection) -> DashboardState {
        let rows = match filter::apply(&self.dataset, selection) {
            Ok(rows) => rows,
            Err(Error::EmptySelection) => {
                return DashboardState::NoData {
                    message: NO_DATA_MESSAGE.to_string(),
                }
            }
            Err(e) => {
                return DashboardState::NoData {
                    message: e.to_string(),
                }
            }
        };

        let kpis = aggregate::kpis(&rows);
        let monthly_revenue = aggregate::monthly_revenue(&rows);
        let revenue_by_region = aggregate::revenue_by_region(&rows);
        let units_by_product = aggregate::units_by_product(&rows);
        let forecast = self.forecast_section();

        // Non-empty rows always yield at least one region
        let Some(insight) = top_region_insight(&revenue_by_region) else {
            return DashboardState::NoData {
                message: NO_DATA_MESSAGE.to_string(),
            };
        };

        debug!(
            "Rendered dashboard: {} rows, {} months, {} regions, {} products",
            rows.len(),
            monthly_revenue.len(),
            revenue_by_region.len(),
            units_by_product.len()
        );

        DashboardState::Ready(Box::new(DashboardView {
            kpis,
            monthly_revenue,
            revenue_by_region,
            units_by_product,
            forecast,
            insight,
        }))
    }
}

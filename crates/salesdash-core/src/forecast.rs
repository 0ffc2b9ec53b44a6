//! Revenue forecasting
//!
//! Fits an ordinary least-squares line of monthly revenue against a
//! sequential month index and extrapolates it forward. Index 0 is the
//! earliest month present and each observed month takes the next index, so
//! months without sales do not occupy a slot. Forecast labels advance the
//! calendar from the last observed month.
//!
//! Linear trend only: no seasonality and no confidence intervals.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{ForecastPoint, MonthlyRevenue};

/// Number of months projected past the last observed month
pub const FORECAST_HORIZON: usize = 6;

/// Number of trailing historical months shown next to the forecast
pub const HISTORY_WINDOW: usize = 12;

/// A fitted line `value = intercept + slope * index`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    /// Least-squares fit of `values[i]` against `i`
    pub fn fit(values: &[f64]) -> Result<Self> {
        let n = values.len();
        if n < 2 {
            return Err(Error::InsufficientHistory { months: n });
        }

        let n_f = n as f64;
        let mean_x = (n_f - 1.0) / 2.0;
        let mean_y = values.iter().sum::<f64>() / n_f;

        let (sxy, sxx) = values
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(sxy, sxx), (i, &y)| {
                let dx = i as f64 - mean_x;
                (sxy + dx * (y - mean_y), sxx + dx * dx)
            });

        let slope = sxy / sxx;
        Ok(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    pub fn predict(&self, index: usize) -> f64 {
        self.intercept + self.slope * index as f64
    }
}

/// Historical context plus the projected months
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub trend: LinearTrend,
    /// The last `HISTORY_WINDOW` observed months
    pub history: Vec<MonthlyRevenue>,
    /// `FORECAST_HORIZON` months immediately after the last observed month
    pub points: Vec<ForecastPoint>,
}

/// Project revenue for the months after `monthly`
///
/// `monthly` must be chronological; it is expected to cover the whole dataset
/// rather than a filtered subset.
pub fn forecast_revenue(monthly: &[MonthlyRevenue]) -> Result<Forecast> {
    let last = match monthly.last() {
        Some(last) if monthly.len() >= 2 => last,
        _ => {
            warn!(
                "Cannot forecast from {} month(s) of history",
                monthly.len()
            );
            return Err(Error::InsufficientHistory {
                months: monthly.len(),
            });
        }
    };

    let values: Vec<f64> = monthly.iter().map(|m| m.revenue).collect();
    let trend = LinearTrend::fit(&values)?;
    debug!(
        "Fitted revenue trend over {} months: slope={:.2} intercept={:.2}",
        values.len(),
        trend.slope,
        trend.intercept
    );

    let points = (1..=FORECAST_HORIZON)
        .map(|step| ForecastPoint {
            month: last.month.plus_months(step as u32),
            predicted_revenue: trend.predict(values.len() - 1 + step),
        })
        .collect();

    let history = monthly[monthly.len().saturating_sub(HISTORY_WINDOW)..].to_vec();

    Ok(Forecast {
        trend,
        history,
        points,
    })
}

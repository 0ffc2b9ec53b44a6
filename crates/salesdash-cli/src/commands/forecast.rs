//! Forecast command implementation

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use salesdash_core::{DatasetCache, ForecastSection, FORECAST_HORIZON};

use super::{open_dashboard, RULE};

pub fn cmd_forecast(data_path: &Path, json: bool) -> Result<()> {
    let mut cache = DatasetCache::new();
    let dashboard = open_dashboard(&mut cache, data_path)?;

    // Forecasting failure is reported in the section, not as a command error
    let section = dashboard.forecast_section();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &section)?;
        writeln!(out)?;
    } else {
        write_forecast_section(&mut out, &section)?;
    }

    Ok(())
}

/// Render the forecast section: recent history followed by the projection
pub fn write_forecast_section<W: Write>(out: &mut W, section: &ForecastSection) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🔮 Sales Forecast (next {} months)", FORECAST_HORIZON)?;
    writeln!(out, "{}", RULE)?;

    let forecast = match section {
        ForecastSection::Ready(forecast) => forecast,
        ForecastSection::Unavailable { message } => {
            writeln!(out, "   ⚠️  Forecast unavailable: {}", message)?;
            return Ok(());
        }
    };

    writeln!(out, "   {:12} │ {:>12} │ {}", "Month", "Revenue", "Series")?;
    writeln!(out, "   ─────────────┼──────────────┼────────────")?;
    for point in &forecast.history {
        writeln!(
            out,
            "   {:12} │ {:>12.2} │ historical",
            point.month.to_string(),
            point.revenue
        )?;
    }
    for point in &forecast.points {
        writeln!(
            out,
            "   {:12} │ {:>12.2} │ forecast",
            point.month.to_string(),
            point.predicted_revenue
        )?;
    }

    writeln!(
        out,
        "   Trend: {:+.2} per month (linear, full history, ignores filters)",
        forecast.trend.slope
    )
}

//! Dashboard command implementation

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use salesdash_core::format::{format_currency, format_price, format_thousands};
use salesdash_core::{Dashboard, DashboardState, DashboardView, DatasetCache, FilterSelection};
use tracing::warn;

use super::{
    build_selection, open_dashboard, truncate, unknown_values, write_forecast_section, RULE,
};

pub fn cmd_dashboard(
    data_path: &Path,
    regions: &[String],
    products: &[String],
    json: bool,
) -> Result<()> {
    let mut cache = DatasetCache::new();
    let dashboard = open_dashboard(&mut cache, data_path)?;

    let options = dashboard.filter_options();
    for region in unknown_values(regions, &options.regions) {
        warn!("Region not present in data: {}", region);
    }
    for product in unknown_values(products, &options.products) {
        warn!("Product not present in data: {}", product);
    }

    let selection = build_selection(&dashboard, regions, products);
    let state = dashboard.render(&selection);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &state)?;
        writeln!(out)?;
    } else {
        write_dashboard(&mut out, &dashboard, &selection, &state)?;
    }

    Ok(())
}

/// Render a dashboard state as text
pub fn write_dashboard<W: Write>(
    out: &mut W,
    dashboard: &Dashboard,
    selection: &FilterSelection,
    state: &DashboardState,
) -> io::Result<()> {
    let options = dashboard.filter_options();
    let selected_regions = options
        .regions
        .iter()
        .filter(|r| selection.regions.contains(*r))
        .count();
    let selected_products = options
        .products
        .iter()
        .filter(|p| selection.products.contains(*p))
        .count();

    writeln!(out)?;
    writeln!(out, "📊 Sales Performance Dashboard")?;
    writeln!(out, "   Source: {}", dashboard.dataset().source().display())?;
    writeln!(
        out,
        "   Filters: {}/{} regions, {}/{} products",
        selected_regions,
        options.regions.len(),
        selected_products,
        options.products.len()
    )?;
    writeln!(out, "{}", RULE)?;

    let view = match state {
        DashboardState::Ready(view) => view,
        DashboardState::NoData { message } => {
            writeln!(out, "   ⚠️  {}", message)?;
            return Ok(());
        }
    };

    write_kpis(out, view)?;
    write_monthly(out, view)?;
    write_regions(out, view)?;
    write_products(out, view)?;
    write_forecast_section(out, &view.forecast)?;

    writeln!(out)?;
    writeln!(out, "💡 Key Business Insight")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "   {}: {}", view.insight.title, view.insight.summary)?;
    writeln!(out, "   {}", view.insight.detail)?;

    Ok(())
}

fn write_kpis<W: Write>(out: &mut W, view: &DashboardView) -> io::Result<()> {
    let kpis = &view.kpis;
    writeln!(
        out,
        "   {:20} {:20} {:20}",
        "Total Revenue", "Total Units Sold", "Average Sale Price"
    )?;
    writeln!(
        out,
        "   {:20} {:20} {:20}",
        format_currency(kpis.total_revenue),
        format_thousands(kpis.total_units as i64),
        format_price(kpis.average_sale_price)
    )?;
    writeln!(out, "   ({} transactions)", kpis.transaction_count)
}

fn write_monthly<W: Write>(out: &mut W, view: &DashboardView) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "📈 Monthly Revenue Trend")?;
    writeln!(out, "   {:12} │ {:>12}", "Month", "Revenue")?;
    writeln!(out, "   ─────────────┼──────────────")?;
    for point in &view.monthly_revenue {
        writeln!(
            out,
            "   {:12} │ {:>12.2}",
            point.month.to_string(),
            point.revenue
        )?;
    }
    Ok(())
}

fn write_regions<W: Write>(out: &mut W, view: &DashboardView) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🌍 Sales by Region")?;
    writeln!(out, "   {:25} │ {:>12}", "Region", "Revenue")?;
    writeln!(out, "   ──────────────────────────┼──────────────")?;
    for region in &view.revenue_by_region {
        writeln!(
            out,
            "   {:25} │ {:>12.2}",
            truncate(&region.region, 25),
            region.revenue
        )?;
    }
    Ok(())
}

fn write_products<W: Write>(out: &mut W, view: &DashboardView) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🥧 Sales by Product")?;
    writeln!(out, "   {:25} │ {:>8} │ {:>6}", "Product", "Units", "Share")?;
    writeln!(out, "   ──────────────────────────┼──────────┼────────")?;
    for product in &view.units_by_product {
        writeln!(
            out,
            "   {:25} │ {:>8} │ {:>5.1}%",
            truncate(&product.product, 25),
            product.units,
            product.share_pct
        )?;
    }
    Ok(())
}

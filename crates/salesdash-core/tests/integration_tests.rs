//! Integration tests for salesdash-core
//!
//! These tests exercise the full load → filter → aggregate → forecast →
//! insight workflow against CSV files on disk.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use salesdash_core::{
    import::parse_csv, Dashboard, DashboardState, DatasetCache, Error, FilterSelection,
    ForecastSection, FORECAST_HORIZON,
};

/// Two years of monthly sales for three regions and two products.
/// March 2023 has no sales at all, so the month index skips it.
fn two_year_csv() -> String {
    let mut csv = String::from("OrderDate,Region,Product,UnitsSold,SalePrice\n");
    let regions = ["Central", "Coastal", "Mountain"];
    let products = ["Basic", "Premium"];

    for year in [2023, 2024] {
        for month in 1..=12u32 {
            if year == 2023 && month == 3 {
                continue;
            }
            for (r, region) in regions.iter().enumerate() {
                for (p, product) in products.iter().enumerate() {
                    let units = 5 + month as usize + r * 3 + p;
                    let price = if p == 0 { 20.0 } else { 45.5 };
                    csv.push_str(&format!(
                        "{}-{:02}-{:02},{},{},{},{:.2}\n",
                        year,
                        month,
                        10 + r,
                        region,
                        product,
                        units,
                        price
                    ));
                }
            }
        }
    }

    csv
}

fn write_temp_csv(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("sales_data.csv");
    let mut file = std::fs::File::create(&path).expect("create csv");
    file.write_all(body.as_bytes()).expect("write csv");
    path
}

// =============================================================================
// Full Workflow
// =============================================================================

#[test]
fn test_full_dashboard_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_csv(&dir, &two_year_csv());

    let mut cache = DatasetCache::new();
    let dataset = cache.get_or_load(&path).expect("load sales csv");
    assert_eq!(dataset.len(), 23 * 6);

    let dashboard = Dashboard::new(Arc::clone(&dataset));
    let options = dashboard.filter_options();
    assert_eq!(options.regions, vec!["Central", "Coastal", "Mountain"]);
    assert_eq!(options.products, vec!["Basic", "Premium"]);

    let state = dashboard.render(&dashboard.default_selection());
    let view = state.view().expect("default selection renders");

    // 23 observed months, no gap filling for March 2023
    assert_eq!(view.monthly_revenue.len(), 23);
    assert!(view
        .monthly_revenue
        .iter()
        .all(|m| m.month.to_string() != "2023-03"));

    // Conservation: monthly series sums to the subset revenue
    let monthly_total: f64 = view.monthly_revenue.iter().map(|m| m.revenue).sum();
    let row_total: f64 = dataset.transactions().iter().map(|t| t.revenue).sum();
    assert!((monthly_total - row_total).abs() < 1e-6);
    assert_eq!(view.kpis.total_revenue, row_total as i64);

    // Mountain sells the most units at every price point
    assert_eq!(view.revenue_by_region[0].region, "Mountain");
    assert_eq!(view.insight.region, "Mountain");

    let share_total: f64 = view.units_by_product.iter().map(|p| p.share_pct).sum();
    assert!((share_total - 100.0).abs() < 1e-9);

    let forecast = view.forecast.forecast().expect("23 months is enough history");
    assert_eq!(forecast.points.len(), FORECAST_HORIZON);
    assert_eq!(forecast.points[0].month.to_string(), "2025-01");
    assert_eq!(forecast.points[5].month.to_string(), "2025-06");
    assert_eq!(forecast.history.len(), 12);
    assert_eq!(forecast.history[11].month.to_string(), "2024-12");
    // Units grow with the month within each year, so the trend slopes upward
    assert!(forecast.trend.slope > 0.0);
}

#[test]
fn test_repeated_interactions_reuse_cached_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_csv(&dir, &two_year_csv());

    let mut cache = DatasetCache::new();
    let first = cache.get_or_load(&path).unwrap();

    // Each interaction builds a fresh selection against the same dataset
    for region in ["Central", "Coastal", "Mountain"] {
        let dataset = cache.get_or_load(&path).unwrap();
        assert!(Arc::ptr_eq(&first, &dataset));

        let dashboard = Dashboard::new(dataset);
        let selection = dashboard.default_selection().with_regions([region]);
        let state = dashboard.render(&selection);
        let view = state.view().unwrap();
        assert_eq!(view.revenue_by_region.len(), 1);
        assert_eq!(view.revenue_by_region[0].region, region);
    }

    assert_eq!(cache.len(), 1);
}

#[test]
fn test_filtered_subset_matches_manual_filter() {
    let dataset = Arc::new(parse_csv(two_year_csv().as_bytes(), "two_year.csv").unwrap());
    let dashboard = Dashboard::new(Arc::clone(&dataset));

    let selection = FilterSelection::new(["Central", "Coastal"], ["Premium"]);
    let state = dashboard.render(&selection);
    let view = state.view().unwrap();

    let expected: f64 = dataset
        .transactions()
        .iter()
        .filter(|t| (t.region == "Central" || t.region == "Coastal") && t.product == "Premium")
        .map(|t| t.revenue)
        .sum();
    assert_eq!(view.kpis.total_revenue, expected as i64);
    assert_eq!(view.units_by_product.len(), 1);
    assert!((view.units_by_product[0].share_pct - 100.0).abs() < 1e-9);
    assert_eq!(view.kpis.average_sale_price, 45.5);
}

// =============================================================================
// Error Paths
// =============================================================================

#[test]
fn test_empty_selection_yields_no_data() {
    let dataset = Arc::new(parse_csv(two_year_csv().as_bytes(), "two_year.csv").unwrap());
    let dashboard = Dashboard::new(dataset);

    let selection = FilterSelection::new(["Central"], Vec::<String>::new());
    assert!(matches!(
        dashboard.render(&selection),
        DashboardState::NoData { .. }
    ));
}

#[test]
fn test_single_month_dataset_isolates_forecast_failure() {
    let csv = "OrderDate,Region,Product,UnitsSold,SalePrice
2024-06-01,East,Widget,10,5.0
2024-06-20,West,Widget,1,5.0
";
    let dashboard = Dashboard::new(Arc::new(parse_csv(csv.as_bytes(), "june.csv").unwrap()));

    assert!(matches!(
        dashboard.forecast(),
        Err(Error::InsufficientHistory { months: 1 })
    ));

    let state = dashboard.render(&dashboard.default_selection());
    let view = state.view().expect("KPIs render without a forecast");
    assert_eq!(view.kpis.total_revenue, 55);
    assert!(matches!(view.forecast, ForecastSection::Unavailable { .. }));
}

#[test]
fn test_malformed_file_fails_at_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_csv(
        &dir,
        "OrderDate,Region,Product,UnitsSold,SalePrice\n2024-01-01,East,Widget,abc,5.0\n",
    );

    let mut cache = DatasetCache::new();
    assert!(matches!(
        cache.get_or_load(&path),
        Err(Error::DataFormat(_))
    ));
    assert!(cache.is_empty());
}

//! Shared command utilities
//!
//! This module contains:
//! - `open_dashboard` - Load the sales file through the dataset cache
//! - `build_selection` - Turn CLI filter arguments into a selection

use std::path::Path;

use anyhow::{Context, Result};
use salesdash_core::{Dashboard, DatasetCache, FilterSelection};

/// Load (or reuse) the dataset at `data_path` and wrap it in a dashboard
pub fn open_dashboard(cache: &mut DatasetCache, data_path: &Path) -> Result<Dashboard> {
    let dataset = cache
        .get_or_load(data_path)
        .with_context(|| format!("Failed to load sales data from {}", data_path.display()))?;
    Ok(Dashboard::new(dataset))
}

/// Build a selection from CLI values; an empty list selects every value
pub fn build_selection(
    dashboard: &Dashboard,
    regions: &[String],
    products: &[String],
) -> FilterSelection {
    let mut selection = dashboard.default_selection();
    if !regions.is_empty() {
        selection = selection.with_regions(trimmed(regions));
    }
    if !products.is_empty() {
        selection = selection.with_products(trimmed(products));
    }
    selection
}

fn trimmed(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Values in `requested` that the dataset does not contain
pub fn unknown_values<'a>(requested: &'a [String], known: &[String]) -> Vec<&'a str> {
    requested
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty() && !known.iter().any(|k| k == v))
        .collect()
}

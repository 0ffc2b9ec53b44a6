//! Aggregations over a filtered set of transactions
//!
//! Every reduction is a single pass over the rows. Category series keep the
//! order in which each category first appears, then sort descending by their
//! metric; the sort is stable so ties keep first-seen order.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::models::{Kpis, MonthlyRevenue, ProductShare, RegionRevenue, Transaction, YearMonth};

/// Revenue per month in chronological order
///
/// Months without transactions are absent, not zero.
pub fn monthly_revenue(rows: &[&Transaction]) -> Vec<MonthlyRevenue> {
    let mut by_month: BTreeMap<YearMonth, f64> = BTreeMap::new();
    for tx in rows {
        *by_month.entry(tx.month).or_insert(0.0) += tx.revenue;
    }

    by_month
        .into_iter()
        .map(|(month, revenue)| MonthlyRevenue { month, revenue })
        .collect()
}

/// Revenue per region, highest first
pub fn revenue_by_region(rows: &[&Transaction]) -> Vec<RegionRevenue> {
    let mut regions: Vec<RegionRevenue> = group_in_order(
        rows,
        |tx| tx.region.as_str(),
        |tx| tx.revenue,
        0.0,
        |acc, v| *acc += v,
    )
    .into_iter()
    .map(|(region, revenue)| RegionRevenue { region, revenue })
    .collect();

    regions.sort_by(|a, b| b.revenue.partial_cmp(&a.revenue).unwrap_or(Ordering::Equal));
    regions
}

/// Units per product with each product's share of all units, highest first
pub fn units_by_product(rows: &[&Transaction]) -> Vec<ProductShare> {
    let grouped = group_in_order(
        rows,
        |tx| tx.product.as_str(),
        |tx| tx.units_sold,
        0u64,
        |acc, v| *acc = acc.saturating_add(v),
    );

    let total_units = grouped
        .iter()
        .fold(0u64, |acc, (_, units)| acc.saturating_add(*units));

    let mut products: Vec<ProductShare> = grouped
        .into_iter()
        .map(|(product, units)| ProductShare {
            product,
            units,
            share_pct: if total_units > 0 {
                units as f64 / total_units as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect();

    products.sort_by(|a, b| b.units.cmp(&a.units));
    products
}

/// Headline KPIs for the rows
pub fn kpis(rows: &[&Transaction]) -> Kpis {
    let revenue: f64 = rows.iter().map(|tx| tx.revenue).sum();
    let total_units = rows
        .iter()
        .fold(0u64, |acc, tx| acc.saturating_add(tx.units_sold));

    // Mean of unit prices, not weighted by units sold
    let average_sale_price = if rows.is_empty() {
        0.0
    } else {
        let mean = rows.iter().map(|tx| tx.sale_price).sum::<f64>() / rows.len() as f64;
        round_cents(mean)
    };

    Kpis {
        total_revenue: revenue as i64,
        total_units,
        average_sale_price,
        transaction_count: rows.len(),
    }
}

/// Round to 2 decimals, halves to the even cent
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Group rows by a string key, keeping first-seen key order
fn group_in_order<'t, K, V, T, F>(
    rows: &[&'t Transaction],
    key: K,
    value: V,
    zero: T,
    fold: F,
) -> Vec<(String, T)>
where
    K: Fn(&'t Transaction) -> &'t str,
    V: Fn(&'t Transaction) -> T,
    T: Copy,
    F: Fn(&mut T, T),
{
    let mut index: HashMap<&'t str, usize> = HashMap::new();
    let mut groups: Vec<(String, T)> = Vec::new();

    for &tx in rows {
        let k = key(tx);
        let slot = *index.entry(k).or_insert_with(|| {
            groups.push((k.to_string(), zero));
            groups.len() - 1
        });
        fold(&mut groups[slot].1, value(tx));
    }

    groups
}

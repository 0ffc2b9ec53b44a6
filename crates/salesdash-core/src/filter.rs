//! Region/product filter engine

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{Dataset, Transaction};

/// Allowed values for each filter dimension
///
/// A transaction passes when its region is selected AND its product is
/// selected. Within a dimension any selected value matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub regions: BTreeSet<String>,
    pub products: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new<R, P>(regions: R, products: P) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            regions: regions.into_iter().map(Into::into).collect(),
            products: products.into_iter().map(Into::into).collect(),
        }
    }

    /// Every distinct region and product in the dataset (the default selection)
    pub fn all(dataset: &Dataset) -> Self {
        Self::new(dataset.regions(), dataset.products())
    }

    /// Replace the region set
    pub fn with_regions<I>(mut self, regions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.regions = regions.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the product set
    pub fn with_products<I>(mut self, products: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.products = products.into_iter().map(Into::into).collect();
        self
    }

    /// True when every value in the dataset is selected
    pub fn is_default_for(&self, dataset: &Dataset) -> bool {
        dataset.regions().iter().all(|r| self.regions.contains(r))
            && dataset.products().iter().all(|p| self.products.contains(p))
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        self.regions.contains(&tx.region) && self.products.contains(&tx.product)
    }
}

/// Select the transactions matching `selection`, in dataset order
///
/// Returns `Error::EmptySelection` when nothing matches; callers must skip
/// aggregation, forecasting and insights for that render.
pub fn apply<'d>(
    dataset: &'d Dataset,
    selection: &FilterSelection,
) -> Result<Vec<&'d Transaction>> {
    let rows: Vec<&Transaction> = dataset
        .transactions()
        .iter()
        .filter(|tx| selection.matches(tx))
        .collect();

    if rows.is_empty() {
        warn!(
            "Selection of {} region(s) and {} product(s) matched no transactions",
            selection.regions.len(),
            selection.products.len()
        );
        return Err(Error::EmptySelection);
    }

    debug!("Filtered {} of {} transactions", rows.len(), dataset.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_dataset;

    #[test]
    fn test_default_selection_is_identity() {
        let dataset = sample_dataset();
        let selection = FilterSelection::all(&dataset);
        assert!(selection.is_default_for(&dataset));

        let rows = apply(&dataset, &selection).unwrap();
        assert_eq!(rows.len(), dataset.len());
        for (row, tx) in rows.iter().zip(dataset.transactions()) {
            assert_eq!(*row, tx);
        }
    }

    #[test]
    fn test_conjunction_across_dimensions() {
        let dataset = sample_dataset();
        let selection = FilterSelection::all(&dataset)
            .with_regions(["East"])
            .with_products(["Widget"]);

        let rows = apply(&dataset, &selection).unwrap();
        assert!(!rows.is_empty());
        assert!(rows
            .iter()
            .all(|tx| tx.region == "East" && tx.product == "Widget"));
        assert!(!selection.is_default_for(&dataset));
    }

    #[test]
    fn test_disjunction_within_dimension() {
        let dataset = sample_dataset();
        let selection = FilterSelection::all(&dataset).with_regions(["East", "West"]);

        let rows = apply(&dataset, &selection).unwrap();
        let expected = dataset
            .transactions()
            .iter()
            .filter(|tx| tx.region == "East" || tx.region == "West")
            .count();
        assert_eq!(rows.len(), expected);
    }

    #[test]
    fn test_empty_intersection_signals_empty_selection() {
        let dataset = sample_dataset();

        let unknown = FilterSelection::all(&dataset).with_regions(["Atlantis"]);
        assert!(matches!(apply(&dataset, &unknown), Err(Error::EmptySelection)));

        let cleared = FilterSelection::all(&dataset).with_products(Vec::<String>::new());
        assert!(matches!(apply(&dataset, &cleared), Err(Error::EmptySelection)));
    }
}

//! Key business insight extraction
//!
//! Turns the region ranking into a single highlight ready for display.

use serde::{Deserialize, Serialize};

use crate::format::format_currency;
use crate::models::RegionRevenue;

/// A human-readable highlight derived from aggregated results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Short title (e.g., "Top Performing Region")
    pub title: String,
    /// The region the insight is about
    pub region: String,
    /// Region revenue in whole currency units
    pub revenue: i64,
    /// One-sentence summary naming the region and its revenue
    pub summary: String,
    /// Follow-up recommendation
    pub detail: String,
}

/// Highlight the top region of a ranking sorted highest first
///
/// Returns `None` for an empty ranking.
pub fn top_region_insight(regions: &[RegionRevenue]) -> Option<Insight> {
    let top = regions.first()?;
    let revenue = top.revenue as i64;

    Some(Insight {
        title: "Top Performing Region".to_string(),
        region: top.region.clone(),
        revenue,
        summary: format!(
            "The {} region is the top-performing market, contributing {} in revenue.",
            top.region,
            format_currency(revenue)
        ),
        detail: "Strategic initiatives and marketing budgets could be focused on replicating \
                 the success of this region in other markets, or on further investing here \
                 to maximize growth."
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_region_insight() {
        let regions = vec![
            RegionRevenue {
                region: "East".to_string(),
                revenue: 125_430.75,
            },
            RegionRevenue {
                region: "West".to_string(),
                revenue: 98_000.0,
            },
        ];

        let insight = top_region_insight(&regions).unwrap();
        assert_eq!(insight.region, "East");
        assert_eq!(insight.revenue, 125_430);
        assert_eq!(
            insight.summary,
            "The East region is the top-performing market, contributing $125,430 in revenue."
        );
        assert!(insight.detail.contains("maximize growth"));
    }

    #[test]
    fn test_top_region_insight_empty() {
        assert!(top_region_insight(&[]).is_none());
    }
}

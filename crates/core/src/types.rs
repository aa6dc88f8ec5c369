use serde::{Deserialize, Serialize};

/// Label given to the synthetic record that sums a whole report.
pub const TOTAL_LABEL: &str = "TOTAL";

/// Raw campaign performance as read from one input row.
///
/// Every measure is finite and non-negative once it leaves the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub name: String,
    pub impressions: f64,
    pub clicks: f64,
    pub conversions: f64,
    pub spend: f64,
    pub revenue: f64,
}

impl CampaignRecord {
    pub fn new(
        name: impl Into<String>,
        impressions: f64,
        clicks: f64,
        conversions: f64,
        spend: f64,
        revenue: f64,
    ) -> Self {
        Self {
            name: name.into(),
            impressions,
            clicks,
            conversions,
            spend,
            revenue,
        }
    }

    /// A record with every measure at zero.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, 0.0, 0.0, 0.0, 0.0, 0.0)
    }
}

/// KPIs derived from a [`CampaignRecord`], with the raw measures carried along.
///
/// Ratios are rounded to two decimals. A ratio whose denominator is zero is
/// exactly `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignMetrics {
    pub name: String,
    /// Click-through rate, percent.
    pub ctr: f64,
    /// Conversion rate, percent.
    pub cvr: f64,
    /// Cost per click.
    pub cpc: f64,
    /// Cost per acquisition.
    pub cpa: f64,
    /// Return on ad spend.
    pub roas: f64,
    pub rev_per_conv: f64,
    pub impressions: f64,
    pub clicks: f64,
    pub conversions: f64,
    pub spend: f64,
    pub revenue: f64,
}

impl CampaignMetrics {
    /// The raw measures this row was computed from.
    pub fn to_record(&self) -> CampaignRecord {
        CampaignRecord {
            name: self.name.clone(),
            impressions: self.impressions,
            clicks: self.clicks,
            conversions: self.conversions,
            spend: self.spend,
            revenue: self.revenue,
        }
    }

    pub fn has_conversions(&self) -> bool {
        self.conversions > 0.0
    }
}

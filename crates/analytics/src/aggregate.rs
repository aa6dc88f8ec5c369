//! Blended totals across campaigns.
//!
//! Totals are recomputed from summed raw measures, so large campaigns weigh
//! more than small ones. Per-row ratios are never averaged.

use crate::kpi::compute_metrics;
use campaign_core::types::{CampaignMetrics, CampaignRecord, TOTAL_LABEL};

/// Field-wise sum of `records`, labelled [`TOTAL_LABEL`]. Records from the
/// loader always sum to finite totals.
pub fn total_record<'a, I>(records: I) -> CampaignRecord
where
    I: IntoIterator<Item = &'a CampaignRecord>,
{
    records
        .into_iter()
        .fold(CampaignRecord::empty(TOTAL_LABEL), |mut total, r| {
            total.impressions += r.impressions;
            total.clicks += r.clicks;
            total.conversions += r.conversions;
            total.spend += r.spend;
            total.revenue += r.revenue;
            total
        })
}

pub fn blended_metrics<'a, I>(records: I) -> CampaignMetrics
where
    I: IntoIterator<Item = &'a CampaignRecord>,
{
    compute_metrics(&total_record(records))
}

//! Per-campaign KPI computation.

use campaign_core::types::{CampaignMetrics, CampaignRecord};

/// `numerator / denominator`, or `0.0` when the denominator is zero.
///
/// A quotient that overflows to a non-finite value is also reported as `0.0`,
/// so every ratio built on this stays finite and sortable.
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let q = numerator / denominator;
    if q.is_finite() {
        q
    } else {
        0.0
    }
}

/// Round to two decimals, ties away from zero.
///
/// Non-finite input rounds to `0.0`. Magnitudes too large to scale by 100 have
/// no fractional part and come back unchanged. The result is never `-0.0`.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let scaled = value * 100.0;
    let rounded = if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    };
    rounded + 0.0
}

pub fn compute_metrics(record: &CampaignRecord) -> CampaignMetrics {
    CampaignMetrics {
        name: record.name.clone(),
        ctr: round2(safe_div(record.clicks, record.impressions) * 100.0),
        cvr: round2(safe_div(record.conversions, record.clicks) * 100.0),
        cpc: round2(safe_div(record.spend, record.clicks)),
        cpa: round2(safe_div(record.spend, record.conversions)),
        roas: round2(safe_div(record.revenue, record.spend)),
        rev_per_conv: round2(safe_div(record.revenue, record.conversions)),
        impressions: record.impressions,
        clicks: record.clicks,
        conversions: record.conversions,
        spend: record.spend,
        revenue: record.revenue,
    }
}

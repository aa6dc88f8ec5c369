//! Portfolio-level reads on top of the per-campaign KPIs: ROAS tiers and the
//! median acquisition cost.

use campaign_core::types::CampaignMetrics;
use serde::{Deserialize, Serialize};

/// ROAS at or above which a campaign counts as strong.
pub const STRONG_ROAS: f64 = 3.0;
/// Break-even ROAS.
pub const BREAK_EVEN_ROAS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    /// ROAS >= 3.0
    Strong,
    /// 1.0 <= ROAS < 3.0
    Viable,
    /// ROAS < 1.0
    Unprofitable,
}

impl PerformanceTier {
    pub fn of(metrics: &CampaignMetrics) -> Self {
        if metrics.roas >= STRONG_ROAS {
            Self::Strong
        } else if metrics.roas >= BREAK_EVEN_ROAS {
            Self::Viable
        } else {
            Self::Unprofitable
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub strong: usize,
    pub viable: usize,
    pub unprofitable: usize,
}

impl TierCounts {
    pub fn tally(metrics: &[CampaignMetrics]) -> Self {
        metrics
            .iter()
            .fold(Self::default(), |mut counts, m| {
                match PerformanceTier::of(m) {
                    PerformanceTier::Strong => counts.strong += 1,
                    PerformanceTier::Viable => counts.viable += 1,
                    PerformanceTier::Unprofitable => counts.unprofitable += 1,
                }
                counts
            })
    }
}

/// Median CPA over campaigns with at least one conversion.
pub fn median_cpa(metrics: &[CampaignMetrics]) -> Option<f64> {
    let mut cpas: Vec<f64> = metrics
        .iter()
        .filter(|m| m.has_conversions())
        .map(|m| m.cpa)
        .collect();
    if cpas.is_empty() {
        return None;
    }
    cpas.sort_by(f64::total_cmp);

    let mid = cpas.len() / 2;
    let median = if cpas.len() % 2 == 0 {
        (cpas[mid - 1] + cpas[mid]) / 2.0
    } else {
        cpas[mid]
    };
    Some(median)
}

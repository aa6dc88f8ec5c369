//! Filter, sort, and selection over computed campaign metrics.

use campaign_core::types::CampaignMetrics;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tracing::warn;

/// Metric a report is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Roas,
    Ctr,
    Cvr,
    Cpa,
    Spend,
    Revenue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

struct SortRule {
    key: SortKey,
    name: &'static str,
    field: fn(&CampaignMetrics) -> f64,
    direction: SortDirection,
}

/// Every key maps to the field it reads and the order that puts the best
/// campaign first. CPA is a cost, so lower sorts first.
static SORT_TABLE: [SortRule; 6] = [
    SortRule {
        key: SortKey::Roas,
        name: "roas",
        field: |m| m.roas,
        direction: SortDirection::Descending,
    },
    SortRule {
        key: SortKey::Ctr,
        name: "ctr",
        field: |m| m.ctr,
        direction: SortDirection::Descending,
    },
    SortRule {
        key: SortKey::Cvr,
        name: "cvr",
        field: |m| m.cvr,
        direction: SortDirection::Descending,
    },
    SortRule {
        key: SortKey::Cpa,
        name: "cpa",
        field: |m| m.cpa,
        direction: SortDirection::Ascending,
    },
    SortRule {
        key: SortKey::Spend,
        name: "spend",
        field: |m| m.spend,
        direction: SortDirection::Descending,
    },
    SortRule {
        key: SortKey::Revenue,
        name: "revenue",
        field: |m| m.revenue,
        direction: SortDirection::Descending,
    },
];

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Roas,
        SortKey::Ctr,
        SortKey::Cvr,
        SortKey::Cpa,
        SortKey::Spend,
        SortKey::Revenue,
    ];

    fn rule(self) -> &'static SortRule {
        // SORT_TABLE is ordered like the enum.
        &SORT_TABLE[self as usize]
    }

    /// Exact (case-insensitive) lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        SORT_TABLE
            .iter()
            .find(|rule| rule.name.eq_ignore_ascii_case(name))
            .map(|rule| rule.key)
    }

    /// Lookup that falls back to [`SortKey::Roas`] for absent or unknown names.
    pub fn resolve(name: Option<&str>) -> Self {
        match name {
            None => Self::default(),
            Some(n) => Self::from_name(n).unwrap_or_else(|| {
                warn!(sort_key = %n, "Unrecognized sort key, falling back to roas");
                Self::default()
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        self.rule().name
    }

    pub fn direction(self) -> SortDirection {
        self.rule().direction
    }

    /// The metric value this key orders by.
    pub fn value(self, metrics: &CampaignMetrics) -> f64 {
        (self.rule().field)(metrics)
    }

    /// Ordering that puts the better campaign first. `0.0` and `-0.0` tie.
    pub fn compare(self, a: &CampaignMetrics, b: &CampaignMetrics) -> Ordering {
        let (x, y) = match self.direction() {
            SortDirection::Ascending => (self.value(a), self.value(b)),
            SortDirection::Descending => (self.value(b), self.value(a)),
        };
        x.partial_cmp(&y).unwrap_or_else(|| x.total_cmp(&y))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep campaigns with `roas >= min_roas`, in input order.
pub fn filter_min_roas(metrics: Vec<CampaignMetrics>, min_roas: f64) -> Vec<CampaignMetrics> {
    metrics.into_iter().filter(|m| m.roas >= min_roas).collect()
}

/// Stable sort by `key`; ties keep their input order.
pub fn sort_by_key(metrics: &mut [CampaignMetrics], key: SortKey) {
    metrics.sort_by(|a, b| key.compare(a, b));
}

/// Leader of an already sorted sequence.
pub fn best_by_sort_key(sorted: &[CampaignMetrics]) -> Option<&CampaignMetrics> {
    sorted.first()
}

/// Cheapest acquisition among campaigns that converted at least once.
///
/// Campaigns without conversions carry a CPA of zero and are skipped; on ties
/// the earliest campaign wins.
pub fn lowest_cpa(metrics: &[CampaignMetrics]) -> Option<&CampaignMetrics> {
    let mut best: Option<&CampaignMetrics> = None;
    for m in metrics.iter().filter(|m| m.has_conversions()) {
        match best {
            Some(b) if m.cpa >= b.cpa => {}
            _ => best = Some(m),
        }
    }
    best
}

// ─── Tests ──────────────────────────────────────────────────────────────────

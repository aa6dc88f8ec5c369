//! Campaign KPI engine: per-campaign metrics, blended totals, and the
//! filter/sort pipeline that feeds the reporters.

pub mod aggregate;
pub mod insights;
pub mod kpi;
pub mod pipeline;
pub mod report;

pub use aggregate::{blended_metrics, total_record};
pub use insights::{median_cpa, PerformanceTier, TierCounts};
pub use kpi::{compute_metrics, round2, safe_div};
pub use pipeline::{
    best_by_sort_key, filter_min_roas, lowest_cpa, sort_by_key, SortDirection, SortKey,
};
pub use report::{CampaignReport, ReportOptions};

//! End-to-end assembly of a campaign report from loaded records.

use crate::aggregate::blended_metrics;
use crate::insights::{median_cpa, TierCounts};
use crate::kpi::compute_metrics;
use crate::pipeline::{best_by_sort_key, filter_min_roas, lowest_cpa, sort_by_key, SortKey};
use campaign_core::types::{CampaignMetrics, CampaignRecord};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub sort_key: SortKey,
    /// Campaigns with a lower ROAS are left out of the report and its totals.
    pub min_roas: f64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            sort_key: SortKey::Roas,
            min_roas: 0.0,
        }
    }
}

/// Everything a reporter needs: rows in display order, blended totals, and the
/// highlighted campaigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignReport {
    pub sort_key: SortKey,
    pub min_roas: f64,
    /// Rows read before filtering.
    pub loaded: usize,
    pub campaigns: Vec<CampaignMetrics>,
    pub totals: CampaignMetrics,
    pub best: Option<CampaignMetrics>,
    pub lowest_cpa: Option<CampaignMetrics>,
    pub tiers: TierCounts,
    pub median_cpa: Option<f64>,
}

impl CampaignReport {
    pub fn build(records: &[CampaignRecord], options: &ReportOptions) -> Self {
        let computed: Vec<CampaignMetrics> = records.iter().map(compute_metrics).collect();
        let mut campaigns = filter_min_roas(computed, options.min_roas);
        sort_by_key(&mut campaigns, options.sort_key);

        let kept: Vec<CampaignRecord> = campaigns.iter().map(CampaignMetrics::to_record).collect();
        let totals = blended_metrics(&kept);

        info!(
            loaded = records.len(),
            kept = campaigns.len(),
            sort_key = %options.sort_key,
            min_roas = options.min_roas,
            "Campaign report computed"
        );

        Self {
            sort_key: options.sort_key,
            min_roas: options.min_roas,
            loaded: records.len(),
            best: best_by_sort_key(&campaigns).cloned(),
            lowest_cpa: lowest_cpa(&campaigns).cloned(),
            tiers: TierCounts::tally(&campaigns),
            median_cpa: median_cpa(&campaigns),
            campaigns,
            totals,
        }
    }

    pub fn filtered_out(&self) -> usize {
        self.loaded - self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CampaignRecord> {
        vec![
            CampaignRecord::new("Search", 120_000.0, 4_800.0, 320.0, 1_850.0, 9_200.0),
            CampaignRecord::new("Display", 400_000.0, 1_200.0, 30.0, 2_000.0, 1_500.0),
            CampaignRecord::new("Social", 80_000.0, 2_400.0, 0.0, 600.0, 0.0),
            CampaignRecord::new("Email", 20_000.0, 1_000.0, 120.0, 300.0, 2_400.0),
        ]
    }

    #[test]
    fn test_default_options_keep_everything() {
        let report = CampaignReport::build(&sample(), &ReportOptions::default());
        assert_eq!(report.loaded, 4);
        assert_eq!(report.campaigns.len(), 4);
        assert_eq!(report.filtered_out(), 0);
        let names: Vec<_> = report.campaigns.iter().map(|m| m.name.as_str()).collect();
        // ROAS: Email 8.0, Search 4.97, Display 0.75, Social 0.
        assert_eq!(names, vec!["Email", "Search", "Display", "Social"]);
        assert_eq!(report.best.as_ref().unwrap().name, "Email");
    }

    #[test]
    fn test_totals_cover_only_filtered_campaigns() {
        let options = ReportOptions {
            sort_key: SortKey::Spend,
            min_roas: 1.0,
        };
        let report = CampaignReport::build(&sample(), &options);
        let names: Vec<_> = report.campaigns.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Search", "Email"]);
        assert_eq!(report.filtered_out(), 2);
        assert_eq!(report.totals.spend, 2_150.0);
        assert_eq!(report.totals.revenue, 11_600.0);
        assert_eq!(report.totals.roas, 5.4);
        assert_eq!(report.best.as_ref().unwrap().name, "Search");
    }

    #[test]
    fn test_lowest_cpa_skips_unconverted() {
        let options = ReportOptions {
            sort_key: SortKey::Cpa,
            min_roas: 0.0,
        };
        let report = CampaignReport::build(&sample(), &options);
        // Social has no conversions and sorts first by CPA.
        assert_eq!(report.campaigns[0].name, "Social");
        let lowest = report.lowest_cpa.as_ref().unwrap();
        assert_eq!(lowest.name, "Email");
        assert_eq!(lowest.cpa, 2.5);
    }

    #[test]
    fn test_insights() {
        let report = CampaignReport::build(&sample(), &ReportOptions::default());
        assert_eq!(report.tiers.strong, 2);
        assert_eq!(report.tiers.viable, 0);
        assert_eq!(report.tiers.unprofitable, 2);
        // CPAs with conversions: 5.78, 66.67, 2.5
        assert_eq!(report.median_cpa, Some(5.78));
    }

    #[test]
    fn test_everything_filtered() {
        let options = ReportOptions {
            sort_key: SortKey::Roas,
            min_roas: 100.0,
        };
        let report = CampaignReport::build(&sample(), &options);
        assert!(report.is_empty());
        assert!(report.best.is_none());
        assert!(report.lowest_cpa.is_none());
        assert_eq!(report.totals.spend, 0.0);
        assert_eq!(report.totals.roas, 0.0);
        assert_eq!(report.median_cpa, None);
    }
}

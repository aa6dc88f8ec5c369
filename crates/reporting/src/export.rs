//! Machine-readable exports of a campaign report.

use campaign_analytics::CampaignReport;
use campaign_core::{CampaignError, CampaignResult};

/// Pretty-printed JSON of the whole report.
pub fn export_json(report: &CampaignReport) -> CampaignResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// One CSV row per campaign in report order, followed by the blended total.
pub fn export_csv(report: &CampaignReport) -> CampaignResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for m in report.campaigns.iter().chain(std::iter::once(&report.totals)) {
        wtr.serialize(m)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| CampaignError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| CampaignError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

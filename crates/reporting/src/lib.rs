//! Campaign report rendering: terminal dashboard, JSON and CSV exports.

pub mod dashboard;
pub mod export;
pub mod format;

pub use dashboard::render_dashboard;
pub use export::{export_csv, export_json};
pub use format::OutputFormat;

use campaign_analytics::CampaignReport;
use campaign_core::CampaignResult;
use tracing::debug;

/// Render `report` in the requested format. `source` names the input in the
/// dashboard header.
pub fn render(report: &CampaignReport, format: OutputFormat, source: &str) -> CampaignResult<String> {
    debug!(%format, rows = report.campaigns.len(), "Rendering campaign report");
    match format {
        OutputFormat::Table => Ok(render_dashboard(report, source)),
        OutputFormat::Json => export_json(report),
        OutputFormat::Csv => export_csv(report),
    }
}

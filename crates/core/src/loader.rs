//! CSV ingestion of campaign performance rows.
//!
//! The header row is required and must name every column in
//! [`REQUIRED_COLUMNS`] (case-insensitive, any order). Loading is
//! all-or-nothing: the first bad cell aborts the whole load.

use crate::error::{CampaignError, CampaignResult};
use crate::types::CampaignRecord;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "campaign_name",
    "impressions",
    "clicks",
    "conversions",
    "spend",
    "revenue",
];

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    name: usize,
    impressions: usize,
    clicks: usize,
    conversions: usize,
    spend: usize,
    revenue: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> CampaignResult<Self> {
        let positions: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_lowercase(), i))
            .collect();

        let find = |col: &str| {
            positions
                .get(col)
                .copied()
                .ok_or_else(|| CampaignError::MissingColumn(col.to_string()))
        };

        Ok(Self {
            name: find("campaign_name")?,
            impressions: find("impressions")?,
            clicks: find("clicks")?,
            conversions: find("conversions")?,
            spend: find("spend")?,
            revenue: find("revenue")?,
        })
    }
}

/// Load campaign records from a CSV file on disk.
pub fn load_csv(path: &Path) -> CampaignResult<Vec<CampaignRecord>> {
    let file = std::fs::File::open(path)?;
    let records = load_reader(file)?;
    debug!(path = %path.display(), rows = records.len(), "Loaded campaign CSV");
    Ok(records)
}

/// Load campaign records from any CSV source.
pub fn load_reader<R: Read>(reader: R) -> CampaignResult<Vec<CampaignRecord>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnIndex::from_headers(reader.headers()?)?;

    let mut campaigns = Vec::new();
    let mut totals = ColumnTotals::default();
    for (idx, result) in reader.records().enumerate() {
        // The header is row 1; blank lines are skipped and not counted.
        let line = idx as u64 + 2;
        let row = result?;
        let record = parse_row(&row, &columns, line)?;
        totals.add(&record, line)?;
        campaigns.push(record);
    }
    Ok(campaigns)
}

/// Running column sums. Every subset of the loaded rows sums to no more than
/// these, so a file that loads can always be aggregated to finite totals.
#[derive(Default)]
struct ColumnTotals {
    impressions: f64,
    clicks: f64,
    conversions: f64,
    spend: f64,
    revenue: f64,
}

impl ColumnTotals {
    fn add(&mut self, record: &CampaignRecord, line: u64) -> CampaignResult<()> {
        let columns = [
            (&mut self.impressions, record.impressions, "impressions"),
            (&mut self.clicks, record.clicks, "clicks"),
            (&mut self.conversions, record.conversions, "conversions"),
            (&mut self.spend, record.spend, "spend"),
            (&mut self.revenue, record.revenue, "revenue"),
        ];
        for (total, value, column) in columns {
            *total += value;
            if !total.is_finite() {
                return Err(CampaignError::parse(
                    line,
                    column,
                    "column total exceeds the representable range",
                ));
            }
        }
        Ok(())
    }
}

fn parse_row(
    row: &StringRecord,
    columns: &ColumnIndex,
    line: u64,
) -> CampaignResult<CampaignRecord> {
    let measure = |idx: usize, col: &str| -> CampaignResult<f64> {
        let raw = row
            .get(idx)
            .ok_or_else(|| CampaignError::parse(line, col, "value is missing"))?;
        parse_measure(raw).map_err(|reason| CampaignError::parse(line, col, reason))
    };

    let name = row
        .get(columns.name)
        .ok_or_else(|| CampaignError::parse(line, "campaign_name", "value is missing"))?;

    Ok(CampaignRecord {
        name: name.trim().to_string(),
        impressions: measure(columns.impressions, "impressions")?,
        clicks: measure(columns.clicks, "clicks")?,
        conversions: measure(columns.conversions, "conversions")?,
        spend: measure(columns.spend, "spend")?,
        revenue: measure(columns.revenue, "revenue")?,
    })
}

/// Parse one numeric cell. Thousands separators are accepted.
fn parse_measure(raw: &str) -> Result<f64, String> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err("value is empty".to_string());
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| format!("{raw:?} is not a number"))?;

    if !value.is_finite() {
        return Err(format!("{raw:?} is not a finite number"));
    }
    if value < 0.0 {
        return Err(format!("{raw:?} is negative"));
    }
    // "-0" parses to negative zero.
    Ok(value + 0.0)
}

// ─── Tests ──────────────────────────────────────────────────────────────────

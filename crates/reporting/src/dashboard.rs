//! Terminal dashboard: per-campaign table, blended summary and highlights.

use campaign_analytics::{CampaignReport, SortKey};
use campaign_core::types::CampaignMetrics;
use colored::{ColoredString, Colorize};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

const RULE_WIDTH: usize = 49;

#[derive(Debug, Clone, Tabled)]
struct DashboardRow {
    #[tabled(rename = "Campaign")]
    name: String,
    #[tabled(rename = "Impr")]
    impressions: String,
    #[tabled(rename = "Clicks")]
    clicks: String,
    #[tabled(rename = "Conv")]
    conversions: String,
    #[tabled(rename = "CTR%")]
    ctr: String,
    #[tabled(rename = "CVR%")]
    cvr: String,
    #[tabled(rename = "CPC")]
    cpc: String,
    #[tabled(rename = "CPA")]
    cpa: String,
    #[tabled(rename = "ROAS")]
    roas: String,
    #[tabled(rename = "Spend")]
    spend: String,
    #[tabled(rename = "Revenue")]
    revenue: String,
}

impl From<&CampaignMetrics> for DashboardRow {
    fn from(m: &CampaignMetrics) -> Self {
        Self {
            name: m.name.clone(),
            impressions: format_count(m.impressions),
            clicks: format_count(m.clicks),
            conversions: format_count(m.conversions),
            ctr: format_percent(m.ctr),
            cvr: format_percent(m.cvr),
            cpc: format_money(m.cpc),
            cpa: format_money(m.cpa),
            roas: color_roas(m.roas).to_string(),
            spend: format_money(m.spend),
            revenue: format_money(m.revenue),
        }
    }
}

pub fn format_count(value: f64) -> String {
    format!("{value:.0}")
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn format_money(value: f64) -> String {
    format!("${value:.2}")
}

pub fn format_roas(value: f64) -> String {
    format!("{value:.2}x")
}

/// Green at 4x and above, yellow from 2x, red below.
pub fn color_roas(value: f64) -> ColoredString {
    let s = format_roas(value);
    if value >= 4.0 {
        s.green().bold()
    } else if value >= 2.0 {
        s.yellow()
    } else {
        s.red()
    }
}

/// The sort key's value for `m`, formatted the way the table shows it.
pub fn format_key_value(key: SortKey, m: &CampaignMetrics) -> String {
    let value = key.value(m);
    match key {
        SortKey::Roas => format_roas(value),
        SortKey::Ctr | SortKey::Cvr => format_percent(value),
        SortKey::Cpa | SortKey::Spend | SortKey::Revenue => format_money(value),
    }
}

/// Render the full dashboard. `source` is shown in the header.
pub fn render_dashboard(report: &CampaignReport, source: &str) -> String {
    let mut out = Vec::new();

    out.push(String::new());
    out.push(format!(
        "{} — {}",
        " Marketing Metrics CLI".bold().cyan(),
        source.dimmed()
    ));
    out.push(subtitle(report).dimmed().to_string());
    out.push(String::new());

    if report.is_empty() {
        out.push("No campaigns matched the current filter.".yellow().to_string());
    } else {
        let rows: Vec<DashboardRow> = report.campaigns.iter().map(DashboardRow::from).collect();
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
            .with(Modify::new(Columns::first()).with(Alignment::left()))
            .to_string();
        out.push(table);
    }

    out.extend(summary(report));

    if report.campaigns.len() > 1 {
        out.extend(highlights(report));
    }

    out.push(String::new());
    out.join("\n")
}

fn subtitle(report: &CampaignReport) -> String {
    let mut parts = vec![
        format!("{} campaigns", report.campaigns.len()),
        format!("sorted by {}", report.sort_key),
    ];
    if report.min_roas > 0.0 {
        parts.push(format!("min ROAS {}", format_roas(report.min_roas)));
    }
    if report.filtered_out() > 0 {
        parts.push(format!("{} filtered out", report.filtered_out()));
    }
    parts.join(" · ")
}

fn summary(report: &CampaignReport) -> Vec<String> {
    let total = &report.totals;
    let line = |label: &str, value: String| format!("  {:<22} {}", label, value.bold());

    let mut lines = vec![
        String::new(),
        format!("── Summary {}", "─".repeat(RULE_WIDTH - 11))
            .bold()
            .cyan()
            .to_string(),
        line("Total Spend:", format_money(total.spend)),
        line("Total Revenue:", format_money(total.revenue)),
        line("Blended ROAS:", format_roas(total.roas)),
        line("Blended CTR:", format_percent(total.ctr)),
        line("Blended CVR:", format_percent(total.cvr)),
        line("Blended CPA:", format_money(total.cpa)),
        line("Blended CPC:", format_money(total.cpc)),
    ];
    if let Some(median) = report.median_cpa {
        lines.push(line("Median CPA:", format_money(median)));
    }
    lines.push(line(
        "ROAS Tiers:",
        format!(
            "{} strong · {} viable · {} unprofitable",
            report.tiers.strong, report.tiers.viable, report.tiers.unprofitable
        ),
    ));
    lines.push("─".repeat(RULE_WIDTH).bold().cyan().to_string());
    lines
}

fn highlights(report: &CampaignReport) -> Vec<String> {
    let mut lines = vec![String::new()];
    if let Some(best) = &report.best {
        let label = format!("Best {:<6}:", report.sort_key.as_str().to_uppercase());
        lines.push(format!(
            "{} {} ({})",
            label.green(),
            best.name,
            format_key_value(report.sort_key, best)
        ));
    }
    if let Some(cheapest) = &report.lowest_cpa {
        lines.push(format!(
            "{} {} ({})",
            "Lowest CPA :".yellow(),
            cheapest.name,
            format_money(cheapest.cpa)
        ));
    }
    lines
}

// ─── Tests ──────────────────────────────────────────────────────────────────

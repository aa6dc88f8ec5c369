//! Campaign Metrics: KPI report for campaign performance exports.
//!
//! Reads a CSV with `campaign_name, impressions, clicks, conversions, spend,
//! revenue` columns, computes CTR, CVR, CPC, CPA, ROAS and revenue per
//! conversion, and prints a sorted, filtered report with blended totals.
//!
//! ```bash
//! campaign-metrics --file data/sample_campaigns.csv
//! campaign-metrics --file data/sample_campaigns.csv --sort cpa
//! campaign-metrics --file data/sample_campaigns.csv --min-roas 2.0 --format json
//! ```

use anyhow::Context;
use campaign_analytics::{CampaignReport, ReportOptions, SortKey};
use campaign_core::config::{AppConfig, LoggingConfig};
use campaign_core::loader::load_csv;
use campaign_core::CampaignError;
use campaign_reporting::OutputFormat;
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "campaign-metrics")]
#[command(about = "Compute marketing KPIs from a campaign performance CSV")]
#[command(version)]
struct Cli {
    /// Path to campaign CSV file (overrides config)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Sort by: roas | ctr | cvr | cpa | spend | revenue
    #[arg(short, long)]
    sort: Option<String>,

    /// Only show campaigns with ROAS >= value
    #[arg(long, allow_negative_numbers = true)]
    min_roas: Option<f64>,

    /// Output format: table | json | csv
    #[arg(long)]
    format: Option<String>,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    no_color: bool,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("Error: {e:#}").red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // An explicit config file must load; the environment alone may not.
    let (mut config, fallback) = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) if cli.config.is_some() => return Err(CampaignError::from(e).into()),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&config.logging);
    if let Some(e) = fallback {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    // Apply CLI overrides
    if let Some(file) = cli.file {
        config.input = Some(file.display().to_string());
    }
    if let Some(sort) = cli.sort {
        config.report.sort_key = sort;
    }
    if let Some(min_roas) = cli.min_roas {
        config.report.min_roas = min_roas;
    }
    if let Some(format) = cli.format {
        config.report.format = format;
    }
    if cli.no_color {
        config.report.color = false;
    }

    if !config.report.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = config.report.format.parse()?;
    if !config.report.min_roas.is_finite() {
        return Err(CampaignError::Config(format!(
            "--min-roas must be a finite number, got {}",
            config.report.min_roas
        ))
        .into());
    }
    let input = config.input.clone().ok_or_else(|| {
        CampaignError::Config("--file flag is required (or set CAMPAIGN_METRICS__INPUT)".into())
    })?;

    let options = ReportOptions {
        sort_key: SortKey::resolve(Some(config.report.sort_key.as_str())),
        min_roas: config.report.min_roas,
    };

    info!(
        input = %input,
        sort_key = %options.sort_key,
        min_roas = options.min_roas,
        format = %format,
        "Configuration loaded"
    );

    let records = load_csv(Path::new(&input)).with_context(|| format!("failed to load {input}"))?;

    if records.is_empty() {
        eprintln!("{}", "Warning: no campaign rows found in file.".yellow());
        return Ok(());
    }

    let report = CampaignReport::build(&records, &options);
    let output = campaign_reporting::render(&report, format, &input)?;
    println!("{}", output.trim_end());

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter.as_str().into());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

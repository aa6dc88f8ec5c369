use campaign_core::CampaignError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = CampaignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(CampaignError::Config(format!(
                "unsupported output format {other:?} (expected table, json or csv)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!(" JSON ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
    }

    #[test]
    fn test_unknown_format_is_a_config_error() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, CampaignError::Config(_)));
        assert!(err.to_string().contains("xml"));
    }
}

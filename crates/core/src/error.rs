use thiserror::Error;

pub type CampaignResult<T> = Result<T, CampaignError>;

#[derive(Error, Debug)]
pub enum CampaignError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("missing required column: {0:?}")]
    MissingColumn(String),

    /// A data row failed validation. `row` counts records from 1, with the
    /// header as row 1; blank lines are not counted.
    #[error("row {row}, column {column:?}: {reason}")]
    Parse {
        row: u64,
        column: String,
        reason: String,
    },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CampaignError {
    pub fn parse(row: u64, column: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            row,
            column: column.to_string(),
            reason: reason.into(),
        }
    }
}

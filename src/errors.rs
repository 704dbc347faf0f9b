use thiserror::Error;

pub type Result<T> = std::result::Result<T, MiningError>;

#[derive(Error, Debug)]
pub enum MiningError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Accounting violation: {0}")]
    AccountingViolation(String),

    #[error("No patterns meet the minimum support")]
    NoPatterns,

    #[error("Incomplete data: {0}")]
    IncompleteData(String),

    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

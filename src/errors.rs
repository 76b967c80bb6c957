use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("malformed record (expected KIND,AMOUNT,CATEGORY,DESCRIPTION,DATE): {line}")]
    MalformedRecord { line: String },
    #[error("unknown transaction kind: {0}")]
    UnknownKind(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

use thiserror::Error;

/// Error type that captures the failures this crate can surface.
///
/// `InvalidBudget` is the only calculation failure; everything else the
/// user can type is coerced rather than rejected. The remaining variants
/// wrap persistence faults from the record store and config file.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid budget: enter an amount greater than zero")]
    InvalidBudget,
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Top-level failure reported by the CLI entry point.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

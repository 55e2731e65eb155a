//! Error types for tally

use thiserror::Error;

/// Main error type for the tally application
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LedgerError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LedgerError::InvalidAmount(_) => 2,
            LedgerError::InvalidDate(_) => 3,
            LedgerError::RecordNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            LedgerError::InvalidAmount(input) => {
                format!(
                    "Invalid amount: '{}'\n\n\
                    Amounts must be decimal numbers:\n\
                    • 42\n\
                    • 12.50\n\n\
                    Example: tally add 2025-01-17 Expense 12.50 coffee",
                    input
                )
            }
            LedgerError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: tally search --from 2025-01-01 --to 2025-01-31",
                    input
                )
            }
            LedgerError::RecordNotFound(record) => {
                format!(
                    "No record found matching: {}\n\n\
                    Suggestions:\n\
                    • Use 'tally list' to see stored records\n\
                    • Each given field only needs to appear in the stored line\n\
                    • Leave out --description to match any description",
                    record
                )
            }
            LedgerError::Io(e) => {
                format!(
                    "IO error: {}\n\n\
                    Suggestions:\n\
                    • Check that the ledger file path is correct (--file or tally.toml)\n\
                    • Run 'tally init' to create the ledger file\n\
                    • Check file permissions",
                    e
                )
            }
            LedgerError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: tally config file ledger.txt",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using LedgerError
pub type Result<T> = std::result::Result<T, LedgerError>;

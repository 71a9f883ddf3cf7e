//! Error types for the wallet report.

use thiserror::Error;

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while building a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Price feed parsing error
    #[error("Price feed error: {0}")]
    Json(#[from] serde_json::Error),

    /// Swap request rejected by validation
    #[error("Swap rejected: {0}")]
    Swap(#[from] SwapError),

    /// Missing input file arguments
    #[error("Missing input files. Usage: wallet-report <balances.csv> <prices.json>")]
    MissingArgument,
}

/// Validation errors for a swap request.
///
/// The balance pipeline itself is total and never produces these; they exist
/// only for the swap quote surface, where a bad request must be reported to
/// the caller rather than silently dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    /// A currency field was left empty
    #[error("no {0} currency selected")]
    EmptyCurrency(&'static str),

    /// Amount must be strictly positive
    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    /// Amount below the minimum swap size
    #[error("minimum amount is 0.01")]
    BelowMinimum,

    /// No usable price entry for the currency
    #[error("exchange rate not available for {0}")]
    PriceUnavailable(String),
}

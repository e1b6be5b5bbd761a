//! Error Types
//!
//! Every failure the service can report is a local, recoverable condition.
//! The analyzer and the query interpreter never fail; errors only arise at the
//! service boundary (input policy, store identity checks, filter validation).

use thiserror::Error;

/// Errors surfaced by the string service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// The submitted value was rejected before analysis.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A record with the same content hash is already stored.
    #[error("String already exists in the system")]
    Conflict,

    /// No record matches the requested value.
    #[error("String does not exist in the system")]
    NotFound,

    /// The natural-language query produced no recognized filters.
    #[error("Unable to parse natural language query: {0}")]
    UnparseableQuery(String),

    /// A structured filter parameter is out of range.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

/// Result type for string service operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

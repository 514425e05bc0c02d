//! Error types for the grouping engine and its collaborators.

use thiserror::Error;

/// Errors returned by this crate.
#[derive(Debug, Error)]
pub enum GroupError {
    /// Underlying I/O failure while reading records or configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-file decoding failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A document produced no tokens, so term frequencies are undefined.
    #[error("document has no terms after tokenization")]
    EmptyDocument,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: String,
    },

    /// An input record could not be interpreted.
    #[error("invalid record at line {line}: {message}")]
    InvalidRecord {
        /// 1-based line in the source file.
        line: u64,
        /// What was wrong with the row.
        message: String,
    },
}

/// Result type used by this crate.
pub type GroupResult<T> = std::result::Result<T, GroupError>;

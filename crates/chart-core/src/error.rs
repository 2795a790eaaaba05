// File: crates/chart-core/src/error.rs
// Summary: Error type shared by loading, chart building and page mounting.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// Numeric cell that is empty, unparsable or not finite. `line` is 1-based
    /// and counts the header row.
    #[error("line {line}: column '{column}' has invalid number {value:?}")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("dataset has no records")]
    EmptyDataset,

    #[error("host document has no element with id '{0}'")]
    MissingHostElement(&'static str),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

//! Error types for record-store operations.

use thiserror::Error;

/// Result type for record-store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while loading the dataset.
///
/// Any of these is fatal for the session: the dashboard never starts with a
/// partial dataset.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The dataset file could not be opened.
    #[error("failed to open dataset file `{path}`")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the CSV header.
    #[error("dataset is missing required column `{0}`")]
    MissingColumn(String),

    /// A row failed type coercion (unparseable date, non-numeric measure, ...).
    #[error("malformed dataset row: {0}")]
    Malformed(#[from] csv::Error),

    /// The file parsed but contained no rows.
    #[error("dataset contains no rows")]
    Empty,
}

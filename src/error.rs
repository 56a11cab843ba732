//! Error types for the feature-engineering pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PrepError>;

/// Main error type for the feature-engineering pipeline.
///
/// Every variant is unrecoverable for the run: errors propagate to the
/// caller and abort the pipeline without writing partial output.
#[derive(Error, Debug)]
pub enum PrepError {
    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error("Unknown category '{label}' in column '{column}'")]
    UnknownCategory { column: String, label: String },

    #[error("Train/test schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data error: {0}")]
    Data(String),
}

impl From<polars::error::PolarsError> for PrepError {
    fn from(err: polars::error::PolarsError) -> Self {
        PrepError::Data(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PrepError::MissingColumn("YrSold".to_string());
        assert_eq!(err.to_string(), "Column not found: YrSold");

        let err = PrepError::UnknownCategory {
            column: "ExterQual".to_string(),
            label: "Xx".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown category 'Xx' in column 'ExterQual'");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PrepError = io_err.into();
        assert!(matches!(err, PrepError::Io(_)));
    }
}

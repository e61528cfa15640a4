//! Error types for the examscore library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for examscore operations.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Error reading or accessing the dataset file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON or a record has the wrong shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required top-level section is absent from the dataset.
    #[error("Dataset is missing the '{0}' section")]
    MissingSection(&'static str),

    /// A top-level section is present but has the wrong type.
    #[error("Invalid '{section}' section: {message}")]
    InvalidSection {
        section: &'static str,
        message: String,
    },

    /// The caller supplied malformed or missing query parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A well-formed query matched nothing.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl ScoreError {
    /// Whether this error was raised while loading a dataset.
    ///
    /// Load errors are fatal: a process without a dataset has nothing to serve.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            ScoreError::Io { .. }
                | ScoreError::Json(_)
                | ScoreError::MissingSection(_)
                | ScoreError::InvalidSection { .. }
        )
    }
}

/// Result type alias for examscore operations.
pub type Result<T> = std::result::Result<T, ScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_errors_are_classified() {
        assert!(ScoreError::MissingSection("students").is_load_error());
        assert!(!ScoreError::InvalidInput("empty".into()).is_load_error());
        assert!(!ScoreError::NotFound("123".into()).is_load_error());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ScoreError::MissingSection("metadata").to_string(),
            "Dataset is missing the 'metadata' section"
        );
        assert_eq!(
            ScoreError::NotFound("0101".into()).to_string(),
            "Not found: 0101"
        );
    }
}

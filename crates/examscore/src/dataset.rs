//! Dataset documents: parsing and validation.
//!
//! A dataset is a JSON document of the form
//!
//! ```text
//! {
//!   "metadata": { "total_students": 2, ... },
//!   "students": {
//!     "01000001": { "ma_hd": "01", "tong_diem": "25.5", "toan": "8.5", ... },
//!     ...
//!   }
//! }
//! ```
//!
//! Both sections are required. Student order in the document is preserved.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, ScoreError};
use crate::record::StudentRecord;

/// Default file name of the dataset document.
pub const DEFAULT_DATASET_FILE: &str = "diem-thi-api.json";

/// A parsed dataset document.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Descriptive attributes, passed through verbatim.
    pub metadata: Value,
    /// Records keyed by registration number, in document order.
    pub students: IndexMap<String, StudentRecord>,
}

/// Top-level shape before the required sections are checked.
#[derive(Deserialize)]
struct RawDataset {
    #[serde(default)]
    metadata: Option<Value>,
    #[serde(default)]
    students: Option<IndexMap<String, StudentRecord>>,
}

impl Dataset {
    /// Create a dataset from already-parsed parts.
    pub fn new(metadata: Value, students: IndexMap<String, StudentRecord>) -> Self {
        Self { metadata, students }
    }

    /// Load a dataset from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| ScoreError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), "Reading dataset");
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a dataset from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let raw: RawDataset = serde_json::from_reader(reader)?;
        Self::validate(raw)
    }

    /// Parse a dataset from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        Self::validate(raw)
    }

    fn validate(raw: RawDataset) -> Result<Self> {
        let metadata = raw.metadata.ok_or(ScoreError::MissingSection("metadata"))?;
        if !metadata.is_object() {
            return Err(ScoreError::InvalidSection {
                section: "metadata",
                message: "expected a JSON object".to_string(),
            });
        }

        let students = raw.students.ok_or(ScoreError::MissingSection("students"))?;

        Ok(Self { metadata, students })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// The `total_students` figure declared in the metadata, if any.
    ///
    /// This is descriptive only; it is never recomputed from `students`.
    pub fn declared_total(&self) -> Option<u64> {
        self.metadata.get("total_students").and_then(|total| {
            total
                .as_u64()
                .or_else(|| total.as_str().and_then(|s| s.trim().parse().ok()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_document() {
        let dataset = Dataset::from_json_str(
            r#"{
                "metadata": {"total_students": 2, "source": "so-gddt"},
                "students": {
                    "002": {"ma_hd": "1", "tong_diem": "20"},
                    "001": {"ma_hd": "2", "tong_diem": "21"}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.declared_total(), Some(2));
        assert_eq!(dataset.metadata["source"], json!("so-gddt"));
        // Document order, not key order
        let keys: Vec<&str> = dataset.students.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["002", "001"]);
    }

    #[test]
    fn test_missing_sections() {
        let err = Dataset::from_json_str(r#"{"students": {}}"#).unwrap_err();
        assert!(matches!(err, ScoreError::MissingSection("metadata")));

        let err = Dataset::from_json_str(r#"{"metadata": {}}"#).unwrap_err();
        assert!(matches!(err, ScoreError::MissingSection("students")));
    }

    #[test]
    fn test_metadata_must_be_object() {
        let err = Dataset::from_json_str(r#"{"metadata": 3, "students": {}}"#).unwrap_err();
        assert!(matches!(err, ScoreError::InvalidSection { section: "metadata", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = Dataset::from_json_str(r#"{"metadata": {"#).unwrap_err();
        assert!(matches!(err, ScoreError::Json(_)));
        assert!(err.is_load_error());

        let err = Dataset::from_json_str(r#"{"metadata": {}, "students": []}"#).unwrap_err();
        assert!(matches!(err, ScoreError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::from_path("/nonexistent/diem-thi-api.json").unwrap_err();
        assert!(matches!(err, ScoreError::Io { .. }));
    }

    #[test]
    fn test_declared_total_as_text() {
        let dataset = Dataset::new(json!({"total_students": "42"}), IndexMap::new());
        assert_eq!(dataset.declared_total(), Some(42));
        assert!(dataset.is_empty());
    }
}

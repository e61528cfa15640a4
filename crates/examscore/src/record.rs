//! Student records and the shape they are returned in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parse::{CouncilKey, parse_score};

/// One candidate's entry in the dataset.
///
/// Only the council code and total score are interpreted. Every other field
/// (subject scores, names, ...) is kept in `subjects` and written back out
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Code of the administering examination council (`ma_hd`).
    #[serde(rename = "ma_hd", default, skip_serializing_if = "Option::is_none")]
    pub council_code: Option<Value>,
    /// Aggregate score (`tong_diem`), usually stored as text.
    #[serde(rename = "tong_diem", default, skip_serializing_if = "Option::is_none")]
    pub total_score: Option<Value>,
    /// Remaining fields, in document order.
    #[serde(flatten)]
    pub subjects: IndexMap<String, Value>,
}

impl StudentRecord {
    /// Create a record from a council code and total score.
    pub fn new(council_code: impl Into<Value>, total_score: impl Into<Value>) -> Self {
        Self {
            council_code: Some(council_code.into()),
            total_score: Some(total_score.into()),
            subjects: IndexMap::new(),
        }
    }

    /// Add a passthrough field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.subjects.insert(name.into(), value.into());
        self
    }

    /// The total score as a number, if it parses.
    pub fn score(&self) -> Option<f64> {
        self.total_score.as_ref().and_then(parse_score)
    }

    /// The normalised council code, if present.
    pub fn council_key(&self) -> Option<CouncilKey> {
        self.council_code.as_ref().and_then(CouncilKey::from_value)
    }
}

/// A record together with its registration number.
///
/// Serializes as `{"sbd": ..., <record fields>}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StudentView<'a> {
    /// Registration number.
    pub sbd: &'a str,
    #[serde(flatten)]
    pub record: &'a StudentRecord,
}

impl<'a> StudentView<'a> {
    pub fn new(sbd: &'a str, record: &'a StudentRecord) -> Self {
        Self { sbd, record }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_keeps_unknown_fields() {
        let raw = json!({
            "ma_hd": "05",
            "tong_diem": "25.5",
            "toan": "8.5",
            "van": "9"
        });
        let record: StudentRecord = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(record.council_code, Some(json!("05")));
        assert_eq!(record.score(), Some(25.5));
        assert_eq!(record.subjects.len(), 2);
        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }

    #[test]
    fn test_record_with_missing_fields() {
        let record: StudentRecord = serde_json::from_value(json!({"toan": "7"})).unwrap();

        assert_eq!(record.council_code, None);
        assert_eq!(record.score(), None);
        assert_eq!(record.council_key(), None);
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({"toan": "7"}));
    }

    #[test]
    fn test_view_merges_registration_number() {
        let record = StudentRecord::new("5", "20").with_field("anh", "6.25");
        let view = StudentView::new("01000001", &record);

        assert_eq!(
            serde_json::to_value(view).unwrap(),
            json!({"sbd": "01000001", "ma_hd": "5", "tong_diem": "20", "anh": "6.25"})
        );
    }
}

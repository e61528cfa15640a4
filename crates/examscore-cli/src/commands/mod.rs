//! CLI command implementations.

pub mod council;
pub mod info;
pub mod lookup;
pub mod range;
pub mod serve;
pub mod top;

use std::path::Path;

use examscore::{ScoreStore, StudentView};

/// Load the dataset, logging what was read.
pub fn load_store(path: &Path) -> Result<ScoreStore, examscore::ScoreError> {
    let store = ScoreStore::load(path)?;

    tracing::info!(
        path = %path.display(),
        records = store.len(),
        declared_total = ?store.dataset().declared_total(),
        "Loaded dataset"
    );

    Ok(store)
}

/// Print a value as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a record's total score for display.
pub fn display_score(student: &StudentView<'_>) -> String {
    match student.record.total_score.as_ref() {
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

/// Format a record's council code for display.
pub fn display_council(student: &StudentView<'_>) -> String {
    match student.record.council_code.as_ref() {
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

/// Print one line per student: registration number, council, total score.
pub fn print_students(students: &[StudentView<'_>]) {
    for student in students {
        println!(
            "  {:<12} {:>6} {:>8}",
            student.sbd,
            display_council(student),
            display_score(student)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dataset_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_store() {
        let file = dataset_file(
            r#"{"metadata": {"total_students": 1}, "students": {"001": {"ma_hd": 3, "tong_diem": 21}}}"#,
        );
        let store = load_store(file.path()).unwrap();

        let student = store.lookup("001").unwrap();
        assert_eq!(display_score(&student), "21");
        assert_eq!(display_council(&student), "3");
    }

    #[test]
    fn test_load_store_failures_are_load_errors() {
        let missing = load_store(Path::new("/nonexistent/diem-thi-api.json")).unwrap_err();
        assert!(missing.is_load_error());

        let file = dataset_file(r#"{"metadata": {}}"#);
        assert!(load_store(file.path()).unwrap_err().is_load_error());
    }

    #[test]
    fn test_display_missing_fields() {
        let file = dataset_file(r#"{"metadata": {}, "students": {"001": {"toan": "8"}}}"#);
        let store = load_store(file.path()).unwrap();

        let student = store.lookup("001").unwrap();
        assert_eq!(display_score(&student), "-");
        assert_eq!(display_council(&student), "-");
    }
}

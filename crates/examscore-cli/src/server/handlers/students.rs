//! Registration number lookup handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Response,
    Json,
};
use serde_json::Value;

use super::success;
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// GET /api/student/:sbd
pub async fn get_student(
    State(state): State<AppState>,
    sbd: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(sbd) = sbd.map_err(ApiError::from)?;
    let student = state.store.lookup(&sbd)?;
    Ok(success(student))
}

/// POST /api/students/search
///
/// Body: `{"sbds": ["01000001", "01000002", ...]}`
pub async fn search_students(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e.body_text())))?;

    let sbds = registration_numbers(&body)?;
    let result = state.store.batch_lookup(&sbds)?;

    Ok(success(result))
}

/// Extract the `sbds` list from a search body.
///
/// Numbers are accepted and used in their decimal form, since registration
/// numbers are often sent unquoted.
fn registration_numbers(body: &Value) -> Result<Vec<String>, ApiError> {
    let list = body
        .get("sbds")
        .and_then(Value::as_array)
        .filter(|list| !list.is_empty())
        .ok_or_else(|| {
            ApiError::BadRequest("Provide a non-empty list of registration numbers in 'sbds'".to_string())
        })?;

    list.iter()
        .map(|sbd| match sbd {
            Value::String(sbd) => Ok(sbd.clone()),
            Value::Number(sbd) => Ok(sbd.to_string()),
            other => Err(ApiError::BadRequest(format!(
                "Registration numbers must be strings, got {}",
                other
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registration_numbers() {
        let sbds = registration_numbers(&json!({"sbds": ["001", 2, "001"]})).unwrap();
        assert_eq!(sbds, vec!["001", "2", "001"]);
    }

    #[test]
    fn test_registration_numbers_rejects_bad_bodies() {
        assert!(registration_numbers(&json!({})).is_err());
        assert!(registration_numbers(&json!({"sbds": []})).is_err());
        assert!(registration_numbers(&json!({"sbds": "001"})).is_err());
        assert!(registration_numbers(&json!(["001"])).is_err());
        assert!(registration_numbers(&json!({"sbds": [["001"]]})).is_err());
    }
}

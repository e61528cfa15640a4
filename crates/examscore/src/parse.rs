//! Lenient parsing of scores and council codes.
//!
//! Source datasets store most numbers as text and are not consistent about
//! it: scores may be blank or garbage, and council codes may or may not be
//! zero-padded. Everything here returns `None` instead of failing.

use serde_json::Value;

/// Parse a decimal number from text, ignoring surrounding whitespace.
///
/// Non-finite results (`"inf"`, `"NaN"`) are treated as parse failures.
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a score stored either as a JSON number or as text.
pub fn parse_score(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|value| value.is_finite()),
        Value::String(text) => parse_decimal(text),
        _ => None,
    }
}

/// Normalised council code used for grouping.
///
/// Codes with an integral value compare numerically, so `"05"`, `"5"`,
/// `"5.0"`, `5` and `5.0` are the same council. Anything else compares as
/// trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CouncilKey {
    Numeric(i64),
    Text(String),
}

impl CouncilKey {
    /// Normalise a council code given as text. Blank codes have no key.
    pub fn from_text(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Ok(code) = trimmed.parse::<i64>() {
            return Some(CouncilKey::Numeric(code));
        }

        Some(match parse_decimal(trimmed).and_then(integral) {
            Some(code) => CouncilKey::Numeric(code),
            None => CouncilKey::Text(trimmed.to_string()),
        })
    }

    /// Normalise a council code as stored in a record.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Self::from_text(text),
            Value::Number(number) => {
                if let Some(code) = number.as_i64() {
                    return Some(CouncilKey::Numeric(code));
                }
                match number.as_f64().and_then(integral) {
                    Some(code) => Some(CouncilKey::Numeric(code)),
                    None => Some(CouncilKey::Text(number.to_string())),
                }
            }
            _ => None,
        }
    }
}

/// The integer a finite float represents exactly, if any.
fn integral(value: f64) -> Option<i64> {
    (value.fract() == 0.0 && value.abs() < i64::MAX as f64).then_some(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("25.5"), Some(25.5));
        assert_eq!(parse_decimal("  7 "), Some(7.0));
        assert_eq!(parse_decimal("bad"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn test_parse_score_from_number_and_text() {
        assert_eq!(parse_score(&json!(18.75)), Some(18.75));
        assert_eq!(parse_score(&json!("18.75")), Some(18.75));
        assert_eq!(parse_score(&json!(null)), None);
        assert_eq!(parse_score(&json!(["18"])), None);
    }

    #[test]
    fn test_council_key_ignores_padding() {
        let padded = CouncilKey::from_text("05");
        assert_eq!(padded, Some(CouncilKey::Numeric(5)));
        assert_eq!(CouncilKey::from_value(&json!(5)), padded);
        assert_eq!(CouncilKey::from_value(&json!(" 5")), padded);
        assert_eq!(CouncilKey::from_value(&json!(5.0)), padded);
        assert_eq!(CouncilKey::from_text("5.0"), padded);
        assert_eq!(CouncilKey::from_value(&json!(" 05.00 ")), padded);
    }

    #[test]
    fn test_council_key_fractional_codes_stay_text() {
        assert_eq!(
            CouncilKey::from_text("5.5"),
            Some(CouncilKey::Text("5.5".to_string()))
        );
        assert_eq!(
            CouncilKey::from_value(&json!(5.5)),
            Some(CouncilKey::Text("5.5".to_string()))
        );
    }

    #[test]
    fn test_council_key_text_fallback() {
        assert_eq!(
            CouncilKey::from_text(" HD-01 "),
            Some(CouncilKey::Text("HD-01".to_string()))
        );
        assert_eq!(CouncilKey::from_text("   "), None);
        assert_eq!(CouncilKey::from_value(&json!(null)), None);
    }
}

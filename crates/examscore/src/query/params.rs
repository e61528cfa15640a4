//! Permissive parsing of numeric query parameters.

use serde::{Deserialize, Serialize};

use crate::parse::parse_decimal;

/// Lower bound used when `min` is absent or not a number.
pub const DEFAULT_MIN_SCORE: f64 = 0.0;

/// Upper bound used when `max` is absent or not a number.
pub const DEFAULT_MAX_SCORE: f64 = 30.0;

/// Number of records returned by a top-scores query when `limit` is absent
/// or not a number.
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Inclusive score range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SCORE,
            max: DEFAULT_MAX_SCORE,
        }
    }
}

impl ScoreRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Build a range from raw parameters, defaulting each bound separately.
    pub fn from_params(min: Option<&str>, max: Option<&str>) -> Self {
        Self {
            min: min.and_then(parse_decimal).unwrap_or(DEFAULT_MIN_SCORE),
            max: max.and_then(parse_decimal).unwrap_or(DEFAULT_MAX_SCORE),
        }
    }

    /// Whether `score` lies within the range, bounds included.
    pub fn contains(&self, score: f64) -> bool {
        score >= self.min && score <= self.max
    }

    /// Human-readable label, e.g. `"0 - 30"` or `"5.5 - 10"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.min, self.max)
    }
}

/// Parse a result limit, falling back to [`DEFAULT_TOP_LIMIT`].
///
/// Fractional values are truncated (`"5.9"` is 5). Negative values and
/// anything that is not a number use the default.
pub fn parse_limit(limit: Option<&str>) -> usize {
    let Some(text) = limit.map(str::trim) else {
        return DEFAULT_TOP_LIMIT;
    };

    if let Ok(limit) = text.parse::<usize>() {
        return limit;
    }

    match parse_decimal(text) {
        Some(limit) if limit >= 0.0 => limit.trunc() as usize,
        _ => DEFAULT_TOP_LIMIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_defaults() {
        assert_eq!(ScoreRange::from_params(None, None), ScoreRange::new(0.0, 30.0));
        assert_eq!(
            ScoreRange::from_params(Some("abc"), Some("")),
            ScoreRange::default()
        );
    }

    #[test]
    fn test_range_bounds_default_independently() {
        let range = ScoreRange::from_params(Some("20"), Some("x"));
        assert_eq!(range, ScoreRange::new(20.0, 30.0));

        let range = ScoreRange::from_params(None, Some("12.5"));
        assert_eq!(range, ScoreRange::new(0.0, 12.5));
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = ScoreRange::new(10.0, 20.0);
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(9.99));
        assert!(!range.contains(20.01));
    }

    #[test]
    fn test_range_label() {
        assert_eq!(ScoreRange::default().label(), "0 - 30");
        assert_eq!(ScoreRange::new(5.5, 10.0).label(), "5.5 - 10");
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None), 10);
        assert_eq!(parse_limit(Some("3")), 3);
        assert_eq!(parse_limit(Some(" 25 ")), 25);
        assert_eq!(parse_limit(Some("5.9")), 5);
        assert_eq!(parse_limit(Some("0")), 0);
        assert_eq!(parse_limit(Some("-4")), 10);
        assert_eq!(parse_limit(Some("lots")), 10);
    }
}

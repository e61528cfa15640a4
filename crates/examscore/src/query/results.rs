//! Result shapes returned by [`ScoreStore`](crate::ScoreStore) queries.
//!
//! Results borrow their records from the store; serializing them produces the
//! JSON returned to API callers.

use serde::Serialize;

use crate::record::StudentView;

/// Outcome of looking up several registration numbers at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchLookup<'a> {
    /// Records found, in input order.
    pub found: Vec<StudentView<'a>>,
    /// Registration numbers with no record, in input order.
    #[serde(rename = "notFound")]
    pub not_found: Vec<String>,
    /// Number of records found.
    pub total: usize,
}

/// Records whose total score falls within a range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeStatistics<'a> {
    /// Range label, e.g. `"0 - 30"`.
    pub range: String,
    pub count: usize,
    /// Matching records in dataset order.
    pub students: Vec<StudentView<'a>>,
}

/// Aggregate statistics for one examination council.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouncilStatistics<'a> {
    /// Council code as requested.
    #[serde(rename = "ma_hd")]
    pub council_code: String,
    /// Every matched record, including ones without a valid score.
    pub total_students: usize,
    /// Mean over valid scores, rounded to two decimals.
    pub avg_score: Option<f64>,
    pub max_score: Option<f64>,
    pub min_score: Option<f64>,
    pub students: Vec<StudentView<'a>>,
}

/// Highest-scoring records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopScores<'a> {
    /// Limit as requested, which may exceed `students.len()`.
    pub limit: usize,
    /// Records ordered by descending score.
    pub students: Vec<StudentView<'a>>,
}

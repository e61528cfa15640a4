//! The score store and its query operations.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::dataset::Dataset;
use crate::error::{Result, ScoreError};
use crate::parse::CouncilKey;
use crate::query::{BatchLookup, CouncilStatistics, RangeStatistics, ScoreRange, TopScores};
use crate::record::{StudentRecord, StudentView};
use crate::stats::{ScoreSummary, round2};

/// Immutable, indexed view of a dataset.
///
/// Besides the dataset itself the store keeps three indexes built at
/// construction time, all keyed by a record's position in the dataset:
///
/// - the parsed total score of every record,
/// - the positions of the records in each council,
/// - every position ordered by descending score.
///
/// Nothing is mutated after construction, so a store can be shared across
/// threads behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    dataset: Dataset,
    scores: Vec<Option<f64>>,
    councils: HashMap<CouncilKey, Vec<usize>>,
    ranking: Vec<usize>,
}

impl ScoreStore {
    /// Index a dataset.
    pub fn new(dataset: Dataset) -> Self {
        let scores: Vec<Option<f64>> = dataset
            .students
            .values()
            .map(StudentRecord::score)
            .collect();

        let mut councils: HashMap<CouncilKey, Vec<usize>> = HashMap::new();
        for (position, record) in dataset.students.values().enumerate() {
            if let Some(key) = record.council_key() {
                councils.entry(key).or_default().push(position);
            }
        }

        // Stable sort: equal scores keep dataset order, invalid scores go last
        let mut ranking: Vec<usize> = (0..scores.len()).collect();
        ranking.sort_by(|&a, &b| compare_descending(scores[a], scores[b]));

        let invalid = scores.iter().filter(|score| score.is_none()).count();
        tracing::debug!(
            records = scores.len(),
            invalid_scores = invalid,
            councils = councils.len(),
            "Indexed dataset"
        );

        Self {
            dataset,
            scores,
            councils,
            ranking,
        }
    }

    /// Load and index a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Dataset::from_path(path).map(Self::new)
    }

    /// Load and index a dataset from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Dataset::from_reader(reader).map(Self::new)
    }

    /// Load and index a dataset from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Dataset::from_json_str(json).map(Self::new)
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The dataset metadata, verbatim.
    pub fn metadata(&self) -> &Value {
        &self.dataset.metadata
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Number of records whose total score parses as a number.
    pub fn valid_score_count(&self) -> usize {
        self.scores.iter().filter(|score| score.is_some()).count()
    }

    /// Number of distinct councils (after normalisation).
    pub fn council_count(&self) -> usize {
        self.councils.len()
    }

    /// All records in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = StudentView<'_>> {
        self.dataset
            .students
            .iter()
            .map(|(sbd, record)| StudentView::new(sbd, record))
    }

    /// Summary of every valid score in the dataset.
    pub fn summary(&self) -> ScoreSummary {
        self.scores.iter().flatten().copied().collect()
    }

    /// Look up one record by registration number.
    ///
    /// Fails with [`ScoreError::InvalidInput`] for a blank registration number
    /// and [`ScoreError::NotFound`] for an unknown one.
    pub fn lookup(&self, sbd: &str) -> Result<StudentView<'_>> {
        if sbd.trim().is_empty() {
            return Err(ScoreError::InvalidInput(
                "registration number must not be empty".to_string(),
            ));
        }

        self.dataset
            .students
            .get_key_value(sbd)
            .map(|(sbd, record)| StudentView::new(sbd, record))
            .ok_or_else(|| ScoreError::NotFound(format!("no candidate with registration number {}", sbd)))
    }

    /// Look up several registration numbers.
    ///
    /// Each input is looked up independently and in order, so a repeated
    /// registration number appears once per occurrence. Blank entries are
    /// reported as not found.
    pub fn batch_lookup<S: AsRef<str>>(&self, sbds: &[S]) -> Result<BatchLookup<'_>> {
        if sbds.is_empty() {
            return Err(ScoreError::InvalidInput(
                "at least one registration number is required".to_string(),
            ));
        }

        let mut found = Vec::new();
        let mut not_found = Vec::new();

        for sbd in sbds {
            let sbd = sbd.as_ref();
            // Blank numbers are never looked up, matching `lookup`
            if sbd.trim().is_empty() {
                not_found.push(sbd.to_string());
                continue;
            }
            match self.dataset.students.get_key_value(sbd) {
                Some((key, record)) => found.push(StudentView::new(key, record)),
                None => not_found.push(sbd.to_string()),
            }
        }

        let total = found.len();
        Ok(BatchLookup {
            found,
            not_found,
            total,
        })
    }

    /// Records whose total score lies in `range`, in dataset order.
    ///
    /// Records without a valid score never match.
    pub fn range_query(&self, range: ScoreRange) -> RangeStatistics<'_> {
        let students: Vec<StudentView<'_>> = self
            .scores
            .iter()
            .enumerate()
            .filter(|(_, score)| score.is_some_and(|score| range.contains(score)))
            .filter_map(|(position, _)| self.view_at(position))
            .collect();

        RangeStatistics {
            range: range.label(),
            count: students.len(),
            students,
        }
    }

    /// Statistics for every record in a council.
    ///
    /// Council codes are compared after normalisation, so `"05"` and `5`
    /// select the same records. Records with an unparsable score count
    /// towards `total_students` but not towards the score statistics, which
    /// are `None` when no matched record has a valid score.
    pub fn council_aggregate(&self, council_code: &str) -> Result<CouncilStatistics<'_>> {
        let key = CouncilKey::from_text(council_code).ok_or_else(|| {
            ScoreError::InvalidInput("council code must not be empty".to_string())
        })?;

        let positions = self.councils.get(&key).map(Vec::as_slice).unwrap_or_default();

        let summary: ScoreSummary = positions
            .iter()
            .filter_map(|&position| self.scores[position])
            .collect();

        let students: Vec<StudentView<'_>> = positions
            .iter()
            .filter_map(|&position| self.view_at(position))
            .collect();

        Ok(CouncilStatistics {
            council_code: council_code.to_string(),
            total_students: students.len(),
            avg_score: summary.mean().map(round2),
            max_score: summary.max(),
            min_score: summary.min(),
            students,
        })
    }

    /// The `limit` highest-scoring records.
    ///
    /// Records without a valid score rank below every valid one; ties keep
    /// dataset order. A limit beyond the dataset size returns every record.
    pub fn top_scores(&self, limit: usize) -> TopScores<'_> {
        let students = self
            .ranking
            .iter()
            .take(limit)
            .filter_map(|&position| self.view_at(position))
            .collect();

        TopScores { limit, students }
    }

    fn view_at(&self, position: usize) -> Option<StudentView<'_>> {
        self.dataset
            .students
            .get_index(position)
            .map(|(sbd, record)| StudentView::new(sbd, record))
    }
}

/// Order scores from highest to lowest, with missing scores last.
fn compare_descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

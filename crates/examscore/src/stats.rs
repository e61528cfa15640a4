//! Score aggregation.

/// Running count, sum, minimum and maximum of a set of scores.
///
/// Minimum and maximum start out empty and are initialised by the first
/// score added, so an empty summary reports `None` for every statistic
/// rather than a placeholder value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreSummary {
    count: usize,
    sum: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl ScoreSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a score.
    pub fn add(&mut self, score: f64) {
        self.count += 1;
        self.sum += score;

        self.min = Some(match self.min {
            Some(min) if min <= score => min,
            _ => score,
        });
        self.max = Some(match self.max {
            Some(max) if max >= score => max,
            _ => score,
        });
    }

    /// Number of scores added.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Arithmetic mean, or `None` if no scores were added.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

impl Extend<f64> for ScoreSummary {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for score in iter {
            self.add(score);
        }
    }
}

impl FromIterator<f64> for ScoreSummary {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut summary = Self::new();
        summary.extend(iter);
        summary
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

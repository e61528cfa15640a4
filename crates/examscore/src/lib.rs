//! examscore: in-memory lookup and aggregation over exam score datasets.
//!
//! A dataset is a single JSON document with a `metadata` section and a
//! `students` mapping from registration number (SBD) to the candidate's
//! scores. It is loaded once into a [`ScoreStore`], which is immutable from
//! then on and answers every query by reference.
//!
//! # Core Principles
//!
//! - **Load once**: a malformed dataset is rejected up front
//! - **Read-only**: no query mutates the store, so it can be shared freely
//! - **Passthrough**: record fields the store does not interpret are kept verbatim
//!
//! # Example
//!
//! ```no_run
//! use examscore::{ScoreRange, ScoreStore};
//!
//! let store = ScoreStore::load("diem-thi-api.json").unwrap();
//!
//! let student = store.lookup("01000001").unwrap();
//! println!("{}", serde_json::to_string(&student).unwrap());
//!
//! let stats = store.council_aggregate("5").unwrap();
//! println!("Average: {:?}", stats.avg_score);
//!
//! let top = store.top_scores(10);
//! let range = store.range_query(ScoreRange::default());
//! println!("{} in {}, top {}", range.count, range.range, top.students.len());
//! ```

pub mod dataset;
pub mod error;
pub mod parse;
pub mod query;
pub mod record;
pub mod stats;

mod store;

pub use dataset::Dataset;
pub use error::{Result, ScoreError};
pub use parse::CouncilKey;
pub use query::{
    BatchLookup, CouncilStatistics, DEFAULT_TOP_LIMIT, RangeStatistics, ScoreRange, TopScores,
};
pub use record::{StudentRecord, StudentView};
pub use stats::ScoreSummary;
pub use store::ScoreStore;

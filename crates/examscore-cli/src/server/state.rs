//! Application state for the web server.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use examscore::ScoreStore;

/// Shared application state.
///
/// The store is immutable once loaded, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded dataset and its indexes.
    pub store: Arc<ScoreStore>,
    /// When the server finished loading the dataset.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: ScoreStore) -> Self {
        Self {
            store: Arc::new(store),
            started_at: Utc::now(),
        }
    }
}
